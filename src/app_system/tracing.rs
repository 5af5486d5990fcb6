/// Configure tracing once at application startup for the entire process.
///
/// - `RUST_LOG` controls verbosity (default `info`)
/// - uptime timer and compact format
/// - output goes to stderr so logs never interleave with the console dialogue on stdout
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=inventory_actor::clients=debug,info cargo run
/// ```
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
