use thiserror::Error;

/// Errors that can occur while logging in.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}
