use thiserror::Error;
use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::auth::AuthStore;
use crate::clients::CatalogClient;
use crate::config::InventoryConfig;
use crate::domain::Product;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
}

/// The application system: the fixed account store plus the catalog actor.
///
/// Responsible for starting the actor, handing out its client, and waiting
/// for it to drain on shutdown.
pub struct InventorySystem {
    pub auth_store: AuthStore,
    pub catalog_client: CatalogClient,
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// Must be called from within a tokio runtime.
    pub fn new(config: &InventoryConfig) -> Self {
        info!(
            low_stock_threshold = config.low_stock_threshold,
            channel_buffer = config.channel_buffer,
            "Starting inventory system"
        );

        let (catalog_actor, resource_client) = ResourceActor::<Product>::new(config.channel_buffer);
        let catalog_client = CatalogClient::new(resource_client, config.low_stock_threshold);
        let handle = tokio::spawn(catalog_actor.run());

        Self {
            auth_store: AuthStore::with_default_accounts(),
            catalog_client,
            handle,
        }
    }

    /// Drops this system's client and waits for the actor to stop.
    ///
    /// Clones of the catalog client held elsewhere keep the actor alive, so
    /// they must be dropped first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        drop(self.catalog_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Actor task failed");
            return Err(e.into());
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
