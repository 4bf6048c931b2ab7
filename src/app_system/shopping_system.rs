use tracing::{error, info, instrument};

use super::SystemConfig;
use crate::actors::ShoppingService;
use crate::checkout::CheckoutService;
use crate::clients::ShoppingClient;
use crate::domain::Product;
use crate::store::InMemoryProductStore;

/// Owns the running shopping service.
///
/// Seeds the product store, starts the service task and hands out the client.
pub struct ShoppingSystem {
    pub client: ShoppingClient,
    handle: tokio::task::JoinHandle<()>,
}

impl ShoppingSystem {
    /// Starts the system over an in-memory store holding `catalog`.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(name = "shopping_system", skip(catalog))]
    pub fn new(config: SystemConfig, catalog: impl IntoIterator<Item = Product>) -> Self {
        info!("Starting shopping system");

        let store = InMemoryProductStore::with_products(catalog);
        info!(product_count = store.len(), "Product store seeded");

        let checkout = CheckoutService::with_config(store, config.checkout);
        let (service, client) = ShoppingService::new(config.buffer_size, checkout);
        let handle = tokio::spawn(service.run());

        info!("Shopping system started successfully");
        Self { client, handle }
    }

    /// Stops the service and waits for its task to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down shopping system");

        if let Err(e) = self.client.shutdown().await {
            error!(error = %e, "Shutdown request failed");
        }

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Service shutdown error");
            return Err(format!("Service task failed: {}", e));
        }

        info!("Shopping system shutdown complete");
        Ok(())
    }
}
