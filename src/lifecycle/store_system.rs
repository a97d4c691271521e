use super::{StoreConfig, SystemError};
use crate::catalog::{CatalogSource, PharmacyCatalog};
use crate::clients::StorefrontClient;
use crate::storefront_actor::{self, OrderIdGenerator, RandomOrderIds, StorefrontContext};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running storefront: the actor task and the client the display layer uses.
///
/// `StoreSystem` is responsible for:
/// - **Lifecycle Management**: starting the storefront actor and stopping it
/// - **Dependency Wiring**: injecting the catalog source, order id generator and order settings
///
/// # Example
///
/// ```ignore
/// let system = StoreSystem::start(&StoreConfig::load(None)?);
///
/// let hits = system.storefront.search_products(Some("panadol")).await?;
/// system.storefront.add_to_cart(hits[0].clone()).await?;
/// let order = system.storefront.place_order().await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct StoreSystem {
    /// Client for interacting with the Storefront actor
    pub storefront: StorefrontClient,

    /// Task handle of the storefront actor (used for graceful shutdown)
    handle: JoinHandle<()>,
}

impl StoreSystem {
    /// Starts the storefront with the pharmacy catalog and random order ids.
    pub fn start(config: &StoreConfig) -> Self {
        Self::with_sources(
            config,
            Arc::new(PharmacyCatalog),
            Arc::new(RandomOrderIds::new(config.order_id_prefix.clone())),
        )
    }

    /// Starts the storefront with the given catalog source and order id generator.
    pub fn with_sources(
        config: &StoreConfig,
        catalog: Arc<dyn CatalogSource>,
        order_ids: Arc<dyn OrderIdGenerator>,
    ) -> Self {
        let (actor, storefront) = storefront_actor::new(config.profile(), config.buffer_size);

        let context = StorefrontContext {
            catalog,
            order_ids,
            settings: config.order_settings(),
        };
        let handle = tokio::spawn(actor.run(context));
        info!(buffer_size = config.buffer_size, "Storefront started");

        Self { storefront, handle }
    }

    /// Gracefully shuts down the storefront.
    ///
    /// Dropping the client closes the command channel; the actor stops its progress
    /// ticker and exits. Clones of the client held elsewhere keep it running, so drop
    /// those first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down storefront...");
        drop(self.storefront);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(SystemError::ActorTask(e.to_string()));
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
