//! # Storefront demo
//!
//! Walks one session through the storefront:
//! 1.  Loading [`StoreConfig`] and starting the [`StoreSystem`].
//! 2.  Searching the catalog and filling the cart.
//! 3.  Placing the order and following it until it is delivered.

use storefront::clients::{ActorClient, StorefrontClient};
use storefront::lifecycle::{setup_tracing, StoreConfig, StoreSystem};
use storefront::model::OrderStatus;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = StoreConfig::load(None)?;
    info!(user = %config.profile.name, "Starting storefront");

    let system = StoreSystem::start(&config);
    let storefront = system.storefront.clone();

    let span = tracing::info_span!("shopping");
    async {
        let hits = storefront.search_products(Some("panadol")).await?;
        let Some(panadol) = hits.first().cloned() else {
            warn!("Panadol not in catalog");
            return Ok(());
        };
        storefront.add_to_cart(panadol.clone()).await?;
        storefront.add_to_cart(panadol).await?;
        storefront.search_products(None).await?;

        info!(
            total = %StorefrontClient::format_money(storefront.cart_total()),
            "Cart ready"
        );
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("delivery");
    async {
        let mut updates = storefront.subscribe();
        let order = storefront.place_order().await?;
        info!(order_id = %order.order_id, eta_minutes = order.estimated_minutes, "Order placed");

        let mut last_status = order.status;
        while updates.changed().await.is_ok() {
            let Some(order) = updates.borrow_and_update().active_order.clone() else {
                break;
            };
            if order.status != last_status {
                info!(progress = order.progress, status = %order.status, "Order update");
                last_status = order.status;
            }
            if order.status == OrderStatus::Delivered {
                break;
            }
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    // Shutdown system gracefully
    drop(storefront);
    system.shutdown().await?;

    info!("Session completed successfully");
    Ok(())
}
