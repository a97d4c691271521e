//! ActorState trait implementation for the Storefront.
//!
//! This module contains the [`ActorState`] trait implementation that enables
//! [`Storefront`] to be owned by the generic [`crate::framework::StateActor`].
//!
//! See the trait implementation on [`Storefront`] for method documentation.

use super::{
    spawn_progress_ticker, Storefront, StorefrontCommand, StorefrontContext, StorefrontError,
    StorefrontReply, StorefrontSnapshot, TickOutcome,
};
use crate::catalog;
use crate::framework::{ActorState, WeakStateClient};
use crate::model::{ActiveOrder, OrderId, ProgressPhase};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ActorState for Storefront {
    type Command = StorefrontCommand;
    type Reply = StorefrontReply;
    type Snapshot = StorefrontSnapshot;
    type Context = StorefrontContext;
    type Error = StorefrontError;

    fn snapshot(&self) -> StorefrontSnapshot {
        StorefrontSnapshot {
            products: self.products.clone(),
            cart: self.cart.clone(),
            user: self.user.clone(),
            active_order: self.active_order.clone(),
            selected_product: self.selected_product.clone(),
        }
    }

    /// Loads the catalog snapshot; the whole catalog is visible initially.
    async fn on_start(
        &mut self,
        ctx: &StorefrontContext,
        _this: &WeakStateClient<Self>,
    ) -> Result<(), StorefrontError> {
        self.catalog = ctx.catalog.list_products();
        self.products = self.catalog.clone();
        info!(products = self.catalog.len(), "Catalog loaded");
        Ok(())
    }

    /// Handles storefront commands.
    ///
    /// # Commands
    /// - `AddToCart` / `RemoveFromCart` / `ClearCart`: cart mutation, see [`crate::model::Cart`]
    /// - `SelectProduct`: replaces the selected product
    /// - `SearchProducts`: replaces the visible product list with the filtered catalog
    /// - `PlaceOrder`: replaces the active order, empties the cart, restarts the ticker
    /// - `CancelOrder`: stops the ticker and forgets the active order
    /// - `AdvanceOrder`: one ticker step, ignored unless it targets the active order
    async fn handle_command(
        &mut self,
        command: StorefrontCommand,
        ctx: &StorefrontContext,
        this: &WeakStateClient<Self>,
    ) -> Result<StorefrontReply, StorefrontError> {
        let reply = match command {
            StorefrontCommand::AddToCart(product) => {
                let product_id = product.id.clone();
                let quantity = self.cart.add(product);
                info!(%product_id, quantity, "Added to cart");
                StorefrontReply::AddToCart(quantity)
            }
            StorefrontCommand::RemoveFromCart(product_id) => {
                let quantity = self.cart.remove(&product_id);
                info!(%product_id, quantity, "Removed from cart");
                StorefrontReply::RemoveFromCart(quantity)
            }
            StorefrontCommand::ClearCart => {
                self.cart.clear();
                info!("Cart cleared");
                StorefrontReply::ClearCart
            }
            StorefrontCommand::SelectProduct(product) => {
                debug!(product_id = ?product.as_ref().map(|p| &p.id), "Product selected");
                self.selected_product = product;
                StorefrontReply::SelectProduct
            }
            StorefrontCommand::SearchProducts(query) => {
                self.products = catalog::search(&self.catalog, query.as_deref());
                debug!(?query, hits = self.products.len(), "Search");
                StorefrontReply::SearchProducts(self.products.clone())
            }
            StorefrontCommand::PlaceOrder => {
                let order = self.place_order(ctx, this);
                StorefrontReply::PlaceOrder(order)
            }
            StorefrontCommand::CancelOrder => {
                self.stop_ticker();
                let cancelled = self.active_order.take();
                if let Some(order) = &cancelled {
                    info!(order_id = %order.order_id, "Order cancelled");
                }
                StorefrontReply::CancelOrder(cancelled)
            }
            StorefrontCommand::AdvanceOrder {
                order_id,
                placement,
                phase,
            } => StorefrontReply::AdvanceOrder(self.advance_order(&order_id, placement, phase)),
        };
        Ok(reply)
    }

    async fn on_stop(&mut self, _ctx: &StorefrontContext) {
        self.stop_ticker();
    }
}

impl Storefront {
    fn place_order(
        &mut self,
        ctx: &StorefrontContext,
        this: &WeakStateClient<Self>,
    ) -> ActiveOrder {
        // At most one ticker: the previous order's stops before the new one starts
        self.stop_ticker();

        self.placements += 1;
        let settings = &ctx.settings;
        let order = ActiveOrder::placed(
            ctx.order_ids.next_id(),
            settings.courier_name.as_str(),
            settings.courier_vehicle.as_str(),
            settings.estimated_minutes,
        )
        .with_placement(self.placements);
        let items = self.cart.len();
        let total = self.cart.total();
        self.cart.clear();
        self.active_order = Some(order.clone());
        self.ticker = Some(spawn_progress_ticker(
            order.order_id.clone(),
            order.placement,
            settings.tick_interval,
            this.clone(),
        ));

        info!(order_id = %order.order_id, placement = order.placement, items, total, "Order placed");
        order
    }

    fn advance_order(
        &mut self,
        order_id: &OrderId,
        placement: u64,
        phase: ProgressPhase,
    ) -> TickOutcome {
        // Ids can repeat across checkouts, so the placement decides
        let Some(order) = self
            .active_order
            .as_mut()
            .filter(|order| order.is_tracked_by(order_id, placement))
        else {
            return TickOutcome::Ignored;
        };

        if order.is_delivered() {
            return TickOutcome::Delivered;
        }

        order.advance(phase);
        if order.is_delivered() {
            info!(%order_id, "Order delivered");
            // The ticker exits on this reply
            self.ticker = None;
            return TickOutcome::Delivered;
        }

        TickOutcome::Advanced {
            progress: order.progress,
            status: order.status,
        }
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            debug!(order_id = %ticker.order_id(), "Stopping progress ticker");
            ticker.stop();
        }
    }
}
