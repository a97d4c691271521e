//! Commands accepted by the Storefront actor.
//!
//! Every [`StorefrontCommand`] is answered by the [`StorefrontReply`] variant of the same
//! name. See [`impl ActorState for Storefront`](crate::storefront_actor::Storefront#impl-ActorState-for-Storefront)
//! for the implementation.

use crate::model::{ActiveOrder, OrderId, OrderStatus, Product, ProductId, ProgressPhase};

/// Operations the display layer (and the progress ticker) can request.
#[derive(Debug, Clone)]
pub enum StorefrontCommand {
    /// Adds one unit of the product to the cart.
    AddToCart(Product),
    /// Removes one unit; the line disappears at zero. Unknown ids are ignored.
    RemoveFromCart(ProductId),
    ClearCart,
    /// Sets (or clears) the product being viewed.
    SelectProduct(Option<Product>),
    /// Filters the catalog by name. `None` or a blank query shows everything.
    SearchProducts(Option<String>),
    /// Checks out the cart and starts tracking a new order.
    PlaceOrder,
    /// Stops tracking the active order.
    CancelOrder,
    /// One tick of the progress ticker started for `order_id` at checkout `placement`.
    AdvanceOrder {
        order_id: OrderId,
        placement: u64,
        phase: ProgressPhase,
    },
}

/// Results from StorefrontCommands - variants match 1:1 with StorefrontCommand
#[derive(Debug, Clone)]
pub enum StorefrontReply {
    /// Quantity of the line after the add
    AddToCart(u32),
    /// Quantity left on the line; 0 when removed or absent
    RemoveFromCart(u32),
    ClearCart,
    SelectProduct,
    /// The visible product list after filtering
    SearchProducts(Vec<Product>),
    /// The newly placed order
    PlaceOrder(ActiveOrder),
    /// The order that stopped being tracked, if any
    CancelOrder(Option<ActiveOrder>),
    AdvanceOrder(TickOutcome),
}

/// What a single ticker step did to the tracked order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The order moved (or held) and is not yet delivered.
    Advanced { progress: f64, status: OrderStatus },
    /// The order is delivered; the ticker should stop.
    Delivered,
    /// The order this tick belongs to is no longer tracked; nothing changed.
    Ignored,
}
