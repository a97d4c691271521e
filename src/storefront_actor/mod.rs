//! # Storefront Actor
//!
//! This module implements the cart & order lifecycle manager behind the storefront UI.
//!
//! ## Overview
//!
//! A single [`Storefront`] value owns everything the screens show: the catalog snapshot,
//! the visible (searched) product list, the cart, the selected product, the user profile
//! and the active order. It runs inside a [`StateActor`], so commands are applied one at a
//! time and every change is broadcast as a [`StorefrontSnapshot`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorState`](crate::framework::ActorState) implementation for [`Storefront`]
//! - [`commands`] - [`StorefrontCommand`] and [`StorefrontReply`]
//! - [`ticker`] - the progress ticker that advances the active order
//! - [`order_ids`] - [`OrderIdGenerator`] and its implementations
//! - [`error`] - [`StorefrontError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront::catalog::PharmacyCatalog;
//! use storefront::model::UserProfile;
//! use storefront::storefront_actor::{self, OrderSettings, SequentialOrderIds, StorefrontContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = storefront_actor::new(UserProfile::new("Alice", "alice@example.com"), 32);
//!     let context = StorefrontContext {
//!         catalog: Arc::new(PharmacyCatalog),
//!         order_ids: Arc::new(SequentialOrderIds::new("#AZ-", 1000)),
//!         settings: OrderSettings::default(),
//!     };
//!     tokio::spawn(actor.run(context));
//!
//!     let hits = client.search_products(Some("panadol")).await?;
//!     client.add_to_cart(hits[0].clone()).await?;
//!     assert_eq!(client.cart_total(), 5.50);
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod entity;
pub mod error;
pub mod order_ids;
pub mod ticker;

pub use commands::*;
pub use error::*;
pub use order_ids::*;
pub use ticker::*;

use crate::catalog::CatalogSource;
use crate::clients::StorefrontClient;
use crate::framework::StateActor;
use crate::model::{ActiveOrder, Cart, Product, UserProfile};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// The state owned by the storefront actor.
pub struct Storefront {
    /// Everything the catalog source listed at start-up. Never filtered.
    catalog: Vec<Product>,
    /// What the product list currently shows.
    products: Vec<Product>,
    cart: Cart,
    user: UserProfile,
    selected_product: Option<Product>,
    active_order: Option<ActiveOrder>,
    ticker: Option<TickerHandle>,
    /// Checkouts so far; tags each order and its ticks.
    placements: u64,
}

impl Storefront {
    pub fn new(user: UserProfile) -> Self {
        Self {
            catalog: Vec::new(),
            products: Vec::new(),
            cart: Cart::new(),
            user,
            selected_product: None,
            active_order: None,
            ticker: None,
            placements: 0,
        }
    }
}

/// Read-only view of the storefront, published after every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorefrontSnapshot {
    pub products: Vec<Product>,
    pub cart: Cart,
    pub user: UserProfile,
    pub active_order: Option<ActiveOrder>,
    pub selected_product: Option<Product>,
}

impl StorefrontSnapshot {
    /// Sum of price × quantity over the cart.
    pub fn cart_total(&self) -> f64 {
        self.cart.total()
    }
}

/// Fixed values stamped onto every placed order, and the ticker pace.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSettings {
    pub courier_name: String,
    pub courier_vehicle: String,
    pub estimated_minutes: u32,
    pub tick_interval: Duration,
}

impl Default for OrderSettings {
    fn default() -> Self {
        Self {
            courier_name: "Finding Courier...".to_string(),
            courier_vehicle: "Motorcycle".to_string(),
            estimated_minutes: 25,
            tick_interval: Duration::from_millis(900),
        }
    }
}

/// Dependencies injected into the storefront at `run()` time.
#[derive(Clone)]
pub struct StorefrontContext {
    pub catalog: Arc<dyn CatalogSource>,
    pub order_ids: Arc<dyn OrderIdGenerator>,
    pub settings: OrderSettings,
}

/// Creates a new Storefront actor and its client.
pub fn new(user: UserProfile, buffer_size: usize) -> (StateActor<Storefront>, StorefrontClient) {
    let (actor, generic_client) = StateActor::new(Storefront::new(user), buffer_size);
    (actor, StorefrontClient::new(generic_client))
}
