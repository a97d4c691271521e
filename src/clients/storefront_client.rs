//! # Storefront Client
//!
//! Provides a high‑level API for the display layer to drive the `Storefront` actor.
//! It wraps a `StateClient<Storefront>` and exposes one method per storefront command.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, StateClient};
use crate::model::{self, ActiveOrder, Product, ProductId};
use crate::storefront_actor::{Storefront, StorefrontCommand, StorefrontError, StorefrontReply};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Storefront actor.
#[derive(Clone)]
pub struct StorefrontClient {
    inner: StateClient<Storefront>,
}

impl StorefrontClient {
    pub fn new(inner: StateClient<Storefront>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Storefront> for StorefrontClient {
    type Error = StorefrontError;

    fn inner(&self) -> &StateClient<Storefront> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StorefrontError::ActorCommunicationError(e.to_string())
    }
}

impl StorefrontClient {
    /// Add one unit of `product` to the cart.
    ///
    /// Returns the quantity of that product now in the cart.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_to_cart(&self, product: Product) -> Result<u32, StorefrontError> {
        debug!("Sending request");
        match self.inner.send(StorefrontCommand::AddToCart(product)).await {
            Ok(StorefrontReply::AddToCart(quantity)) => Ok(quantity),
            Ok(_) => unreachable!("AddToCart command must return AddToCart result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Remove one unit of the product from the cart.
    ///
    /// Returns the quantity left; 0 when the line was removed or was never there.
    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, product_id: ProductId) -> Result<u32, StorefrontError> {
        debug!("Sending request");
        match self
            .inner
            .send(StorefrontCommand::RemoveFromCart(product_id))
            .await
        {
            Ok(StorefrontReply::RemoveFromCart(quantity)) => Ok(quantity),
            Ok(_) => unreachable!("RemoveFromCart command must return RemoveFromCart result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<(), StorefrontError> {
        debug!("Sending request");
        match self.inner.send(StorefrontCommand::ClearCart).await {
            Ok(StorefrontReply::ClearCart) => Ok(()),
            Ok(_) => unreachable!("ClearCart command must return ClearCart result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Set the product being viewed, or clear it with `None`.
    #[instrument(skip(self, product))]
    pub async fn select_product(&self, product: Option<Product>) -> Result<(), StorefrontError> {
        debug!("Sending request");
        match self
            .inner
            .send(StorefrontCommand::SelectProduct(product))
            .await
        {
            Ok(StorefrontReply::SelectProduct) => Ok(()),
            Ok(_) => unreachable!("SelectProduct command must return SelectProduct result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Filter the product list by name, ignoring case.
    ///
    /// `None` or a blank query restores the full catalog. Returns the visible list.
    #[instrument(skip(self))]
    pub async fn search_products(
        &self,
        query: Option<&str>,
    ) -> Result<Vec<Product>, StorefrontError> {
        debug!("Sending request");
        let command = StorefrontCommand::SearchProducts(query.map(str::to_string));
        match self.inner.send(command).await {
            Ok(StorefrontReply::SearchProducts(products)) => Ok(products),
            Ok(_) => unreachable!("SearchProducts command must return SearchProducts result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Check out: start tracking a new order and empty the cart.
    ///
    /// Any order already being tracked is replaced and its progress ticker stopped.
    #[instrument(skip(self))]
    pub async fn place_order(&self) -> Result<ActiveOrder, StorefrontError> {
        debug!("Sending request");
        match self.inner.send(StorefrontCommand::PlaceOrder).await {
            Ok(StorefrontReply::PlaceOrder(order)) => Ok(order),
            Ok(_) => unreachable!("PlaceOrder command must return PlaceOrder result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Stop tracking the active order. Returns it, if there was one.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self) -> Result<Option<ActiveOrder>, StorefrontError> {
        debug!("Sending request");
        match self.inner.send(StorefrontCommand::CancelOrder).await {
            Ok(StorefrontReply::CancelOrder(order)) => Ok(order),
            Ok(_) => unreachable!("CancelOrder command must return CancelOrder result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Cart total, recomputed from the last published cart.
    pub fn cart_total(&self) -> f64 {
        self.inner.current().cart_total()
    }

    /// See [`model::format_money`].
    pub fn format_money(amount: f64) -> String {
        model::format_money(amount)
    }
}
