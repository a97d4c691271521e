//! Represents a product in the catalog.
//!
//! Products are created when the catalog is loaded and never mutated afterwards.
//! Identity is the [`ProductId`]; two products with the same id are the same line in a
//! [`Cart`](crate::model::Cart).
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products, e.g. `"2"` or a provider SKU like `"PAN-EXT-500"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Numeric catalogs: `2` becomes `"2"`.
impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Remote image location; empty when the catalog has none.
    pub image_url: String,
    pub category: String,
    pub is_discounted: bool,
    pub discount_amount: f64,
}

impl Product {
    /// Creates a new, non-discounted Product without an image.
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `name` - Display name, also the field searched by the storefront
    /// * `description` - Short description
    /// * `price` - Unit price
    /// * `category` - Shelf the product belongs to
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            image_url: String::new(),
            category: category.into(),
            is_discounted: false,
            discount_amount: 0.0,
        }
    }

    /// Marks the product as discounted by `amount`.
    pub fn with_discount(mut self, amount: f64) -> Self {
        self.is_discounted = true;
        self.discount_amount = amount;
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Case-insensitive substring match on the product name.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matches_ignores_case() {
        let product = Product::new(2, "Panadol Extra", "Headaches", 5.50, "Pain Relief");
        assert!(product.name_matches("panadol"));
        assert!(product.name_matches("EXTRA"));
        assert!(product.name_matches("l E"));
        assert!(!product.name_matches("aspirin"));
    }

    #[test]
    fn test_builders() {
        let product = Product::new(1, "Mask", "", 8.99, "Gear")
            .with_discount(1.5)
            .with_image_url("https://img/mask.png");
        assert!(product.is_discounted);
        assert_eq!(product.discount_amount, 1.5);
        assert_eq!(product.image_url, "https://img/mask.png");
        assert_eq!(product.id.to_string(), "1");
    }

    #[test]
    fn test_sku_ids() {
        let product = Product::new("PAN-EXT-500", "Panadol Extra", "", 5.50, "Pain Relief");
        assert_eq!(product.id, ProductId::from("PAN-EXT-500"));
        assert_eq!(product.id, ProductId("PAN-EXT-500".to_string()));
        assert_ne!(Product::new(2, "A", "", 1.0, "X").id, product.id);
        assert_eq!(ProductId::from(2), ProductId::from("2"));
    }
}
