//! # Catalog Source
//!
//! The storefront reads its products from a [`CatalogSource`] once, when the actor starts.
//! In this crate the source is the fixed [`PharmacyCatalog`]; a real deployment would put
//! an external data provider behind the same trait.

use crate::model::Product;

/// Contract for anything that can list purchasable products.
pub trait CatalogSource: Send + Sync {
    fn list_products(&self) -> Vec<Product>;
}

impl CatalogSource for Vec<Product> {
    fn list_products(&self) -> Vec<Product> {
        self.clone()
    }
}

/// The five-item pharmacy catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct PharmacyCatalog;

impl CatalogSource for PharmacyCatalog {
    fn list_products(&self) -> Vec<Product> {
        vec![
            Product::new(
                1,
                "CardioFlex 50mg",
                "Hypertension treatment. Prescription only.",
                24.99,
                "Heart Health",
            ),
            Product::new(
                2,
                "Panadol Extra",
                "Effective for headaches and fever.",
                5.50,
                "Pain Relief",
            ),
            Product::new(
                3,
                "Vitamin C 1000mg",
                "Immunity booster effervescent tablets.",
                12.00,
                "Vitamins",
            ),
            Product::new(
                4,
                "N95 Surgical Masks",
                "Pack of 10 protective masks.",
                8.99,
                "Medical Gear",
            ),
            Product::new(
                5,
                "Omeprazole 20mg",
                "Relief for heartburn and acid reflux.",
                15.40,
                "Digestion",
            ),
        ]
    }
}

/// Filters `catalog` by name, ignoring case.
///
/// A missing or blank query matches everything.
pub fn search(catalog: &[Product], query: Option<&str>) -> Vec<Product> {
    match query {
        Some(query) if !query.trim().is_empty() => catalog
            .iter()
            .filter(|product| product.name_matches(query))
            .cloned()
            .collect(),
        _ => catalog.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    #[test]
    fn test_pharmacy_catalog_has_five_unique_products() {
        let products = PharmacyCatalog.list_products();
        assert_eq!(products.len(), 5);
        let mut ids: Vec<u32> = products.iter().map(|p| p.id.0).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_blank_queries_return_everything() {
        let catalog = PharmacyCatalog.list_products();
        assert_eq!(search(&catalog, None), catalog);
        assert_eq!(search(&catalog, Some("")), catalog);
        assert_eq!(search(&catalog, Some("   ")), catalog);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = PharmacyCatalog.list_products();

        let hits = search(&catalog, Some("panadol"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, ProductId::from("2"));
        assert_eq!(hits[0].name, "Panadol Extra");

        assert_eq!(search(&catalog, Some("MG")).len(), 3);
        assert!(search(&catalog, Some("insulin")).is_empty());
    }

    #[test]
    fn test_search_does_not_touch_catalog() {
        let catalog = PharmacyCatalog.list_products();
        let before = catalog.clone();
        let _ = search(&catalog, Some("vitamin"));
        assert_eq!(catalog, before);
    }
}
