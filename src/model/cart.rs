use crate::model::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// One line of the cart: a product and how many of it were picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Price of the whole line.
    pub fn total_price(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// The shopping cart.
///
/// Lines keep insertion order. There is at most one line per product id, and a line
/// exists only while its quantity is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`. Returns the resulting quantity of that line.
    pub fn add(&mut self, product: Product) -> u32 {
        match self.line_mut(&product.id) {
            Some(item) => {
                item.quantity += 1;
                item.quantity
            }
            None => {
                self.items.push(CartItem {
                    product,
                    quantity: 1,
                });
                1
            }
        }
    }

    /// Removes one unit of the product. The line disappears when it reaches zero.
    ///
    /// Returns the remaining quantity; 0 when the line was removed or never existed.
    pub fn remove(&mut self, id: &ProductId) -> u32 {
        let Some(index) = self.items.iter().position(|item| &item.product.id == id) else {
            return 0;
        };
        let item = &mut self.items[index];
        if item.quantity > 1 {
            item.quantity -= 1;
            item.quantity
        } else {
            self.items.remove(index);
            0
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price × quantity over all lines.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::total_price).sum()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn quantity_of(&self, id: &ProductId) -> u32 {
        self.items
            .iter()
            .find(|item| &item.product.id == id)
            .map_or(0, |item| item.quantity)
    }

    /// Total number of units across all lines.
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| &item.product.id == id)
    }
}
