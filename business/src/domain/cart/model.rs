use serde::{Deserialize, Serialize};

use crate::domain::product::model::Product;

/// One cart row: a product snapshot and how many of it are wanted.
/// The catalog aggregate guarantees at most one line per product id and a
/// quantity of at least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Totals across the whole cart, as shown in a checkout summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CartSummary {
    pub total_items: u32,
    pub total_price: f64,
}

impl CartSummary {
    pub fn of(cart: &[CartLine]) -> Self {
        Self {
            total_items: cart.iter().map(|line| line.quantity).sum(),
            total_price: cart.iter().map(CartLine::line_total).sum(),
        }
    }
}
