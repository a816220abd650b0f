//! Inventory statistics shown above the admin listing

use crate::{prices::Price, products::Product};

/// Inventory statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryStats {
    /// Number of products
    pub total: usize,

    /// Active products
    pub active: usize,

    /// Inactive products
    pub inactive: usize,

    /// Sum of price times stock
    pub stock_value: Price,
}

impl InventoryStats {
    /// Compute statistics over a product list.
    pub fn from_products(products: &[Product]) -> Self {
        let active = products.iter().filter(|product| product.active).count();

        InventoryStats {
            total: products.len(),
            active,
            inactive: products.len() - active,
            stock_value: products
                .iter()
                .map(|product| product.price.times(u64::from(product.stock)))
                .sum(),
        }
    }
}
