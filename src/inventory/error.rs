//! Error types for the Inventory.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during stock mutations.
///
/// A failed mutation leaves the stock record unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InventoryError {
    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// A restock of zero units was requested.
    #[error("Invalid restock amount for {0}: must be greater than zero")]
    InvalidAmount(ProductId),

    /// Adding the units would push the stock counter past `u32::MAX`.
    #[error("Stock overflow for {product_id}: {current} on hand, {added} more requested")]
    StockOverflow {
        product_id: ProductId,
        current: u32,
        added: u32,
    },
}
