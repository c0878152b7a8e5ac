//! Error types for the Dispatcher.

use crate::inventory::InventoryError;
use crate::model::OrderId;
use thiserror::Error;

/// Caller-contract violations.
///
/// Running out of stock, an empty queue or an unknown order id are *not*
/// errors; those come back as outcome values. These variants mean the request
/// itself was malformed and was refused without touching any state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// An order was submitted for zero units.
    #[error("Invalid quantity for {0}: must be greater than zero")]
    InvalidQuantity(OrderId),

    /// The order id was already used by an active or historical order.
    #[error("Order id already in use: {0}")]
    DuplicateOrderId(OrderId),

    /// A restock was refused by the inventory: zero units, or more units than
    /// the stock counter can hold.
    #[error(transparent)]
    Restock(#[from] InventoryError),
}
