/// Stock record for a single product.
///
/// # Inventory
/// Records are owned exclusively by [`Inventory`](crate::inventory::Inventory);
/// callers only ever see clones returned from queries.
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductStock {
    pub product_id: ProductId,
    pub amount: u32,
}

impl ProductStock {
    /// Creates a new stock record.
    ///
    /// # Arguments
    /// * `product_id` - Unique product key, fixed for the record's lifetime
    /// * `amount` - Units on hand
    pub fn new(product_id: impl Into<ProductId>, amount: u32) -> Self {
        Self {
            product_id: product_id.into(),
            amount,
        }
    }

    pub fn is_available(&self, needed: u32) -> bool {
        self.amount >= needed
    }
}
