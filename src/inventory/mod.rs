//! # Inventory
//!
//! Per-product stock counters. The inventory is the only component allowed to
//! mutate a [`ProductStock`]; the dispatcher talks to it through
//! [`is_available`](Inventory::is_available), [`reserve`](Inventory::reserve),
//! [`release`](Inventory::release) and [`restock`](Inventory::restock).
//!
//! Records are kept in first-seen order so inventory listings are stable.

pub mod error;

pub use error::*;

use crate::model::{ProductId, ProductStock};
use std::collections::HashMap;
use tracing::{debug, info, warn};

#[derive(Debug, Default, Clone)]
pub struct Inventory {
    records: Vec<ProductStock>,
    index: HashMap<ProductId, usize>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true iff the product exists and has at least `amount` units.
    ///
    /// An unknown product is simply unavailable.
    pub fn is_available(&self, product_id: &ProductId, amount: u32) -> bool {
        self.record(product_id)
            .is_some_and(|stock| stock.is_available(amount))
    }

    pub fn exists(&self, product_id: &ProductId) -> bool {
        self.index.contains_key(product_id)
    }

    pub fn stock_of(&self, product_id: &ProductId) -> Option<u32> {
        self.record(product_id).map(|stock| stock.amount)
    }

    /// Decrements stock by `amount`.
    ///
    /// Callers check [`is_available`](Self::is_available) first. If the stock
    /// is short anyway nothing is changed and `InsufficientStock` is returned,
    /// so the counter can never go negative.
    pub fn reserve(&mut self, product_id: &ProductId, amount: u32) -> Result<(), InventoryError> {
        let available = self.stock_of(product_id).unwrap_or(0);
        match self.record_mut(product_id) {
            Some(stock) if stock.is_available(amount) => {
                stock.amount -= amount;
                debug!(%product_id, amount, remaining = stock.amount, "Reserved");
                Ok(())
            }
            _ => {
                warn!(%product_id, amount, available, "Reserve refused");
                Err(InventoryError::InsufficientStock {
                    product_id: product_id.clone(),
                    requested: amount,
                    available,
                })
            }
        }
    }

    /// Returns previously reserved units and reports the new level.
    ///
    /// Creates the record if the product is unknown, so releasing stock for a
    /// product that has since disappeared still succeeds. Fails with
    /// `StockOverflow` and changes nothing if the counter would wrap.
    pub fn release(&mut self, product_id: &ProductId, amount: u32) -> Result<u32, InventoryError> {
        let total = self.checked_total(product_id, amount)?;
        let stock = self.entry(product_id);
        stock.amount = total;
        debug!(%product_id, amount, total, "Released");
        Ok(total)
    }

    /// Adds `amount` units, creating the product if it is new.
    pub fn restock(&mut self, product_id: &ProductId, amount: u32) -> Result<u32, InventoryError> {
        if amount == 0 {
            warn!(%product_id, "Restock of zero units refused");
            return Err(InventoryError::InvalidAmount(product_id.clone()));
        }
        let total = self.checked_total(product_id, amount)?;
        let stock = self.entry(product_id);
        stock.amount = total;
        info!(%product_id, amount, total, "Restocked");
        Ok(total)
    }

    /// All stock records in first-seen order.
    pub fn snapshot(&self) -> Vec<ProductStock> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn checked_total(&self, product_id: &ProductId, amount: u32) -> Result<u32, InventoryError> {
        let current = self.stock_of(product_id).unwrap_or(0);
        current.checked_add(amount).ok_or_else(|| {
            warn!(%product_id, current, amount, "Stock counter would overflow");
            InventoryError::StockOverflow {
                product_id: product_id.clone(),
                current,
                added: amount,
            }
        })
    }

    fn record(&self, product_id: &ProductId) -> Option<&ProductStock> {
        self.index.get(product_id).map(|&slot| &self.records[slot])
    }

    fn record_mut(&mut self, product_id: &ProductId) -> Option<&mut ProductStock> {
        match self.index.get(product_id) {
            Some(&slot) => self.records.get_mut(slot),
            None => None,
        }
    }

    fn entry(&mut self, product_id: &ProductId) -> &mut ProductStock {
        let slot = match self.index.get(product_id) {
            Some(&slot) => slot,
            None => {
                self.records.push(ProductStock::new(product_id.clone(), 0));
                let slot = self.records.len() - 1;
                self.index.insert(product_id.clone(), slot);
                slot
            }
        };
        &mut self.records[slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(id: &str) -> ProductId {
        ProductId::from(id)
    }

    fn stocked(id: &str, amount: u32) -> Inventory {
        let mut inventory = Inventory::new();
        inventory.restock(&pid(id), amount).unwrap();
        inventory
    }

    #[test]
    fn test_unknown_product_is_unavailable() {
        let inventory = Inventory::new();
        assert!(!inventory.is_available(&pid("ghost"), 1));
        assert!(!inventory.exists(&pid("ghost")));
        assert_eq!(inventory.stock_of(&pid("ghost")), None);
    }

    #[test]
    fn test_availability_is_inclusive() {
        let inventory = stocked("A", 5);
        assert!(inventory.is_available(&pid("A"), 5));
        assert!(!inventory.is_available(&pid("A"), 6));
    }

    #[test]
    fn test_reserve_decrements_stock() {
        let mut inventory = stocked("A", 5);
        inventory.reserve(&pid("A"), 3).unwrap();
        assert_eq!(inventory.stock_of(&pid("A")), Some(2));
    }

    #[test]
    fn test_reserve_when_short_is_a_no_op() {
        let mut inventory = stocked("A", 2);
        let result = inventory.reserve(&pid("A"), 3);
        assert_eq!(
            result,
            Err(InventoryError::InsufficientStock {
                product_id: pid("A"),
                requested: 3,
                available: 2,
            })
        );
        assert_eq!(inventory.stock_of(&pid("A")), Some(2));
    }

    #[test]
    fn test_reserve_unknown_product_does_not_create_it() {
        let mut inventory = Inventory::new();
        assert!(inventory.reserve(&pid("ghost"), 1).is_err());
        assert!(!inventory.exists(&pid("ghost")));
    }

    #[test]
    fn test_release_creates_missing_record() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.release(&pid("B"), 4), Ok(4));
        assert_eq!(inventory.stock_of(&pid("B")), Some(4));
    }

    #[test]
    fn test_restock_rejects_zero() {
        let mut inventory = stocked("A", 1);
        assert_eq!(
            inventory.restock(&pid("A"), 0),
            Err(InventoryError::InvalidAmount(pid("A")))
        );
        assert_eq!(inventory.stock_of(&pid("A")), Some(1));
    }

    #[test]
    fn test_restock_accumulates_and_reports_total() {
        let mut inventory = stocked("A", 1);
        assert_eq!(inventory.restock(&pid("A"), 9), Ok(10));
    }

    #[test]
    fn test_snapshot_keeps_first_seen_order() {
        let mut inventory = Inventory::new();
        inventory.restock(&pid("zeta"), 1).unwrap();
        inventory.restock(&pid("alpha"), 2).unwrap();
        inventory.release(&pid("mid"), 3).unwrap();
        inventory.restock(&pid("zeta"), 1).unwrap();

        let ids: Vec<_> = inventory
            .snapshot()
            .into_iter()
            .map(|stock| (stock.product_id.0, stock.amount))
            .collect();
        assert_eq!(
            ids,
            vec![
                ("zeta".to_string(), 2),
                ("alpha".to_string(), 2),
                ("mid".to_string(), 3)
            ]
        );
        assert_eq!(inventory.len(), 3);
    }

    #[test]
    fn test_restock_past_u32_max_is_refused() {
        let mut inventory = stocked("A", u32::MAX);
        assert_eq!(
            inventory.restock(&pid("A"), 1),
            Err(InventoryError::StockOverflow {
                product_id: pid("A"),
                current: u32::MAX,
                added: 1,
            })
        );
        assert_eq!(inventory.stock_of(&pid("A")), Some(u32::MAX));
    }

    #[test]
    fn test_release_past_u32_max_is_refused() {
        let mut inventory = stocked("A", u32::MAX - 1);
        assert!(matches!(
            inventory.release(&pid("A"), 2),
            Err(InventoryError::StockOverflow { current, added: 2, .. }) if current == u32::MAX - 1
        ));
        assert_eq!(inventory.stock_of(&pid("A")), Some(u32::MAX - 1));
        assert_eq!(inventory.release(&pid("A"), 1), Ok(u32::MAX));
    }
}
