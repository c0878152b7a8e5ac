//! Result values for dispatcher operations.
//!
//! Each operation has its own outcome enum so callers branch on ordinary
//! results instead of catching errors. Variants match 1:1 with what the
//! operation can legitimately report.
//!
//! Outcomes are render-only views: they serialize but never deserialize, so an
//! [`Order`] can only come into being through admission.

use crate::model::{Order, OrderId, ProductId};
use serde::Serialize;

/// Result of [`Dispatcher::submit`](crate::dispatcher::Dispatcher::submit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SubmitOutcome {
    /// Stock was reserved and the order is waiting in its queue.
    Accepted(Order),
    /// Not enough stock; nothing was created or reserved.
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// Result of [`Dispatcher::fulfill_next`](crate::dispatcher::Dispatcher::fulfill_next).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FulfillOutcome {
    Fulfilled(Order),
    /// Both active queues were empty.
    Empty,
}

/// Result of [`Dispatcher::cancel`](crate::dispatcher::Dispatcher::cancel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CancelOutcome {
    Cancelled(Order),
    /// The id is not waiting in either active queue. Already fulfilled or
    /// cancelled orders land here too.
    NotFound(OrderId),
    /// Returning the order's units would overflow its product's stock
    /// counter. The order is still waiting and nothing changed.
    StockOverflow(OrderId),
}

/// Active queues, urgent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueueSnapshot {
    pub urgent: Vec<Order>,
    pub standard: Vec<Order>,
}

/// Terminal orders in the order they reached their final state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderHistory {
    pub fulfilled: Vec<Order>,
    pub cancelled: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewOrder;

    fn assert_serialize<T: Serialize>(_: &T) {}

    #[test]
    fn test_views_serialize() {
        let order = Order::admit(NewOrder::new(1, "A", 1, "Alice", false));
        assert_serialize(&order);
        assert_serialize(&SubmitOutcome::Accepted(order.clone()));
        assert_serialize(&FulfillOutcome::Fulfilled(order.clone()));
        assert_serialize(&CancelOutcome::StockOverflow(order.id));
        assert_serialize(&QueueSnapshot {
            urgent: vec![order],
            standard: Vec::new(),
        });
        assert_serialize(&OrderHistory::default());
    }
}
