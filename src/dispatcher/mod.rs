//! # Dispatcher
//!
//! The order lifecycle state machine. A [`Dispatcher`] owns one [`Inventory`]
//! and four [`OrderQueue`]s:
//!
//! | Queue       | Holds                              |
//! |-------------|------------------------------------|
//! | `urgent`    | Awaiting priority orders           |
//! | `standard`  | Awaiting non-priority orders       |
//! | `fulfilled` | Fulfilled orders, oldest first     |
//! | `cancelled` | Cancelled orders, oldest first     |
//!
//! ## Transitions
//!
//! ```text
//! submit ──► Awaiting ──fulfill_next──► Fulfilled
//!               │
//!               └──────cancel─────────► Cancelled
//! ```
//!
//! - **Admission**: stock is reserved *before* the order is appended to a queue,
//!   so every queued order already owns its units.
//! - **Strict priority**: `fulfill_next` never touches the standard queue while
//!   the urgent queue has an order.
//! - **Cancellation** only searches the active queues, which is what makes a
//!   second cancel of the same id a harmless `NotFound`.
//!
//! ## Concurrency
//!
//! Every operation takes `&mut self` and runs to completion. To share one
//! dispatcher between tasks, host it behind
//! [`DispatchActor`](crate::framework::DispatchActor) or
//! [`SharedDispatcher`](crate::framework::SharedDispatcher).

pub mod error;
pub mod outcome;

pub use error::*;
pub use outcome::*;

use crate::inventory::Inventory;
use crate::model::{NewOrder, Order, OrderId, OrderStatus, ProductId, ProductStock};
use crate::queue::OrderQueue;
use std::collections::HashSet;
use tracing::{debug, info, warn};

#[derive(Debug, Default, Clone)]
pub struct Dispatcher {
    inventory: Inventory,
    urgent: OrderQueue,
    standard: OrderQueue,
    fulfilled: OrderQueue,
    cancelled: OrderQueue,
    // Every id ever admitted; orders never leave the four queues.
    admitted: HashSet<OrderId>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dispatcher around an already stocked inventory.
    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            inventory,
            ..Self::default()
        }
    }

    /// Admits an order if its product has enough stock.
    ///
    /// # Returns
    /// * `Ok(SubmitOutcome::Accepted)` - stock reserved, order queued
    /// * `Ok(SubmitOutcome::InsufficientStock)` - nothing changed
    /// * `Err(DispatchError)` - zero quantity or a reused order id
    pub fn submit(&mut self, new_order: NewOrder) -> Result<SubmitOutcome, DispatchError> {
        debug!(?new_order, "submit called");

        if new_order.quantity == 0 {
            warn!(order_id = %new_order.id, "Rejected: zero quantity");
            return Err(DispatchError::InvalidQuantity(new_order.id));
        }
        if self.is_known_order(new_order.id) {
            warn!(order_id = %new_order.id, "Rejected: duplicate order id");
            return Err(DispatchError::DuplicateOrderId(new_order.id));
        }

        let product_id = &new_order.product_id;
        if !self.inventory.is_available(product_id, new_order.quantity) {
            let available = self.inventory.stock_of(product_id).unwrap_or(0);
            info!(
                order_id = %new_order.id,
                %product_id,
                requested = new_order.quantity,
                available,
                "Order rejected: insufficient stock"
            );
            return Ok(SubmitOutcome::InsufficientStock {
                product_id: product_id.clone(),
                requested: new_order.quantity,
                available,
            });
        }

        let reserved = self.inventory.reserve(product_id, new_order.quantity);
        assert!(
            reserved.is_ok(),
            "reservation failed after availability check: {reserved:?}"
        );

        let order = Order::admit(new_order);
        self.admitted.insert(order.id);
        let queue = if order.is_priority {
            &mut self.urgent
        } else {
            &mut self.standard
        };
        queue.append(order.clone());

        info!(
            order_id = %order.id,
            product_id = %order.product_id,
            quantity = order.quantity,
            priority = order.is_priority,
            "Order accepted"
        );
        Ok(SubmitOutcome::Accepted(order))
    }

    /// Fulfills the oldest urgent order, or the oldest standard order when no
    /// urgent order is waiting.
    pub fn fulfill_next(&mut self) -> FulfillOutcome {
        let next = match self.urgent.pop_front() {
            Some(order) => Some(order),
            None => self.standard.pop_front(),
        };

        let Some(mut order) = next else {
            debug!("Nothing to fulfill");
            return FulfillOutcome::Empty;
        };

        order.finish(OrderStatus::Fulfilled);
        self.fulfilled.append(order.clone());
        info!(
            order_id = %order.id,
            priority = order.is_priority,
            waiting = self.urgent.len() + self.standard.len(),
            "Order fulfilled"
        );
        FulfillOutcome::Fulfilled(order)
    }

    /// Cancels an awaiting order and hands its units back to the inventory.
    ///
    /// The units are returned before the order leaves its queue. If that
    /// would overflow the product's stock counter the order stays where it is
    /// and `StockOverflow` is reported.
    pub fn cancel(&mut self, order_id: OrderId) -> CancelOutcome {
        let inventory = &mut self.inventory;
        let mut release = |order: &Order| inventory.release(&order.product_id, order.quantity);

        let removed = match self.urgent.try_remove_by_id(order_id, &mut release) {
            Some(result) => Some(result),
            None => self.standard.try_remove_by_id(order_id, &mut release),
        };

        let mut order = match removed {
            Some(Ok(order)) => order,
            Some(Err(e)) => {
                warn!(%order_id, error = %e, "Cancel refused: order left waiting");
                return CancelOutcome::StockOverflow(order_id);
            }
            None => {
                info!(%order_id, "Cancel ignored: no such awaiting order");
                return CancelOutcome::NotFound(order_id);
            }
        };

        order.finish(OrderStatus::Cancelled);
        self.cancelled.append(order.clone());
        info!(
            %order_id,
            product_id = %order.product_id,
            returned = order.quantity,
            "Order cancelled"
        );
        CancelOutcome::Cancelled(order)
    }

    /// Adds stock for a product, creating it if needed. Returns the new level.
    ///
    /// Zero units and totals past `u32::MAX` are refused with
    /// [`DispatchError::Restock`] carrying the inventory's reason.
    pub fn restock(
        &mut self,
        product_id: impl Into<ProductId>,
        amount: u32,
    ) -> Result<u32, DispatchError> {
        Ok(self.inventory.restock(&product_id.into(), amount)?)
    }

    pub fn inventory(&self) -> Vec<ProductStock> {
        self.inventory.snapshot()
    }

    pub fn stock_of(&self, product_id: &ProductId) -> Option<u32> {
        self.inventory.stock_of(product_id)
    }

    pub fn product_exists(&self, product_id: &ProductId) -> bool {
        self.inventory.exists(product_id)
    }

    /// Urgent then standard queue. Display order only; urgent is always served
    /// first regardless.
    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            urgent: self.urgent.to_vec(),
            standard: self.standard.to_vec(),
        }
    }

    pub fn history(&self) -> OrderHistory {
        OrderHistory {
            fulfilled: self.fulfilled.to_vec(),
            cancelled: self.cancelled.to_vec(),
        }
    }

    /// True while the order is waiting in the urgent or standard queue.
    pub fn is_active(&self, order_id: OrderId) -> bool {
        self.urgent.contains(order_id) || self.standard.contains(order_id)
    }

    /// True if the id belongs to any order ever admitted, active or historical.
    pub fn is_known_order(&self, order_id: OrderId) -> bool {
        self.admitted.contains(&order_id)
    }

    /// Looks an order up in all four queues.
    pub fn find_order(&self, order_id: OrderId) -> Option<&Order> {
        [&self.urgent, &self.standard, &self.fulfilled, &self.cancelled]
            .into_iter()
            .find_map(|queue| queue.get(order_id))
    }

    pub fn waiting(&self) -> usize {
        self.urgent.len() + self.standard.len()
    }
}
