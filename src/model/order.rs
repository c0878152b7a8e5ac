/// Represents a customer order.
///
/// # Lifecycle
/// An `Order` only exists once admission has reserved stock for it, so it always
/// starts out [`OrderStatus::Awaiting`]. The [`Dispatcher`](crate::dispatcher::Dispatcher)
/// moves it exactly once into [`OrderStatus::Fulfilled`] or [`OrderStatus::Cancelled`].
///
/// See [`NewOrder`] for the submission payload.
use crate::model::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Awaiting,
    Fulfilled,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, OrderStatus::Awaiting)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Awaiting => "Awaiting",
            OrderStatus::Fulfilled => "Fulfilled",
            OrderStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// Serialize-only: status is private and set by admission and `finish`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub customer_name: String,
    pub is_priority: bool,
    status: OrderStatus,
}

/// Payload for submitting a new order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub customer_name: String,
    pub is_priority: bool,
}

impl NewOrder {
    pub fn new(
        id: impl Into<OrderId>,
        product_id: impl Into<ProductId>,
        quantity: u32,
        customer_name: impl Into<String>,
        is_priority: bool,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            quantity,
            customer_name: customer_name.into(),
            is_priority,
        }
    }
}

impl Order {
    /// Builds an admitted order from its submission payload.
    ///
    /// Only the dispatcher calls this, after the stock for it has been reserved.
    pub(crate) fn admit(new_order: NewOrder) -> Self {
        Self {
            id: new_order.id,
            product_id: new_order.product_id,
            quantity: new_order.quantity,
            customer_name: new_order.customer_name,
            is_priority: new_order.is_priority,
            status: OrderStatus::Awaiting,
        }
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Moves an awaiting order into a terminal state.
    ///
    /// # Panics
    /// If the order already reached a terminal state. Orders in the history
    /// queues are never handed back to the dispatcher's active paths, so this
    /// can only fire on an internal bug.
    pub(crate) fn finish(&mut self, status: OrderStatus) {
        assert!(
            !self.status.is_terminal() && status.is_terminal(),
            "illegal status transition {} -> {} for {}",
            self.status,
            status,
            self.id
        );
        self.status = status;
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {} x{} for {}{}",
            self.id,
            self.status,
            self.product_id,
            self.quantity,
            self.customer_name,
            if self.is_priority { " (priority)" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Order {
        Order::admit(NewOrder::new(7, "widget", 3, "Alice", true))
    }

    #[test]
    fn test_admitted_order_is_awaiting() {
        let order = sample();
        assert_eq!(order.status(), OrderStatus::Awaiting);
        assert_eq!(order.id, OrderId(7));
        assert_eq!(order.product_id, ProductId::from("widget"));
    }

    #[test]
    fn test_finish_moves_to_terminal_state() {
        let mut order = sample();
        order.finish(OrderStatus::Fulfilled);
        assert_eq!(order.status(), OrderStatus::Fulfilled);
        assert!(order.status().is_terminal());
    }

    #[test]
    #[should_panic(expected = "illegal status transition")]
    fn test_terminal_state_is_final() {
        let mut order = sample();
        order.finish(OrderStatus::Cancelled);
        order.finish(OrderStatus::Fulfilled);
    }

    #[test]
    #[should_panic(expected = "illegal status transition")]
    fn test_cannot_finish_back_into_awaiting() {
        let mut order = sample();
        order.finish(OrderStatus::Awaiting);
    }

    #[test]
    fn test_display_marks_priority() {
        let rendered = sample().to_string();
        assert!(rendered.starts_with("order_7 [Awaiting] widget x3 for Alice"));
        assert!(rendered.ends_with("(priority)"));
    }
}
