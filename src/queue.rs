//! # Order Queue
//!
//! FIFO container of owned [`Order`]s. Insertion order is service order. Orders
//! are moved in and out, never copied, so an order lives in exactly one queue
//! at a time.

use crate::model::{Order, OrderId};
use std::collections::VecDeque;

#[derive(Debug, Default, Clone)]
pub struct OrderQueue {
    orders: VecDeque<Order>,
}

impl OrderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an order at the tail.
    pub fn append(&mut self, order: Order) {
        self.orders.push_back(order);
    }

    pub fn contains(&self, id: OrderId) -> bool {
        self.orders.iter().any(|order| order.id == id)
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Removes the first order with `id`, wherever it sits in the queue.
    ///
    /// The remaining orders keep their relative order.
    pub fn remove_by_id(&mut self, id: OrderId) -> Option<Order> {
        let position = self.orders.iter().position(|order| order.id == id)?;
        self.orders.remove(position)
    }

    /// Removes the order with `id` only if `check` accepts it.
    ///
    /// `None` if no such order is queued. On `Some(Err(_))` the order stays in
    /// place.
    pub fn try_remove_by_id<T, E>(
        &mut self,
        id: OrderId,
        check: impl FnOnce(&Order) -> Result<T, E>,
    ) -> Option<Result<Order, E>> {
        let position = self.orders.iter().position(|order| order.id == id)?;
        if let Err(e) = check(&self.orders[position]) {
            return Some(Err(e));
        }
        self.orders.remove(position).map(Ok)
    }

    /// Pops the head of the queue. `None` on an empty queue is routine.
    pub fn pop_front(&mut self) -> Option<Order> {
        self.orders.pop_front()
    }

    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn to_vec(&self) -> Vec<Order> {
        self.orders.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewOrder;

    fn order(id: u32) -> Order {
        Order::admit(NewOrder::new(id, "A", 1, format!("customer {id}"), false))
    }

    fn queue_of(ids: &[u32]) -> OrderQueue {
        let mut queue = OrderQueue::new();
        for &id in ids {
            queue.append(order(id));
        }
        queue
    }

    fn ids(queue: &OrderQueue) -> Vec<u32> {
        queue.iter().map(|order| order.id.0).collect()
    }

    #[test]
    fn test_pop_front_is_fifo() {
        let mut queue = queue_of(&[3, 1, 2]);
        assert_eq!(queue.pop_front().map(|o| o.id), Some(OrderId(3)));
        assert_eq!(queue.pop_front().map(|o| o.id), Some(OrderId(1)));
        assert_eq!(queue.pop_front().map(|o| o.id), Some(OrderId(2)));
        assert!(queue.pop_front().is_none());
    }

    #[test]
    fn test_pop_front_on_empty_queue() {
        let mut queue = OrderQueue::new();
        assert!(queue.pop_front().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_remove_by_id_from_the_middle() {
        let mut queue = queue_of(&[1, 2, 3, 4]);
        let removed = queue.remove_by_id(OrderId(3)).expect("order 3 queued");
        assert_eq!(removed.id, OrderId(3));
        assert_eq!(ids(&queue), vec![1, 2, 4]);
    }

    #[test]
    fn test_remove_by_id_head_and_tail() {
        let mut queue = queue_of(&[1, 2, 3]);
        assert!(queue.remove_by_id(OrderId(1)).is_some());
        assert!(queue.remove_by_id(OrderId(3)).is_some());
        assert_eq!(ids(&queue), vec![2]);
    }

    #[test]
    fn test_remove_missing_id_leaves_queue_untouched() {
        let mut queue = queue_of(&[1, 2]);
        assert!(queue.remove_by_id(OrderId(9)).is_none());
        assert_eq!(ids(&queue), vec![1, 2]);
    }

    #[test]
    fn test_contains_and_get() {
        let queue = queue_of(&[5, 6]);
        assert!(queue.contains(OrderId(6)));
        assert!(!queue.contains(OrderId(7)));
        assert_eq!(queue.get(OrderId(5)).map(|o| o.customer_name.as_str()), Some("customer 5"));
        assert_eq!(queue.front().map(|o| o.id), Some(OrderId(5)));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_try_remove_by_id_respects_check() {
        let mut queue = queue_of(&[1, 2, 3]);

        let refused = queue.try_remove_by_id(OrderId(2), |_| Err::<(), _>("no"));
        assert_eq!(refused.map(|r| r.map(|o| o.id)), Some(Err("no")));
        assert_eq!(ids(&queue), vec![1, 2, 3]);

        let taken = queue.try_remove_by_id(OrderId(2), |order| Ok::<_, ()>(order.quantity));
        assert_eq!(taken.map(|r| r.map(|o| o.id)), Some(Ok(OrderId(2))));
        assert_eq!(ids(&queue), vec![1, 3]);

        assert!(queue
            .try_remove_by_id(OrderId(9), |_| Ok::<(), ()>(()))
            .is_none());
    }
}
