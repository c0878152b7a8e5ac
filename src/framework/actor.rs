//! # Dispatch Actor
//!
//! The "server" half of the mailbox boundary. The actor owns the
//! [`Dispatcher`] outright and applies requests one at a time, so the
//! check-then-act sequences inside `submit` and `cancel` can never interleave
//! with another caller's request.

use crate::dispatcher::Dispatcher;
use crate::framework::{DispatchClient, DispatchRequest, FrameworkError};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Mailbox-driven owner of a [`Dispatcher`].
///
/// # Usage Pattern
///
/// 1.  **Create**: `DispatchActor::new(dispatcher, capacity)` returns the actor
///     and a cloneable [`DispatchClient`].
/// 2.  **Run**: spawn `actor.run()` on the runtime.
/// 3.  **Stop**: drop every client. The loop drains, logs final sizes and hands
///     the dispatcher back through the task's `JoinHandle`.
///
/// ```rust
/// use order_dispatch::dispatcher::{Dispatcher, FulfillOutcome};
/// use order_dispatch::framework::{DispatchActor, DispatchApi};
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = DispatchActor::new(Dispatcher::new(), 8);
///     let handle = tokio::spawn(actor.run());
///
///     client.restock("A".into(), 5).await.unwrap();
///     assert_eq!(client.fulfill_next().await.unwrap(), FulfillOutcome::Empty);
///
///     drop(client);
///     let dispatcher = handle.await.unwrap();
///     assert_eq!(dispatcher.inventory().len(), 1);
/// }
/// ```
pub struct DispatchActor {
    receiver: mpsc::Receiver<DispatchRequest>,
    dispatcher: Dispatcher,
}

impl DispatchActor {
    /// Creates the actor and its client.
    ///
    /// # Arguments
    ///
    /// * `dispatcher` - Initial state, typically pre-stocked by the host
    /// * `buffer_size` - Mailbox capacity. When full, client calls wait for room.
    ///   Must be non-zero.
    pub fn new(dispatcher: Dispatcher, buffer_size: usize) -> (Self, DispatchClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            dispatcher,
        };
        (actor, DispatchClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped, then returns
    /// the final dispatcher state.
    pub async fn run(mut self) -> Dispatcher {
        info!(
            products = self.dispatcher.inventory().len(),
            "Dispatch actor started"
        );

        while let Some(msg) = self.receiver.recv().await {
            debug!(request = msg.kind(), "Received");
            self.handle(msg);
        }

        let history = self.dispatcher.history();
        info!(
            waiting = self.dispatcher.waiting(),
            fulfilled = history.fulfilled.len(),
            cancelled = history.cancelled.len(),
            "Dispatch actor shutdown"
        );
        self.dispatcher
    }

    // A dropped responder only means the caller stopped waiting.
    fn handle(&mut self, msg: DispatchRequest) {
        let dispatcher = &mut self.dispatcher;
        match msg {
            DispatchRequest::Submit {
                new_order,
                respond_to,
            } => {
                let result = dispatcher.submit(new_order).map_err(FrameworkError::from);
                let _ = respond_to.send(result);
            }
            DispatchRequest::FulfillNext { respond_to } => {
                let _ = respond_to.send(Ok(dispatcher.fulfill_next()));
            }
            DispatchRequest::Cancel {
                order_id,
                respond_to,
            } => {
                let _ = respond_to.send(Ok(dispatcher.cancel(order_id)));
            }
            DispatchRequest::Restock {
                product_id,
                amount,
                respond_to,
            } => {
                let result = dispatcher
                    .restock(product_id, amount)
                    .map_err(FrameworkError::from);
                let _ = respond_to.send(result);
            }
            DispatchRequest::QueryInventory { respond_to } => {
                let _ = respond_to.send(Ok(dispatcher.inventory()));
            }
            DispatchRequest::QueryQueues { respond_to } => {
                let _ = respond_to.send(Ok(dispatcher.snapshot()));
            }
            DispatchRequest::QueryHistory { respond_to } => {
                let _ = respond_to.send(Ok(dispatcher.history()));
            }
            DispatchRequest::FindOrder {
                order_id,
                respond_to,
            } => {
                let _ = respond_to.send(Ok(dispatcher.find_order(order_id).cloned()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::{CancelOutcome, DispatchError, SubmitOutcome};
    use crate::inventory::InventoryError;
    use crate::framework::DispatchApi;
    use crate::model::{NewOrder, OrderId, OrderStatus};

    #[tokio::test]
    async fn test_actor_returns_final_state_on_shutdown() {
        let (actor, client) = DispatchActor::new(Dispatcher::new(), 4);
        let handle = tokio::spawn(actor.run());

        client.restock("A".into(), 3).await.unwrap();
        let outcome = client
            .submit(NewOrder::new(1, "A", 2, "Alice", false))
            .await
            .unwrap();
        assert!(outcome.is_accepted());
        client.fulfill_next().await.unwrap();

        drop(client);
        let dispatcher = handle.await.unwrap();
        assert_eq!(
            dispatcher.find_order(OrderId(1)).map(|o| o.status()),
            Some(OrderStatus::Fulfilled)
        );
        assert_eq!(dispatcher.stock_of(&"A".into()), Some(1));
    }

    #[tokio::test]
    async fn test_contract_violation_reaches_caller_as_dispatch_error() {
        let (actor, client) = DispatchActor::new(Dispatcher::new(), 4);
        tokio::spawn(actor.run());

        let result = client.restock("A".into(), 0).await;
        assert_eq!(
            result,
            Err(FrameworkError::Dispatch(DispatchError::Restock(
                InventoryError::InvalidAmount("A".into())
            )))
        );

        // actor keeps serving after a refused request
        client.restock("A".into(), 1).await.unwrap();
        let outcome = client
            .submit(NewOrder::new(1, "A", 1, "Bob", true))
            .await
            .unwrap();
        assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
        assert!(matches!(
            client.cancel(OrderId(1)).await.unwrap(),
            CancelOutcome::Cancelled(_)
        ));
    }

    #[tokio::test]
    async fn test_stock_overflow_is_refused_and_actor_survives() {
        let (actor, client) = DispatchActor::new(Dispatcher::new(), 4);
        let handle = tokio::spawn(actor.run());

        client.restock("A".into(), u32::MAX).await.unwrap();
        assert!(matches!(
            client.restock("A".into(), 1).await,
            Err(FrameworkError::Dispatch(DispatchError::Restock(
                InventoryError::StockOverflow { .. }
            )))
        ));

        client
            .submit(NewOrder::new(1, "A", u32::MAX, "Alice", false))
            .await
            .unwrap();
        client.restock("A".into(), u32::MAX).await.unwrap();
        assert_eq!(
            client.cancel(OrderId(1)).await.unwrap(),
            CancelOutcome::StockOverflow(OrderId(1))
        );

        // unrelated requests still get answers
        assert_eq!(client.restock("B".into(), 1).await, Ok(1));
        let order = client.find_order(OrderId(1)).await.unwrap().unwrap();
        assert_eq!(order.status(), OrderStatus::Awaiting);

        drop(client);
        let dispatcher = handle.await.unwrap();
        assert_eq!(dispatcher.waiting(), 1);
    }
}
