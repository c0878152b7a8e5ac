//! # DispatchApi Trait
//!
//! The async surface shared by every boundary that serializes access to a
//! [`Dispatcher`](crate::dispatcher::Dispatcher). Hosts and tests written
//! against `DispatchApi` run unchanged on the mailbox
//! ([`DispatchClient`](crate::framework::DispatchClient)) or the lock
//! ([`SharedDispatcher`](crate::framework::SharedDispatcher)).
use crate::dispatcher::{CancelOutcome, FulfillOutcome, OrderHistory, QueueSnapshot, SubmitOutcome};
use crate::framework::FrameworkError;
use crate::model::{NewOrder, Order, OrderId, ProductId, ProductStock};
use async_trait::async_trait;

/// Each call is applied atomically with respect to every other call on the
/// same dispatcher.
#[async_trait]
pub trait DispatchApi: Send + Sync {
    async fn submit(&self, new_order: NewOrder) -> Result<SubmitOutcome, FrameworkError>;

    async fn fulfill_next(&self) -> Result<FulfillOutcome, FrameworkError>;

    async fn cancel(&self, order_id: OrderId) -> Result<CancelOutcome, FrameworkError>;

    /// Adds stock, creating the product if absent. Returns the new level.
    async fn restock(&self, product_id: ProductId, amount: u32) -> Result<u32, FrameworkError>;

    async fn query_inventory(&self) -> Result<Vec<ProductStock>, FrameworkError>;

    async fn query_queues(&self) -> Result<QueueSnapshot, FrameworkError>;

    async fn query_history(&self) -> Result<OrderHistory, FrameworkError>;

    /// Looks an order up in the active queues and both histories.
    async fn find_order(&self, order_id: OrderId) -> Result<Option<Order>, FrameworkError>;

    /// Current stock for one product, `None` if it was never stocked.
    #[tracing::instrument(skip(self))]
    async fn stock_of(&self, product_id: ProductId) -> Result<Option<u32>, FrameworkError> {
        let inventory = self.query_inventory().await?;
        Ok(inventory
            .into_iter()
            .find(|stock| stock.product_id == product_id)
            .map(|stock| stock.amount))
    }

    /// Fulfills orders until both queues are empty, returning them in service
    /// order.
    ///
    /// Each fulfillment is its own atomic step, so orders submitted by other
    /// callers while this runs are picked up too.
    #[tracing::instrument(skip(self))]
    async fn fulfill_all(&self) -> Result<Vec<Order>, FrameworkError> {
        let mut served = Vec::new();
        while let FulfillOutcome::Fulfilled(order) = self.fulfill_next().await? {
            served.push(order);
        }
        tracing::debug!(count = served.len(), "Drained queues");
        Ok(served)
    }
}
