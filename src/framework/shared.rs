//! # Shared Dispatcher
//!
//! Lock-based alternative to the actor: the [`Dispatcher`] sits behind a
//! `tokio::sync::Mutex` and every [`DispatchApi`] call holds the lock for its
//! whole check-then-act sequence. Useful when the host already owns a runtime
//! task per request and does not want a dedicated actor task.

use crate::dispatcher::{CancelOutcome, Dispatcher, FulfillOutcome, OrderHistory, QueueSnapshot, SubmitOutcome};
use crate::framework::{DispatchApi, FrameworkError};
use crate::model::{NewOrder, Order, OrderId, ProductId, ProductStock};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::instrument;

#[derive(Clone, Default)]
pub struct SharedDispatcher {
    inner: Arc<Mutex<Dispatcher>>,
}

impl SharedDispatcher {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            inner: Arc::new(Mutex::new(dispatcher)),
        }
    }

    /// Clones the current state while holding the lock.
    pub async fn snapshot_state(&self) -> Dispatcher {
        self.inner.lock().await.clone()
    }
}

#[async_trait]
impl DispatchApi for SharedDispatcher {
    #[instrument(skip(self, new_order), fields(order_id = %new_order.id))]
    async fn submit(&self, new_order: NewOrder) -> Result<SubmitOutcome, FrameworkError> {
        Ok(self.inner.lock().await.submit(new_order)?)
    }

    #[instrument(skip(self))]
    async fn fulfill_next(&self) -> Result<FulfillOutcome, FrameworkError> {
        Ok(self.inner.lock().await.fulfill_next())
    }

    #[instrument(skip(self))]
    async fn cancel(&self, order_id: OrderId) -> Result<CancelOutcome, FrameworkError> {
        Ok(self.inner.lock().await.cancel(order_id))
    }

    #[instrument(skip(self))]
    async fn restock(&self, product_id: ProductId, amount: u32) -> Result<u32, FrameworkError> {
        Ok(self.inner.lock().await.restock(product_id, amount)?)
    }

    async fn query_inventory(&self) -> Result<Vec<ProductStock>, FrameworkError> {
        Ok(self.inner.lock().await.inventory())
    }

    async fn query_queues(&self) -> Result<QueueSnapshot, FrameworkError> {
        Ok(self.inner.lock().await.snapshot())
    }

    async fn query_history(&self) -> Result<OrderHistory, FrameworkError> {
        Ok(self.inner.lock().await.history())
    }

    async fn find_order(&self, order_id: OrderId) -> Result<Option<Order>, FrameworkError> {
        Ok(self.inner.lock().await.find_order(order_id).cloned())
    }
}
