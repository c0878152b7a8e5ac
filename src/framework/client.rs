//! # Dispatch Client
//!
//! The cloneable async handle for a [`DispatchActor`](crate::framework::DispatchActor).

use crate::dispatcher::{CancelOutcome, FulfillOutcome, OrderHistory, QueueSnapshot, SubmitOutcome};
use crate::framework::{DispatchApi, DispatchRequest, FrameworkError, Response};
use crate::model::{NewOrder, Order, OrderId, ProductId, ProductStock};
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// ## DispatchClient
///
/// Forwards each [`DispatchApi`] call over a Tokio mpsc channel and waits for
/// the actor's answer on a oneshot channel. It holds only a sender, so cloning
/// is cheap and clones can be moved into any number of tasks. The actor stops
/// once the last clone is dropped.
#[derive(Clone)]
pub struct DispatchClient {
    sender: mpsc::Sender<DispatchRequest>,
}

impl DispatchClient {
    pub fn new(sender: mpsc::Sender<DispatchRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> DispatchRequest,
    ) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

#[async_trait]
impl DispatchApi for DispatchClient {
    #[instrument(skip(self, new_order), fields(order_id = %new_order.id))]
    async fn submit(&self, new_order: NewOrder) -> Result<SubmitOutcome, FrameworkError> {
        debug!(?new_order, "Sending submit");
        self.request(|respond_to| DispatchRequest::Submit {
            new_order,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    async fn fulfill_next(&self) -> Result<FulfillOutcome, FrameworkError> {
        debug!("Sending request");
        self.request(|respond_to| DispatchRequest::FulfillNext { respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn cancel(&self, order_id: OrderId) -> Result<CancelOutcome, FrameworkError> {
        debug!("Sending request");
        self.request(|respond_to| DispatchRequest::Cancel {
            order_id,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    async fn restock(&self, product_id: ProductId, amount: u32) -> Result<u32, FrameworkError> {
        debug!("Sending request");
        self.request(|respond_to| DispatchRequest::Restock {
            product_id,
            amount,
            respond_to,
        })
        .await
    }

    async fn query_inventory(&self) -> Result<Vec<ProductStock>, FrameworkError> {
        self.request(|respond_to| DispatchRequest::QueryInventory { respond_to })
            .await
    }

    async fn query_queues(&self) -> Result<QueueSnapshot, FrameworkError> {
        self.request(|respond_to| DispatchRequest::QueryQueues { respond_to })
            .await
    }

    async fn query_history(&self) -> Result<OrderHistory, FrameworkError> {
        self.request(|respond_to| DispatchRequest::QueryHistory { respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn find_order(&self, order_id: OrderId) -> Result<Option<Order>, FrameworkError> {
        self.request(|respond_to| DispatchRequest::FindOrder {
            order_id,
            respond_to,
        })
        .await
    }
}
