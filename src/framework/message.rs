//! # Dispatch Messages
//!
//! The message type carried from a [`DispatchClient`](crate::framework::DispatchClient)
//! to the [`DispatchActor`](crate::framework::DispatchActor). Every variant maps
//! to one dispatcher operation and carries a one-shot responder for its result.

use crate::dispatcher::{CancelOutcome, FulfillOutcome, OrderHistory, QueueSnapshot, SubmitOutcome};
use crate::framework::FrameworkError;
use crate::model::{NewOrder, Order, OrderId, ProductId, ProductStock};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum DispatchRequest {
    Submit {
        new_order: NewOrder,
        respond_to: Response<SubmitOutcome>,
    },
    FulfillNext {
        respond_to: Response<FulfillOutcome>,
    },
    Cancel {
        order_id: OrderId,
        respond_to: Response<CancelOutcome>,
    },
    Restock {
        product_id: ProductId,
        amount: u32,
        respond_to: Response<u32>,
    },
    QueryInventory {
        respond_to: Response<Vec<ProductStock>>,
    },
    QueryQueues {
        respond_to: Response<QueueSnapshot>,
    },
    QueryHistory {
        respond_to: Response<OrderHistory>,
    },
    FindOrder {
        order_id: OrderId,
        respond_to: Response<Option<Order>>,
    },
}

impl DispatchRequest {
    /// Short operation name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            DispatchRequest::Submit { .. } => "Submit",
            DispatchRequest::FulfillNext { .. } => "FulfillNext",
            DispatchRequest::Cancel { .. } => "Cancel",
            DispatchRequest::Restock { .. } => "Restock",
            DispatchRequest::QueryInventory { .. } => "QueryInventory",
            DispatchRequest::QueryQueues { .. } => "QueryQueues",
            DispatchRequest::QueryHistory { .. } => "QueryHistory",
            DispatchRequest::FindOrder { .. } => "FindOrder",
        }
    }
}
