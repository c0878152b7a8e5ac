//! # Mock Mailbox
//!
//! Helpers for testing code that talks to a [`DispatchClient`] without running
//! a [`DispatchActor`](crate::framework::DispatchActor).
//!
//! [`create_mock_client`] hands back a real client plus the receiving end of
//! its mailbox. The `expect_*` helpers pull the next request off the mailbox,
//! check its kind and return its payload together with the responder, so the
//! test decides exactly what the "actor" answers, including errors and
//! dropped responders.
//!
//! ```rust
//! use order_dispatch::dispatcher::FulfillOutcome;
//! use order_dispatch::framework::mock::{create_mock_client, expect_fulfill_next};
//! use order_dispatch::framework::DispatchApi;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client(4);
//!     let task = tokio::spawn(async move { client.fulfill_next().await });
//!
//!     let responder = expect_fulfill_next(&mut receiver).await.unwrap();
//!     responder.send(Ok(FulfillOutcome::Empty)).unwrap();
//!
//!     assert_eq!(task.await.unwrap(), Ok(FulfillOutcome::Empty));
//! }
//! ```

use crate::dispatcher::{CancelOutcome, FulfillOutcome, SubmitOutcome};
use crate::framework::{DispatchClient, DispatchRequest, Response};
use crate::model::{NewOrder, OrderId, ProductId};
use tokio::sync::mpsc;

/// Creates a client whose mailbox is read by the test instead of an actor.
pub fn create_mock_client(buffer_size: usize) -> (DispatchClient, mpsc::Receiver<DispatchRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (DispatchClient::new(sender), receiver)
}

/// Waits for the next request and expects a `Submit`.
///
/// Returns `None` if the mailbox closed or a different request arrived.
pub async fn expect_submit(
    receiver: &mut mpsc::Receiver<DispatchRequest>,
) -> Option<(NewOrder, Response<SubmitOutcome>)> {
    match receiver.recv().await? {
        DispatchRequest::Submit {
            new_order,
            respond_to,
        } => Some((new_order, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and expects a `FulfillNext`.
pub async fn expect_fulfill_next(
    receiver: &mut mpsc::Receiver<DispatchRequest>,
) -> Option<Response<FulfillOutcome>> {
    match receiver.recv().await? {
        DispatchRequest::FulfillNext { respond_to } => Some(respond_to),
        _ => None,
    }
}

/// Waits for the next request and expects a `Cancel`.
pub async fn expect_cancel(
    receiver: &mut mpsc::Receiver<DispatchRequest>,
) -> Option<(OrderId, Response<CancelOutcome>)> {
    match receiver.recv().await? {
        DispatchRequest::Cancel {
            order_id,
            respond_to,
        } => Some((order_id, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and expects a `Restock`.
pub async fn expect_restock(
    receiver: &mut mpsc::Receiver<DispatchRequest>,
) -> Option<(ProductId, u32, Response<u32>)> {
    match receiver.recv().await? {
        DispatchRequest::Restock {
            product_id,
            amount,
            respond_to,
        } => Some((product_id, amount, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::DispatchApi;

    #[tokio::test]
    async fn test_expect_restock_exposes_payload() {
        let (client, mut receiver) = create_mock_client(1);
        let task = tokio::spawn(async move { client.restock("B".into(), 4).await });

        let (product_id, amount, responder) = expect_restock(&mut receiver).await.unwrap();
        assert_eq!(product_id, ProductId::from("B"));
        assert_eq!(amount, 4);
        responder.send(Ok(4)).unwrap();

        assert_eq!(task.await.unwrap(), Ok(4));
    }

    #[tokio::test]
    async fn test_expect_helper_rejects_other_request_kinds() {
        let (client, mut receiver) = create_mock_client(1);
        let task = tokio::spawn(async move { client.query_history().await });

        assert!(expect_submit(&mut receiver).await.is_none());
        // responder was dropped together with the unexpected request
        assert!(task.await.unwrap().is_err());
    }

    #[tokio::test]
    async fn test_expect_helpers_return_none_when_mailbox_closes() {
        let (client, mut receiver) = create_mock_client(1);
        drop(client);
        assert!(expect_cancel(&mut receiver).await.is_none());
    }
}
