//! # Order Dispatch Demo
//!
//! Scripted walk through the dispatcher running behind its actor:
//! restock, admit a mix of standard and priority orders, hit a stock
//! rejection, cancel one order and drain the queues.

use order_dispatch::config::DispatchConfig;
use order_dispatch::dispatcher::{CancelOutcome, SubmitOutcome};
use order_dispatch::framework::DispatchApi;
use order_dispatch::lifecycle::{setup_tracing, DispatchSystem};
use order_dispatch::model::{NewOrder, OrderId};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting order dispatch demo");

    let config = DispatchConfig::from_env();
    let system = DispatchSystem::new(config);
    let client = system.client.clone();

    let span = tracing::info_span!("restock");
    async {
        client.restock("widget".into(), 10).await?;
        client.restock("gadget".into(), 3).await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let orders = [
        NewOrder::new(1, "widget", 4, "Alice", false),
        NewOrder::new(2, "gadget", 3, "Bob", false),
        NewOrder::new(3, "widget", 2, "Carol", true),
        NewOrder::new(4, "gadget", 1, "Dave", true),
        NewOrder::new(5, "widget", 3, "Erin", false),
    ];

    let span = tracing::info_span!("order_intake");
    async {
        for order in orders {
            let order_id = order.id;
            match client.submit(order).await {
                Ok(SubmitOutcome::Accepted(order)) => info!(%order, "Accepted"),
                Ok(SubmitOutcome::InsufficientStock {
                    product_id,
                    requested,
                    available,
                }) => {
                    warn!(%order_id, %product_id, requested, available, "Rejected: insufficient stock")
                }
                Err(e) => warn!(%order_id, error = %e, "Rejected: invalid request"),
            }
        }
    }
    .instrument(span)
    .await;

    match client.cancel(OrderId(5)).await.map_err(|e| e.to_string())? {
        CancelOutcome::Cancelled(order) => info!(%order, "Cancelled"),
        CancelOutcome::NotFound(order_id) => warn!(%order_id, "Nothing to cancel"),
        CancelOutcome::StockOverflow(order_id) => warn!(%order_id, "Cancel refused: stock full"),
    }

    let served = client.fulfill_all().await.map_err(|e| e.to_string())?;
    for order in &served {
        info!(%order, "Shipped");
    }

    let history = client.query_history().await.map_err(|e| e.to_string())?;
    info!(
        fulfilled = history.fulfilled.len(),
        cancelled = history.cancelled.len(),
        "History"
    );
    for stock in client.query_inventory().await.map_err(|e| e.to_string())? {
        info!(product_id = %stock.product_id, amount = stock.amount, "Stock");
    }

    drop(client);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
