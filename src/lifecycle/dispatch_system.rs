use crate::config::DispatchConfig;
use crate::dispatcher::Dispatcher;
use crate::framework::{DispatchActor, DispatchClient};
use tracing::{error, info, warn};

/// Runtime host for one dispatcher.
///
/// `DispatchSystem` is responsible for:
/// - **Bootstrapping**: building the [`Dispatcher`] and applying seed stock from config
/// - **Lifecycle Management**: spawning the [`DispatchActor`] and stopping it again
/// - **Access**: handing out the [`DispatchClient`] callers talk to
///
/// # Example
///
/// ```ignore
/// let system = DispatchSystem::new(DispatchConfig::from_env());
///
/// system.client.restock("A".into(), 5).await?;
/// system.client.submit(NewOrder::new(1, "A", 2, "Alice", false)).await?;
///
/// let final_state = system.shutdown().await?;
/// ```
pub struct DispatchSystem {
    /// Client for the dispatch actor. Clone it freely.
    pub client: DispatchClient,

    handle: tokio::task::JoinHandle<Dispatcher>,
}

impl DispatchSystem {
    /// Builds the dispatcher and starts its actor.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: DispatchConfig) -> Self {
        let mut dispatcher = Dispatcher::new();
        for (product_id, amount) in &config.seed_stock {
            if let Err(e) = dispatcher.restock(product_id.clone(), *amount) {
                warn!(%product_id, error = %e, "Seed stock skipped");
            }
        }

        let (actor, client) = DispatchActor::new(dispatcher, config.mailbox_capacity);
        let handle = tokio::spawn(actor.run());
        info!(
            mailbox_capacity = config.mailbox_capacity,
            seeded = config.seed_stock.len(),
            "Dispatch system started"
        );

        Self { client, handle }
    }

    /// Gracefully shuts the system down and returns the final dispatcher state.
    ///
    /// Dropping the system's client closes the mailbox once every other clone
    /// is gone too; the actor then drains and exits.
    ///
    /// # Returns
    ///
    /// - `Ok(Dispatcher)` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<Dispatcher, String> {
        info!("Shutting down dispatch system...");

        drop(self.client);

        match self.handle.await {
            Ok(dispatcher) => {
                info!("Dispatch system shutdown complete.");
                Ok(dispatcher)
            }
            Err(e) => {
                error!("Dispatch actor task failed: {:?}", e);
                Err(format!("Dispatch actor task failed: {:?}", e))
            }
        }
    }
}
