//! # Runtime Lifecycle
//!
//! Hosting glue for the dispatcher: starting the actor with its configured
//! state, shutting it down, and setting up logging.
//!
//! ## Startup
//!
//! [`DispatchSystem::new`] builds a [`Dispatcher`](crate::dispatcher::Dispatcher),
//! applies the seed stock from [`DispatchConfig`](crate::config::DispatchConfig),
//! and spawns the [`DispatchActor`](crate::framework::DispatchActor) on the
//! current Tokio runtime.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the mailbox
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor logs final state** and returns its dispatcher
//! 4. **Await completion** - [`DispatchSystem::shutdown`] joins the task
//!
//! Requests already in the mailbox are processed before the actor exits.
//! Clones of the client held elsewhere keep the actor alive, so shutdown waits
//! for them to be dropped.

pub mod dispatch_system;
pub mod tracing;

pub use self::dispatch_system::*;
pub use self::tracing::*;
