//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` formatter filtered by the
//! `RUST_LOG` environment variable.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: start, shutdown and final queue sizes
//! - **State changes** (`info`): orders accepted, fulfilled, cancelled; restocks
//! - **Refusals** (`warn`): zero quantities, duplicate ids, zero restocks
//! - **Payloads** (`debug`): full `NewOrder` at submit, every mailbox request
//!
//! ## Usage Examples
//!
//! ```bash
//! # State changes only
//! RUST_LOG=info cargo run
//!
//! # Payloads and mailbox traffic
//! RUST_LOG=debug cargo run
//!
//! # Only the dispatcher core
//! RUST_LOG=order_dispatch::dispatcher=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a submit/fulfill round looks like:
//!
//! ```text
//! INFO Dispatch actor started products=1
//! INFO submit:Order accepted order_id=order_1 product_id=A quantity=5 priority=false
//! INFO fulfill_next:Order fulfilled order_id=order_1 priority=false waiting=0
//! ```
//!
//! Client calls open a span per operation (`submit`, `cancel`, ...) so the
//! dispatcher's own events show up nested under the request that caused them
//! when the lock boundary is used. With the actor, events are logged from the
//! actor task.

/// Initializes the global tracing subscriber.
///
/// Call once at startup; a second call panics because the global default is
/// already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
