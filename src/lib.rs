//! # Order Dispatch
//!
//! > **Inventory-gated, priority-aware order dispatch.**
//!
//! This crate tracks product stock and moves customer orders through an urgent
//! and a standard queue. Stock is reserved when an order is admitted, handed back
//! when it is cancelled, and never allowed to go negative. Urgent orders are
//! always fulfilled before standard ones; within a queue, orders are served in
//! submission order.
//!
//! ## 🏗️ Architecture
//!
//! The crate is split into a synchronous core and the async boundaries that let
//! many tasks share it.
//!
//! ### 1. The Core ([`dispatcher`], [`inventory`], [`queue`], [`model`])
//! - **Role**: The order lifecycle state machine, `Awaiting → Fulfilled | Cancelled`.
//! - **Key items**: [`Dispatcher`](dispatcher::Dispatcher), [`Inventory`](inventory::Inventory),
//!   [`OrderQueue`](queue::OrderQueue), [`Order`](model::Order).
//! - Plain `&mut self` methods, no I/O, no locking. Easy to test and to embed.
//!
//! ### 2. The Boundaries ([`framework`])
//! `submit` and `cancel` are check-then-act sequences, so concurrent callers must
//! never interleave inside one. Two ways of serializing them are provided:
//! - **Mailbox**: [`DispatchActor`](framework::DispatchActor) owns the dispatcher in
//!   its own Tokio task; [`DispatchClient`](framework::DispatchClient) sends requests.
//! - **Lock**: [`SharedDispatcher`](framework::SharedDispatcher) wraps it in a mutex.
//!
//! Both implement [`DispatchApi`](framework::DispatchApi).
//!
//! ### 3. The Host ([`lifecycle`], [`config`])
//! - [`DispatchSystem`](lifecycle::DispatchSystem) applies seed stock, spawns the
//!   actor and shuts it down again.
//! - [`setup_tracing`](lifecycle::setup_tracing) wires `tracing` output to `RUST_LOG`.
//!
//! ## 👩‍💻 Outcomes vs Errors
//!
//! "Out of stock", "nothing to fulfill" and "no such order" are ordinary results
//! ([`SubmitOutcome`](dispatcher::SubmitOutcome), [`FulfillOutcome`](dispatcher::FulfillOutcome),
//! [`CancelOutcome`](dispatcher::CancelOutcome)). Only malformed requests, such as a
//! zero quantity or a reused order id, come back as
//! [`DispatchError`](dispatcher::DispatchError).
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use order_dispatch::dispatcher::{Dispatcher, FulfillOutcome};
//! use order_dispatch::model::NewOrder;
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.restock("A", 10).unwrap();
//!
//! dispatcher.submit(NewOrder::new(2, "A", 1, "Bob", false)).unwrap();
//! dispatcher.submit(NewOrder::new(1, "A", 1, "Alice", true)).unwrap();
//!
//! // Alice's priority order goes first even though Bob submitted earlier.
//! match dispatcher.fulfill_next() {
//!     FulfillOutcome::Fulfilled(order) => assert_eq!(order.customer_name, "Alice"),
//!     FulfillOutcome::Empty => unreachable!(),
//! }
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod config;
pub mod dispatcher;
pub mod framework;
pub mod inventory;
pub mod lifecycle;
pub mod model;
pub mod queue;
