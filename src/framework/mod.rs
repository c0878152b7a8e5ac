//! Concurrency boundaries around the synchronous [`Dispatcher`](crate::dispatcher::Dispatcher).
//!
//! # Main Components
//!
//! - [`DispatchApi`] - Async trait every boundary implements
//! - [`DispatchActor`] / [`DispatchClient`] - Mailbox boundary: one task owns the dispatcher
//! - [`SharedDispatcher`] - Lock boundary: the dispatcher sits behind a mutex
//! - [`FrameworkError`] - Transport errors plus the dispatcher's own contract errors
//!
//! # Testing
//!
//! See the [`mock`] module for driving a client without spawning an actor.

pub mod actor;
pub mod api;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod shared;

pub use actor::DispatchActor;
pub use api::DispatchApi;
pub use client::DispatchClient;
pub use error::FrameworkError;
pub use message::{DispatchRequest, Response};
pub use shared::SharedDispatcher;
