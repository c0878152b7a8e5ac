//! # Framework Errors
//!
//! Errors raised by the async boundaries around the [`Dispatcher`](crate::dispatcher::Dispatcher).
//! Transport failures sit next to the dispatcher's own caller-contract errors so
//! clients deal with a single type.

use crate::dispatcher::DispatchError;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
