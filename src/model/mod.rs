//! Pure data structures shared by the inventory, the queues and the dispatcher.

pub mod order;
pub mod product;

pub use order::*;
pub use product::*;
