//! Bounded error queues for collecting failures reported by worker threads.
//!
//! # Features
//!
//! | name | description |
//! | :-- | :-- |
//! | collections | Enables the queue collections module |
//! | serde | Enables serde integration |
//!
#[cfg(feature = "collections")]
pub mod collections;
pub mod info;

pub use info::{ErrorInformation, WorkerId};

#[cfg(feature = "collections")]
pub use collections::{bounded::BoundedErrorQueue, ErrorQueue, QueueError, QueueResult};
