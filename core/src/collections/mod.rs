pub mod bounded;

use std::sync::Arc;

use self::bounded::BoundedErrorQueue;

pub type QueueResult<T> = Result<T, QueueError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueueError {
    #[error("Queue is at capacity ({capacity})")]
    AtCapacity { capacity: usize },
}

/// Interface handed to the producers and consumers of reported errors.
///
/// Producers call `enqueue`, a supervisor polls with `dequeue`. Neither side ever blocks.
pub trait ErrorQueue<T>: Send + Sync {
    /// `None` is accepted and ignored.
    fn enqueue(&self, info: Option<T>) -> QueueResult<()>;

    /// Pop the oldest item, if any
    fn dequeue(&self) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Create a bounded queue behind the [ErrorQueue] interface
pub fn new_bounded_error_queue<T>(capacity: usize) -> Arc<dyn ErrorQueue<T>>
where
    T: Send + 'static,
{
    Arc::new(BoundedErrorQueue::new(capacity))
}
