//! # BoundedErrorQueue
//!
//! Multi Producer Multi Consumer First In First Out Queue with a fixed capacity
//!

use std::{collections::VecDeque, fmt};

use parking_lot::Mutex;
use tracing::{debug, trace};

use super::{ErrorQueue, QueueError, QueueResult};

pub struct BoundedErrorQueue<T> {
    capacity: usize,
    items: Mutex<VecDeque<T>>,
}

impl<T> fmt::Debug for BoundedErrorQueue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self.items.lock();
        f.debug_struct("BoundedErrorQueue")
            .field("capacity", &self.capacity)
            .field("len", &items.len())
            .field("items", &*items)
            .finish()
    }
}

impl<T> BoundedErrorQueue<T> {
    /// A capacity of 0 is valid, such a queue rejects every item.
    ///
    /// Storage is allocated on demand, not up front.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Mutex::new(VecDeque::new()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Push an item to the back of the queue.
    ///
    /// `None` is ignored and returns `Ok`.
    /// If the queue already holds `capacity` items the item is dropped and `AtCapacity` is
    /// returned.
    pub fn enqueue(&self, item: impl Into<Option<T>>) -> QueueResult<()> {
        let item = match item.into() {
            Some(item) => item,
            None => return Ok(()),
        };
        let mut items = self.items.lock();
        if items.len() >= self.capacity {
            drop(items);
            debug!(capacity = self.capacity, "Queue is full, rejecting item");
            return Err(QueueError::AtCapacity {
                capacity: self.capacity,
            });
        }
        items.push_back(item);
        trace!(len = items.len(), "Enqueued item");
        Ok(())
    }

    /// Pop the oldest item from the queue, if any
    pub fn dequeue(&self) -> Option<T> {
        let item = self.items.lock().pop_front();
        trace!(found = item.is_some(), "Dequeue");
        item
    }

    /// Snapshot of the number of items, may be stale by the time it's read
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every item in FIFO order while holding the lock once
    pub fn drain(&self) -> Vec<T> {
        let mut items = self.items.lock();
        let drained: Vec<T> = items.drain(..).collect();
        trace!(count = drained.len(), "Drained queue");
        drained
    }
}

impl<T> ErrorQueue<T> for BoundedErrorQueue<T>
where
    T: Send,
{
    fn enqueue(&self, info: Option<T>) -> QueueResult<()> {
        BoundedErrorQueue::enqueue(self, info)
    }

    fn dequeue(&self) -> Option<T> {
        BoundedErrorQueue::dequeue(self)
    }

    fn len(&self) -> usize {
        BoundedErrorQueue::len(self)
    }

    fn is_empty(&self) -> bool {
        BoundedErrorQueue::is_empty(self)
    }
}
