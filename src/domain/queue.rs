//! Fixed-capacity FIFO queue over a circular buffer.

use std::fmt;

use tracing::warn;

use crate::domain::{DomainError, DomainResult};

/// Default capacity, matching the classic `MAX_QUEUE_SIZE` exercise constant.
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// Circular-array queue of `i32`.
///
/// `front` is the next slot to read, `rear` the next slot to write. Both wrap
/// modulo capacity, so vacated slots are reused without shifting elements.
#[derive(Debug, Clone)]
pub struct Queue {
    items: Box<[i32]>,
    front: usize,
    rear: usize,
    count: usize,
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Queue {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: vec![0; capacity].into_boxed_slice(),
            front: 0,
            rear: 0,
            count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Appends `value` at the rear. Fails without effect when full.
    pub fn enqueue(&mut self, value: i32) -> DomainResult<()> {
        if self.is_full() {
            warn!(capacity = self.capacity(), value, "queue overflow");
            return Err(DomainError::QueueOverflow {
                capacity: self.capacity(),
            });
        }
        self.items[self.rear] = value;
        self.rear = (self.rear + 1) % self.capacity();
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the earliest enqueued value.
    pub fn dequeue(&mut self) -> DomainResult<i32> {
        if self.is_empty() {
            warn!("queue underflow");
            return Err(DomainError::QueueUnderflow);
        }
        let value = self.items[self.front];
        self.front = (self.front + 1) % self.capacity();
        self.count -= 1;
        Ok(value)
    }

    pub fn front(&self) -> DomainResult<i32> {
        if self.is_empty() {
            return Err(DomainError::EmptyQueue);
        }
        Ok(self.items[self.front])
    }

    /// Iterates from front to rear.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        (0..self.count).map(move |offset| self.items[(self.front + offset) % self.capacity()])
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "empty");
        }
        let items: Vec<String> = self.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", items.join(" "))
    }
}
