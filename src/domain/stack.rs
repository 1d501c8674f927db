//! Fixed-capacity, array-backed LIFO stack.

use std::fmt;

use tracing::warn;

use crate::domain::{DomainError, DomainResult};

/// Default capacity, matching the classic `MAX_STACK_SIZE` exercise constant.
pub const DEFAULT_STACK_CAPACITY: usize = 100;

/// Array-backed stack of `i32` that never grows.
///
/// The backing buffer is allocated once. `len` doubles as the top index:
/// slots `0..len` hold live values, the rest are stale.
#[derive(Debug, Clone)]
pub struct Stack {
    items: Box<[i32]>,
    len: usize,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_STACK_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Pushes `value` on top. Fails without effect when the stack is full.
    pub fn push(&mut self, value: i32) -> DomainResult<()> {
        if self.is_full() {
            warn!(capacity = self.capacity(), value, "stack overflow");
            return Err(DomainError::StackOverflow {
                capacity: self.capacity(),
            });
        }
        self.items[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the most recently pushed value.
    pub fn pop(&mut self) -> DomainResult<i32> {
        if self.is_empty() {
            warn!("stack underflow");
            return Err(DomainError::StackUnderflow);
        }
        self.len -= 1;
        Ok(self.items[self.len])
    }

    pub fn peek(&self) -> DomainResult<i32> {
        match self.len {
            0 => Err(DomainError::EmptyStack),
            n => Ok(self.items[n - 1]),
        }
    }

    /// Iterates from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.items[..self.len].iter().rev().copied()
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "empty");
        }
        let items: Vec<String> = self.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", items.join(" "))
    }
}
