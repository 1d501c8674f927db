//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors are the caller-visible failures of the containers.
/// None of them leaves a container modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("stack overflow: capacity {capacity} reached")]
    StackOverflow { capacity: usize },

    #[error("stack underflow: nothing to pop")]
    StackUnderflow,

    #[error("stack is empty")]
    EmptyStack,

    #[error("queue overflow: capacity {capacity} reached")]
    QueueOverflow { capacity: usize },

    #[error("queue underflow: nothing to dequeue")]
    QueueUnderflow,

    #[error("queue is empty")]
    EmptyQueue,

    #[error("list is empty")]
    EmptyList,

    #[error("position {position} out of range for length {len}")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("cycle detected in chain")]
    CycleDetected,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
