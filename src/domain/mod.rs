//! Domain layer: the containers
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod binary_tree;
pub mod chain;
pub mod error;
pub mod linked_list;
pub mod queue;
pub mod stack;
mod two_pointer;

pub use binary_tree::{BinaryTree, TreeNode};
pub use chain::LinkedChain;
pub use error::{DomainError, DomainResult};
pub use linked_list::LinkedList;
pub use queue::{Queue, DEFAULT_QUEUE_CAPACITY};
pub use stack::{Stack, DEFAULT_STACK_CAPACITY};
