//! Data-structure demo service
//!
//! Runs the fixed demo sequences for each container and returns what happened
//! as plain report data. Printing is left to the CLI.

use tracing::{debug, instrument};

use crate::algorithms::are_parentheses_balanced;
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{BinaryTree, LinkedChain, LinkedList, Queue, Stack, TreeNode};

/// Expressions checked by the stack demo.
pub const BRACKET_SAMPLES: [&str; 2] = ["{[()]}", "{[(])}"];

/// Outcome of the linked list demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedListReport {
    /// Contents after the front/back inserts
    pub after_inserts: Vec<i32>,
    pub search_target: i32,
    pub search_position: Option<usize>,
    pub middle: i32,
    /// Contents after the iterative reversal
    pub reversed: Vec<i32>,
    /// Reversing back with the recursive variant restores the inserts
    pub reversed_back: Vec<i32>,
    pub deleted: i32,
    pub after_delete: Vec<i32>,
    pub has_cycle: bool,
    /// Same values as an arena chain with the tail rewired to the head
    pub rewired_has_cycle: bool,
}

/// Outcome of the stack demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackReport {
    /// Top to bottom after the pushes
    pub after_pushes: Vec<i32>,
    pub top: i32,
    pub popped: i32,
    pub after_pop: Vec<i32>,
    pub bracket_checks: Vec<(String, bool)>,
}

/// Outcome of the queue demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueReport {
    /// Front to rear after the enqueues
    pub after_enqueues: Vec<i32>,
    pub front: i32,
    pub dequeued: Vec<i32>,
    pub after_dequeues: Vec<i32>,
}

/// Outcome of the binary tree demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeReport {
    pub rendered: String,
    pub in_order: Vec<i32>,
    pub pre_order: Vec<i32>,
    pub post_order: Vec<i32>,
    pub level_order: Vec<i32>,
    pub height: usize,
    pub released: usize,
}

/// Service running the container demos with configured capacities.
pub struct DemoService {
    stack_capacity: usize,
    queue_capacity: usize,
}

impl DemoService {
    pub fn new(settings: &Settings) -> Self {
        Self {
            stack_capacity: settings.stack_capacity,
            queue_capacity: settings.queue_capacity,
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn linked_list(&self) -> ApplicationResult<LinkedListReport> {
        let mut list = LinkedList::new();
        list.insert_front(10);
        list.insert_front(20);
        list.insert_back(5);
        list.insert_back(15);
        let after_inserts = list.to_vec();

        let search_target = 5;
        let search_position = list.search(search_target);
        let middle = list.find_middle()?;

        list.reverse();
        let reversed = list.to_vec();
        let mut round_trip: LinkedList = reversed.iter().copied().collect();
        round_trip.reverse_recursive();
        let reversed_back = round_trip.to_vec();

        let deleted = 20;
        list.delete_value(deleted);
        let after_delete = list.to_vec();

        let mut chain: LinkedChain = after_inserts.iter().copied().collect();
        chain.link_tail_to(0)?;

        debug!(remaining = list.len(), "linked list demo done");
        Ok(LinkedListReport {
            after_inserts,
            search_target,
            search_position,
            middle,
            reversed,
            reversed_back,
            deleted,
            after_delete,
            has_cycle: list.detect_cycle(),
            rewired_has_cycle: chain.is_cyclic(),
        })
    }

    #[instrument(level = "debug", skip(self))]
    pub fn stack(&self) -> ApplicationResult<StackReport> {
        let mut stack = Stack::with_capacity(self.stack_capacity);
        for value in [10, 20, 30] {
            stack.push(value)?;
        }
        let after_pushes = stack.to_vec();
        let top = stack.peek()?;
        let popped = stack.pop()?;

        let bracket_checks = BRACKET_SAMPLES
            .iter()
            .map(|expr| (expr.to_string(), are_parentheses_balanced(expr)))
            .collect();

        Ok(StackReport {
            after_pushes,
            top,
            popped,
            after_pop: stack.to_vec(),
            bracket_checks,
        })
    }

    #[instrument(level = "debug", skip(self))]
    pub fn queue(&self) -> ApplicationResult<QueueReport> {
        let mut queue = Queue::with_capacity(self.queue_capacity);
        for value in [10, 20, 30, 40] {
            queue.enqueue(value)?;
        }
        let after_enqueues = queue.to_vec();
        let front = queue.front()?;
        let dequeued = vec![queue.dequeue()?, queue.dequeue()?];

        Ok(QueueReport {
            after_enqueues,
            front,
            dequeued,
            after_dequeues: queue.to_vec(),
        })
    }

    #[instrument(level = "debug", skip(self))]
    pub fn binary_tree(&self) -> TreeReport {
        let mut tree = sample_tree();
        let report = TreeReport {
            rendered: tree.render(),
            in_order: tree.in_order(),
            pre_order: tree.pre_order(),
            post_order: tree.post_order(),
            level_order: tree.level_order(),
            height: tree.height(),
            released: 0,
        };
        TreeReport {
            released: tree.clear(),
            ..report
        }
    }
}

/// The five-node demo tree:
///
/// ```text
///       1
///      / \
///     2   3
///    / \
///   4   5
/// ```
pub fn sample_tree() -> BinaryTree {
    TreeNode::new(1)
        .with_left(
            TreeNode::new(2)
                .with_left(TreeNode::new(4))
                .with_right(TreeNode::new(5)),
        )
        .with_right(TreeNode::new(3))
        .into()
}
