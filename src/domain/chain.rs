use generational_arena::{Arena, Index};
use std::fmt;
use tracing::{debug, instrument};

use crate::domain::two_pointer;
use crate::domain::{DomainError, DomainResult};

/// Node stored in the chain's arena.
#[derive(Debug)]
struct ChainNode {
    value: i32,
    /// Index of the successor in the arena, None for the last node
    next: Option<Index>,
}

/// Arena-based singly linked chain.
///
/// Nodes refer to their successor by arena index instead of owning it, so the
/// tail can be rewired to an earlier node to build a cyclic list. Dropping the
/// chain drops the arena, which releases each node once regardless of cycles.
#[derive(Debug)]
pub struct LinkedChain {
    /// Arena storage for all chain nodes
    arena: Arena<ChainNode>,
    head: Option<Index>,
    tail: Option<Index>,
    /// Node the tail was rewired to, if any
    loop_entry: Option<Index>,
}

impl Default for LinkedChain {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkedChain {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            tail: None,
            loop_entry: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends a node after the current tail. A rewired tail keeps pointing at
    /// its loop entry from the new tail, so an existing cycle stays closed.
    #[instrument(level = "trace", skip(self))]
    pub fn push_back(&mut self, value: i32) -> Index {
        let idx = self.arena.insert(ChainNode {
            value,
            next: self.loop_entry,
        });

        match self.tail.and_then(|tail| self.arena.get_mut(tail)) {
            Some(tail) => tail.next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);

        idx
    }

    fn index_at(&self, position: usize) -> Option<Index> {
        let mut current = self.head;
        for _ in 0..position {
            current = current.and_then(|idx| self.successor(idx));
        }
        current
    }

    fn successor(&self, idx: Index) -> Option<Index> {
        self.arena.get(idx).and_then(|node| node.next)
    }

    /// Value at `position`, walking from the head.
    pub fn get(&self, position: usize) -> Option<i32> {
        if position >= self.len() {
            return None;
        }
        self.index_at(position)
            .and_then(|idx| self.arena.get(idx))
            .map(|node| node.value)
    }

    /// Points the tail's next link at the node at `position`, closing a cycle.
    #[instrument(level = "debug", skip(self))]
    pub fn link_tail_to(&mut self, position: usize) -> DomainResult<()> {
        let len = self.len();
        let target = (position < len)
            .then(|| self.index_at(position))
            .flatten()
            .ok_or(DomainError::PositionOutOfRange { position, len })?;

        if let Some(tail) = self.tail.and_then(|tail| self.arena.get_mut(tail)) {
            tail.next = Some(target);
        }
        self.loop_entry = Some(target);
        debug!(position, "tail rewired");
        Ok(())
    }

    /// Floyd's slow/fast cycle check.
    pub fn is_cyclic(&self) -> bool {
        two_pointer::has_cycle(self.head, |idx| self.successor(idx))
    }

    /// Middle value of an acyclic chain; the upper middle for even lengths.
    pub fn find_middle(&self) -> DomainResult<i32> {
        if self.is_cyclic() {
            return Err(DomainError::CycleDetected);
        }
        two_pointer::middle(self.head, |idx| self.successor(idx))
            .and_then(|idx| self.arena.get(idx))
            .map(|node| node.value)
            .ok_or(DomainError::EmptyList)
    }

    /// Values in link order, each node visited at most once.
    pub fn values(&self) -> Vec<i32> {
        let mut values = Vec::with_capacity(self.len());
        let mut current = self.head;
        while let Some(node) = current.and_then(|idx| self.arena.get(idx)) {
            if values.len() == self.len() {
                break;
            }
            values.push(node.value);
            current = node.next;
        }
        values
    }
}

impl FromIterator<i32> for LinkedChain {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut chain = LinkedChain::new();
        for value in iter {
            chain.push_back(value);
        }
        chain
    }
}

impl fmt::Display for LinkedChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.values() {
            write!(f, "{} -> ", value)?;
        }
        match self.loop_entry.and_then(|idx| self.arena.get(idx)) {
            Some(entry) => write!(f, "({})", entry.value),
            None => write!(f, "NULL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_values_when_collected_then_chain_keeps_order() {
        let chain: LinkedChain = [1, 2, 3].into_iter().collect();
        assert_eq!(chain.values(), vec![1, 2, 3]);
        assert_eq!(chain.get(1), Some(2));
        assert_eq!(chain.get(3), None);
        assert_eq!(chain.to_string(), "1 -> 2 -> 3 -> NULL");
    }

    #[test]
    fn given_rewired_tail_when_checking_then_cycle_detected() {
        let mut chain: LinkedChain = [1, 2, 3, 4].into_iter().collect();
        assert!(!chain.is_cyclic());

        chain.link_tail_to(1).unwrap();

        assert!(chain.is_cyclic());
        assert_eq!(chain.values(), vec![1, 2, 3, 4]);
        assert_eq!(chain.to_string(), "1 -> 2 -> 3 -> 4 -> (2)");
    }

    #[test]
    fn given_single_node_linked_to_itself_when_checking_then_cycle_detected() {
        let mut chain: LinkedChain = [7].into_iter().collect();
        chain.link_tail_to(0).unwrap();
        assert!(chain.is_cyclic());
    }

    #[test]
    fn given_cycle_when_pushing_back_then_cycle_stays_closed() {
        let mut chain: LinkedChain = [1, 2].into_iter().collect();
        chain.link_tail_to(0).unwrap();
        chain.push_back(3);
        assert!(chain.is_cyclic());
        assert_eq!(chain.values(), vec![1, 2, 3]);
    }

    #[test]
    fn given_out_of_range_position_when_rewiring_then_fails() {
        let mut chain: LinkedChain = [1, 2].into_iter().collect();
        assert_eq!(
            chain.link_tail_to(2),
            Err(DomainError::PositionOutOfRange { position: 2, len: 2 })
        );
        assert!(!chain.is_cyclic());
    }

    #[test]
    fn given_chain_when_finding_middle_then_respects_cycles() {
        let mut chain: LinkedChain = [1, 2, 3, 4].into_iter().collect();
        assert_eq!(chain.find_middle(), Ok(3));
        chain.link_tail_to(0).unwrap();
        assert_eq!(chain.find_middle(), Err(DomainError::CycleDetected));
        assert_eq!(LinkedChain::new().find_middle(), Err(DomainError::EmptyList));
    }
}
