//! Singly linked list with exclusively owned nodes.
//!
//! Each node owns its successor through `Option<Box<Node>>`; the list owns the
//! head. Nodes are released head to tail, iteratively, so dropping a long list
//! never recurses.

use std::fmt;
use std::ptr;

use tracing::{instrument, trace};

use crate::domain::two_pointer;
use crate::domain::{DomainError, DomainResult};

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    value: i32,
    next: Link,
}

impl Node {
    fn new(value: i32, next: Link) -> Box<Self> {
        Box::new(Self { value, next })
    }
}

/// Borrowed node handle compared by address, so the cursor walks detect
/// revisits rather than equal values.
#[derive(Clone, Copy)]
struct NodeRef<'a>(&'a Node);

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.0, other.0)
    }
}

impl<'a> NodeRef<'a> {
    fn next(self) -> Option<NodeRef<'a>> {
        self.0.next.as_deref().map(NodeRef)
    }
}

#[derive(Debug, Default)]
pub struct LinkedList {
    head: Link,
    len: usize,
}

impl LinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn insert_front(&mut self, value: i32) {
        let old = self.head.take();
        self.head = Some(Node::new(value, old));
        self.len += 1;
    }

    pub fn insert_back(&mut self, value: i32) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Node::new(value, None));
        self.len += 1;
    }

    /// Link holding the first node with `value`, or the trailing empty link.
    fn link_of(&mut self, value: i32) -> &mut Link {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.value != value) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }
        cursor
    }

    /// Removes the first node holding `value`. Returns whether one was found.
    pub fn delete_value(&mut self, value: i32) -> bool {
        let link = self.link_of(value);
        match link.take() {
            Some(removed) => {
                *link = removed.next;
                self.len -= 1;
                trace!(value, "deleted node");
                true
            }
            None => false,
        }
    }

    /// Zero-based position of the first node holding `value`.
    pub fn search(&self, value: i32) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Reverses the chain in place by relinking every node to its predecessor.
    pub fn reverse(&mut self) {
        let mut prev: Link = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    /// Same result as [`reverse`](Self::reverse), one call frame per node.
    pub fn reverse_recursive(&mut self) {
        fn relink(current: Link, prev: Link) -> Link {
            match current {
                None => prev,
                Some(mut node) => {
                    let next = node.next.take();
                    node.next = prev;
                    relink(next, Some(node))
                }
            }
        }
        let head = self.head.take();
        self.head = relink(head, None);
    }

    fn head_ref(&self) -> Option<NodeRef<'_>> {
        self.head.as_deref().map(NodeRef)
    }

    /// Floyd's slow/fast check. Owned links cannot form a cycle, so this is
    /// false for every `LinkedList`; see `LinkedChain` for the cyclic case.
    pub fn detect_cycle(&self) -> bool {
        two_pointer::has_cycle(self.head_ref(), NodeRef::next)
    }

    /// Middle value; the upper middle for even lengths.
    #[instrument(level = "trace", skip(self), fields(len = self.len))]
    pub fn find_middle(&self) -> DomainResult<i32> {
        two_pointer::middle(self.head_ref(), NodeRef::next)
            .map(|node| node.0.value)
            .ok_or(DomainError::EmptyList)
    }

    /// Releases every node, head to tail. Returns how many were released.
    pub fn clear(&mut self) -> usize {
        let mut released = 0;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            released += 1;
        }
        self.len = 0;
        released
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        self.clear();
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value
        })
    }
}

impl FromIterator<i32> for LinkedList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl Extend<i32> for LinkedList {
    /// Appends in order. Walks to the tail once, not once per value.
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        for value in iter {
            let node = cursor.insert(Node::new(value, None));
            cursor = &mut node.next;
            self.len += 1;
        }
    }
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "empty");
        }
        for value in self.iter() {
            write!(f, "{} -> ", value)?;
        }
        write!(f, "NULL")
    }
}
