/*
Binary tree with exclusively owned children.

Each node owns its left and right subtrees through Option<Box<TreeNode>>.
The depth-first traversals recurse (O(h) call depth). Height and level order
walk with an explicit stack / queue instead:

Stack walk (height):
    push (node, depth) pairs, pop one, record the depth, push its children.

Queue walk (level order):
    push_back the root, pop_front a node, visit it, push_back its children.

Teardown releases children before their parent (post-order), one node at a time.
 */
use std::collections::VecDeque;

use termtree::Tree;
use tracing::{instrument, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub value: i32,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, left: TreeNode) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    pub fn with_right(mut self, right: TreeNode) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    fn children(&self) -> impl Iterator<Item = &TreeNode> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BinaryTree {
    root: Option<Box<TreeNode>>,
}

impl From<TreeNode> for BinaryTree {
    fn from(root: TreeNode) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }
}

impl BinaryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Left subtree, node, right subtree.
    pub fn in_order(&self) -> Vec<i32> {
        fn visit(node: Option<&TreeNode>, out: &mut Vec<i32>) {
            if let Some(node) = node {
                visit(node.left.as_deref(), out);
                out.push(node.value);
                visit(node.right.as_deref(), out);
            }
        }
        let mut out = Vec::new();
        visit(self.root(), &mut out);
        out
    }

    /// Node, left subtree, right subtree.
    pub fn pre_order(&self) -> Vec<i32> {
        fn visit(node: Option<&TreeNode>, out: &mut Vec<i32>) {
            if let Some(node) = node {
                out.push(node.value);
                visit(node.left.as_deref(), out);
                visit(node.right.as_deref(), out);
            }
        }
        let mut out = Vec::new();
        visit(self.root(), &mut out);
        out
    }

    /// Left subtree, right subtree, node.
    pub fn post_order(&self) -> Vec<i32> {
        fn visit(node: Option<&TreeNode>, out: &mut Vec<i32>) {
            if let Some(node) = node {
                visit(node.left.as_deref(), out);
                visit(node.right.as_deref(), out);
                out.push(node.value);
            }
        }
        let mut out = Vec::new();
        visit(self.root(), &mut out);
        out
    }

    /// Breadth-first, left to right within each level.
    pub fn level_order(&self) -> Vec<i32> {
        let mut out = Vec::new();
        let mut queue = VecDeque::new();
        queue.extend(self.root());

        while let Some(node) = queue.pop_front() {
            out.push(node.value);
            queue.extend(node.children());
        }

        out
    }

    /// Number of levels; 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(&TreeNode, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for child in node.children() {
                stack.push((child, depth + 1));
            }
        }

        max_depth
    }

    pub fn len(&self) -> usize {
        self.pre_order().len()
    }

    /// Text rendering, one node per line.
    pub fn render(&self) -> String {
        fn to_tree(node: &TreeNode) -> Tree<String> {
            let leaves: Vec<_> = node.children().map(to_tree).collect();
            Tree::new(node.value.to_string()).with_leaves(leaves)
        }
        match self.root() {
            Some(root) => to_tree(root).to_string(),
            None => "(empty)\n".to_string(),
        }
    }

    /// Releases every node exactly once, children before parent.
    /// Returns how many nodes were released.
    pub fn clear(&mut self) -> usize {
        fn release(mut node: Box<TreeNode>) -> usize {
            let mut released = 0;
            if let Some(left) = node.left.take() {
                released += release(left);
            }
            if let Some(right) = node.right.take() {
                released += release(right);
            }
            trace!(value = node.value, "releasing tree node");
            drop(node);
            released + 1
        }
        self.root.take().map_or(0, release)
    }
}

impl Drop for BinaryTree {
    fn drop(&mut self) {
        self.clear();
    }
}
