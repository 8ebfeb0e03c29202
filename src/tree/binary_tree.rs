//! Binary trees and their depth-first / breadth-first traversals.
//!
//! All traversals are iterative (explicit stack or queue), so a degenerate
//! tree shaped like a long chain cannot exhaust the call stack. Dropping is
//! iterative for the same reason.

use std::collections::VecDeque;

/// Owned link to a child subtree.
pub type Link<T> = Option<Box<TreeNode<T>>>;

/// A node with an optional left and right child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    /// Payload.
    pub value: T,
    /// Left subtree.
    pub left: Link<T>,
    /// Right subtree.
    pub right: Link<T>,
}

impl<T> TreeNode<T> {
    /// A node with both children.
    pub fn new(value: T, left: Option<TreeNode<T>>, right: Option<TreeNode<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// A node without children.
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// A binary tree with no ordering constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTree<T> {
    root: Link<T>,
}

impl<T> BinaryTree<T> {
    /// An empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// A tree rooted at `root`.
    pub fn from_root(root: TreeNode<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    pub(crate) fn root_link_mut(&mut self) -> &mut Link<T> {
        &mut self.root
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.pre_order().len()
    }

    /// Number of nodes on the longest root-to-leaf path (0 for an empty tree).
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&TreeNode<T>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }
        height
    }

    /// Left subtree, node, right subtree.
    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        let mut stack = Vec::new();
        let mut current = self.root();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            let Some(node) = stack.pop() else { break };
            out.push(&node.value);
            current = node.right.as_deref();
        }
        out
    }

    /// Node, left subtree, right subtree.
    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        let mut stack: Vec<&TreeNode<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(&node.value);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }

    /// Left subtree, right subtree, node.
    pub fn post_order(&self) -> Vec<&T> {
        // Reverse of a node-right-left pre-order.
        let mut out = Vec::new();
        let mut stack: Vec<&TreeNode<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(&node.value);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        out.reverse();
        out
    }

    /// Breadth-first, left to right within each level.
    pub fn level_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        let mut queue: VecDeque<&TreeNode<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            out.push(&node.value);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        out
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinaryTree<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //       5
    //     3   7
    //    2 4
    fn sample() -> BinaryTree<i32> {
        BinaryTree::from_root(TreeNode::new(
            5,
            Some(TreeNode::new(3, Some(TreeNode::leaf(2)), Some(TreeNode::leaf(4)))),
            Some(TreeNode::leaf(7)),
        ))
    }

    #[test]
    fn depth_first_orders() {
        let tree = sample();
        assert_eq!(tree.in_order(), vec![&2, &3, &4, &5, &7]);
        assert_eq!(tree.pre_order(), vec![&5, &3, &2, &4, &7]);
        assert_eq!(tree.post_order(), vec![&2, &4, &3, &7, &5]);
    }

    #[test]
    fn level_order_and_shape() {
        let tree = sample();
        assert_eq!(tree.level_order(), vec![&5, &3, &7, &2, &4]);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn empty_tree() {
        let tree: BinaryTree<u8> = BinaryTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert!(tree.in_order().is_empty());
        assert!(tree.post_order().is_empty());
    }
}
