//! `BinarySearchTree`: an unbalanced binary search tree.
//!
//! Smaller values go left; equal-or-greater values go right, so duplicates
//! are kept and an in-order walk yields a sorted sequence.

use core::cmp::Ordering;

use super::binary_tree::{BinaryTree, TreeNode};

/// An unbalanced binary search tree.
#[derive(Debug, Clone)]
pub struct BinarySearchTree<T> {
    tree: BinaryTree<T>,
    len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            tree: BinaryTree::new(),
            len: 0,
        }
    }

    /// Inserts `value`, walking down iteratively.
    pub fn insert(&mut self, value: T) {
        let mut link = self.tree.root_link_mut();
        while let Some(node) = link {
            link = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(TreeNode::leaf(value)));
        self.len += 1;
    }

    /// Returns `true` if a node equal to `value` exists.
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.tree.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return true,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Smallest value.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.tree.root()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Largest value.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.tree.root()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }
}

impl<T> BinarySearchTree<T> {
    /// Number of values stored, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Values in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        self.tree.in_order()
    }

    /// Values in pre-order.
    pub fn pre_order(&self) -> Vec<&T> {
        self.tree.pre_order()
    }

    /// Values in post-order.
    pub fn post_order(&self) -> Vec<&T> {
        self.tree.post_order()
    }

    /// Values level by level.
    pub fn level_order(&self) -> Vec<&T> {
        self.tree.level_order()
    }

    /// The underlying binary tree.
    pub fn as_tree(&self) -> &BinaryTree<T> {
        &self.tree
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
