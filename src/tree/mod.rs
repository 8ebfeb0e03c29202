//! Binary trees.

pub mod binary_tree;
pub mod bst;

pub use binary_tree::{BinaryTree, TreeNode};
pub use bst::BinarySearchTree;
