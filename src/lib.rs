//! # `rudiments` - Textbook Data Structures and Algorithms
//!
//! Small, dependable implementations of the structures and algorithms every
//! program ends up needing: graphs and their traversals, stacks and queues,
//! linked lists, binary trees, searching and sorting.
//!
//! ## Key Features
//!
//! - **Graphs**: an insertion-ordered adjacency-list [`Graph`] and a dense
//!   [`AdjacencyMatrix`], both traversable through the [`Adjacency`] trait
//! - **Traversals**: BFS, recursive DFS with a caller-owned [`VisitedSet`],
//!   and a stack-driven DFS that emits the same order without recursion
//! - **No sentinels**: lookups return `Option`, fallible operations return
//!   [`Result`] with a descriptive [`Error`]
//! - **Optional extras**: `tracing` instrumentation and `rayon`-backed
//!   parallel BFS behind the `tracing` and `parallel` features
//!
//! ## Layout
//!
//! - [`graph`]: adjacency list, adjacency matrix, traversals, snapshots
//! - [`collections`]: stack, queue, singly/doubly/circular linked lists
//! - [`tree`]: binary trees and binary search trees
//! - [`search`], [`sort`]: slice searching and in-place sorting
//! - [`arrays`], [`strings`]: scans, windows, matrices and char-aware slicing
//! - [`recursion`]: factorial, Fibonacci, N-Queens
//! - [`modeling`]: trait objects, encapsulation and composition
//!
//! ## Example
//!
//! ```rust
//! use rudiments::{Graph, VisitedSet};
//!
//! let mut g = Graph::new();
//! for n in [1, 2, 3] {
//!     g.add_node(n);
//! }
//! g.add_edge(1, 2)?;
//! g.add_edge(1, 3)?;
//! g.add_edge(2, 3)?;
//!
//! assert_eq!(g.bfs(1)?, vec![1, 2, 3]);
//!
//! let mut visited = VisitedSet::new();
//! assert_eq!(g.dfs(1, &mut visited)?, vec![1, 2, 3]);
//! assert!(g.add_edge(1, 99).is_err());
//! # Ok::<(), rudiments::Error>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod arrays;
pub mod collections;
pub mod error;
pub mod graph;
pub mod modeling;
pub mod recursion;
pub mod search;
pub mod sort;
pub mod strings;
pub mod tree;

pub use collections::{CircularLinkedList, DoublyLinkedList, Queue, SinglyLinkedList, Stack};
pub use error::{Error, Result};
pub use graph::{Adjacency, AdjacencyMatrix, Graph, GraphSnapshot, NodeId, VisitedSet};
pub use tree::{BinarySearchTree, BinaryTree, TreeNode};
