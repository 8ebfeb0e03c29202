//! Undirected graphs and their traversals.
//!
//! - `adjacency_list`: the insertion-ordered [`Graph`]
//! - `adjacency_matrix`: the dense [`AdjacencyMatrix`]
//! - `traversal`: BFS/DFS over anything implementing [`Adjacency`]
//! - `parallel`: layer-parallel BFS behind the `parallel` feature

pub mod adjacency_list;
pub mod adjacency_matrix;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod snapshot;
pub mod traversal;
mod visited;

/// Integer key naming a vertex within one graph.
pub type NodeId = i64;

pub use adjacency_list::Graph;
pub use adjacency_matrix::AdjacencyMatrix;
#[cfg(feature = "parallel")]
pub use parallel::par_bfs;
pub use snapshot::GraphSnapshot;
pub use traversal::{bfs, bfs_distances, bfs_layers, dfs, dfs_iterative, Adjacency, Bfs, Dfs};
pub use visited::VisitedSet;
