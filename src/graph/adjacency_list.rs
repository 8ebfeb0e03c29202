//! An undirected adjacency-list graph keyed by integer node identifiers.
//!
//! Nodes are kept in insertion order so that iteration, `Display` output and
//! traversal tie-breaking are deterministic. Every edge is stored twice (once
//! per endpoint), which keeps the symmetry invariant trivially true:
//! if `b` is in `neighbors(a)` then `a` is in `neighbors(b)`.

use core::fmt;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::snapshot::GraphSnapshot;
use super::traversal::{self, Adjacency};
use super::{NodeId, VisitedSet};
use crate::error::{Error, Result};

/// An undirected graph stored as adjacency lists.
///
/// Duplicate edges are kept (no dedup) and self-loops are allowed when added
/// explicitly. Edges may only reference nodes that were added first.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_node` | \(O(1)\) amortized | Hash lookup plus a push |
/// | `add_edge` | \(O(1)\) amortized | Two appends, no duplicate check |
/// | `neighbors` | \(O(1)\) | Returns the stored slice |
/// | `degree` | \(O(1)\) | Slice length |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GraphSnapshot", try_from = "GraphSnapshot")]
pub struct Graph {
    index: HashMap<NodeId, usize>,
    nodes: Vec<NodeId>,
    adjacency: Vec<Vec<NodeId>>,
    edges: Vec<(NodeId, NodeId)>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            index: HashMap::with_capacity(nodes),
            nodes: Vec::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            edges: Vec::new(),
        }
    }

    /// Builds a graph from an edge list, adding each endpoint the first time
    /// it appears.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_node(a);
            graph.add_node(b);
            graph.push_edge(a, b);
        }
        graph
    }

    /// Adds `node` with no neighbors.
    ///
    /// Idempotent: adding a node that already exists leaves its neighbor list
    /// untouched. Returns `true` if the node was new.
    pub fn add_node(&mut self, node: NodeId) -> bool {
        if self.index.contains_key(&node) {
            return false;
        }
        self.index.insert(node, self.nodes.len());
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        true
    }

    /// Adds the undirected edge `a - b`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownNode`] if either endpoint was never added. The
    /// graph is left unchanged in that case.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        self.slot(a)?;
        self.slot(b)?;
        self.push_edge(a, b);
        Ok(())
    }

    // Both endpoints must already be indexed.
    fn push_edge(&mut self, a: NodeId, b: NodeId) {
        let ia = self.index[&a];
        let ib = self.index[&b];
        self.adjacency[ia].push(b);
        self.adjacency[ib].push(a);
        self.edges.push((a, b));
        trace_event!(from = a, to = b, "edge added");
    }

    fn slot(&self, node: NodeId) -> Result<usize> {
        self.index.get(&node).copied().ok_or_else(|| {
            debug_event!(node = node, "lookup of unknown node");
            Error::UnknownNode(node)
        })
    }

    /// Returns the neighbors of `node` in the order their edges were added.
    ///
    /// # Errors
    /// Returns [`Error::UnknownNode`] if `node` was never added.
    pub fn neighbors(&self, node: NodeId) -> Result<&[NodeId]> {
        let idx = self.slot(node)?;
        Ok(&self.adjacency[idx])
    }

    /// Returns the number of neighbor entries of `node` (a self-loop counts
    /// twice).
    ///
    /// # Errors
    /// Returns [`Error::UnknownNode`] if `node` was never added.
    pub fn degree(&self, node: NodeId) -> Result<usize> {
        self.neighbors(node).map(<[NodeId]>::len)
    }

    /// Returns `true` if `node` has been added.
    pub fn contains(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    /// Returns `true` if `b` appears among the neighbors of `a`.
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbors(a).is_ok_and(|nbrs| nbrs.contains(&b))
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges added, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node identifiers in insertion order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Edges in the order they were added, each reported once.
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    /// Lazily yields `(node, neighbors)` pairs in node insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: self.nodes.iter(),
            adjacency: self.adjacency.iter(),
        }
    }

    /// Breadth-first visit order from `start`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownNode`] if `start` was never added.
    pub fn bfs(&self, start: NodeId) -> Result<Vec<NodeId>> {
        traversal::bfs(self, start)
    }

    /// Recursive depth-first pre-order from `start`, skipping (and marking)
    /// nodes in the caller's `visited` set.
    ///
    /// # Errors
    /// Returns [`Error::UnknownNode`] if `start` was never added.
    pub fn dfs(&self, start: NodeId, visited: &mut VisitedSet) -> Result<Vec<NodeId>> {
        traversal::dfs(self, start, visited)
    }

    /// Same output as [`Graph::dfs`], driven by an explicit stack.
    ///
    /// # Errors
    /// Returns [`Error::UnknownNode`] if `start` was never added.
    pub fn dfs_iterative(&self, start: NodeId, visited: &mut VisitedSet) -> Result<Vec<NodeId>> {
        traversal::dfs_iterative(self, start, visited)
    }
}

impl Adjacency for Graph {
    type Neighbors<'a> = core::iter::Copied<core::slice::Iter<'a, NodeId>>;

    fn contains(&self, node: NodeId) -> bool {
        Graph::contains(self, node)
    }

    fn neighbor_ids(&self, node: NodeId) -> Option<Self::Neighbors<'_>> {
        let idx = *self.index.get(&node)?;
        Some(self.adjacency[idx].iter().copied())
    }

    fn node_count_hint(&self) -> usize {
        self.node_count()
    }
}

/// Iterator over `(node, neighbors)` pairs, see [`Graph::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    nodes: core::slice::Iter<'a, NodeId>,
    adjacency: core::slice::Iter<'a, Vec<NodeId>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (NodeId, &'a [NodeId]);

    fn next(&mut self) -> Option<Self::Item> {
        let node = *self.nodes.next()?;
        let nbrs = self.adjacency.next()?;
        Some((node, nbrs.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Graph {
    type Item = (NodeId, &'a [NodeId]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, nbrs) in self {
            writeln!(f, "{node} -> {nbrs:?}")?;
        }
        Ok(())
    }
}
