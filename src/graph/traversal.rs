//! Breadth-first and depth-first traversals.
//!
//! Traversals are written against the [`Adjacency`] trait so they run on
//! both the adjacency-list [`Graph`](super::Graph) and the dense
//! [`AdjacencyMatrix`](super::AdjacencyMatrix). Every entry point checks the
//! start node first and fails with [`Error::UnknownNode`] before emitting
//! anything.

use std::collections::VecDeque;

use super::{NodeId, VisitedSet};
use crate::error::{Error, Result};

/// Read access to a graph's neighbor lists.
pub trait Adjacency {
    /// Iterator over the neighbors of one node, in stored order.
    type Neighbors<'a>: Iterator<Item = NodeId> + 'a
    where
        Self: 'a;

    /// Returns `true` if `node` belongs to the graph.
    fn contains(&self, node: NodeId) -> bool;

    /// Neighbors of `node`, or `None` if the node is unknown.
    fn neighbor_ids(&self, node: NodeId) -> Option<Self::Neighbors<'_>>;

    /// Expected number of nodes, used to presize scratch buffers.
    fn node_count_hint(&self) -> usize {
        0
    }
}

pub(super) fn ensure_known<G: Adjacency + ?Sized>(graph: &G, start: NodeId) -> Result<()> {
    if graph.contains(start) {
        Ok(())
    } else {
        debug_event!(start = start, "traversal from unknown node");
        Err(Error::UnknownNode(start))
    }
}

/// An iterator for Breadth-First Search (BFS).
///
/// Yields node ids in BFS order. Nodes are marked visited when enqueued, so
/// each node is queued at most once.
pub struct Bfs<'g, G: ?Sized> {
    graph: &'g G,
    visited: VisitedSet,
    queue: VecDeque<NodeId>,
}

impl<'g, G: Adjacency + ?Sized> Bfs<'g, G> {
    /// Creates a new BFS iterator starting from `start`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownNode`] if `start` is not in the graph.
    pub fn new(graph: &'g G, start: NodeId) -> Result<Self> {
        ensure_known(graph, start)?;
        let mut visited = VisitedSet::with_capacity(graph.node_count_hint());
        visited.try_visit(start);
        let mut queue = VecDeque::new();
        queue.push_back(start);
        Ok(Self {
            graph,
            visited,
            queue,
        })
    }

    /// Nodes discovered so far (emitted or still queued).
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }
}

impl<G: Adjacency + ?Sized> Iterator for Bfs<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        if let Some(neighbors) = self.graph.neighbor_ids(u) {
            for v in neighbors {
                if self.visited.try_visit(v) {
                    self.queue.push_back(v);
                }
            }
        }
        Some(u)
    }
}

/// An iterator for Depth-First Search (DFS) in pre-order.
///
/// Driven by an explicit stack: neighbors are pushed in reverse so the first
/// stored neighbor is explored first, and the visited check happens on pop.
/// The output matches the recursive [`dfs`] exactly.
pub struct Dfs<'g, G: ?Sized> {
    graph: &'g G,
    visited: VisitedSet,
    stack: Vec<NodeId>,
    scratch: Vec<NodeId>,
}

impl<'g, G: Adjacency + ?Sized> Dfs<'g, G> {
    /// Creates a new DFS iterator starting from `start` with a fresh visited
    /// set.
    ///
    /// # Errors
    /// Returns [`Error::UnknownNode`] if `start` is not in the graph.
    pub fn new(graph: &'g G, start: NodeId) -> Result<Self> {
        Self::with_visited(graph, start, VisitedSet::new())
    }

    /// Creates a DFS iterator that skips everything already in `visited`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownNode`] if `start` is not in the graph.
    pub fn with_visited(graph: &'g G, start: NodeId, visited: VisitedSet) -> Result<Self> {
        ensure_known(graph, start)?;
        Ok(Self {
            graph,
            visited,
            stack: vec![start],
            scratch: Vec::new(),
        })
    }

    /// Consumes the iterator and hands back its visited set.
    pub fn into_visited(self) -> VisitedSet {
        self.visited
    }
}

impl<G: Adjacency + ?Sized> Iterator for Dfs<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(u) = self.stack.pop() {
            if !self.visited.try_visit(u) {
                continue;
            }
            if let Some(neighbors) = self.graph.neighbor_ids(u) {
                self.scratch.clear();
                self.scratch.extend(neighbors);
                self.stack.extend(
                    self.scratch
                        .iter()
                        .rev()
                        .copied()
                        .filter(|&v| !self.visited.is_visited(v)),
                );
            }
            return Some(u);
        }
        None
    }
}

/// Breadth-first visit order from `start`.
///
/// # Errors
/// Returns [`Error::UnknownNode`] if `start` is not in the graph.
pub fn bfs<G: Adjacency + ?Sized>(graph: &G, start: NodeId) -> Result<Vec<NodeId>> {
    let order: Vec<_> = Bfs::new(graph, start)?.collect();
    trace_event!(start = start, visited = order.len(), "bfs finished");
    Ok(order)
}

/// Breadth-first order grouped by distance from `start`: `layers[d]` holds
/// the nodes at edge-count distance `d`, in the order BFS emits them.
///
/// # Errors
/// Returns [`Error::UnknownNode`] if `start` is not in the graph.
pub fn bfs_layers<G: Adjacency + ?Sized>(graph: &G, start: NodeId) -> Result<Vec<Vec<NodeId>>> {
    ensure_known(graph, start)?;
    let mut visited = VisitedSet::with_capacity(graph.node_count_hint());
    visited.try_visit(start);

    let mut layers = vec![vec![start]];
    loop {
        let mut next = Vec::new();
        for &u in layers.last().map(Vec::as_slice).unwrap_or_default() {
            if let Some(neighbors) = graph.neighbor_ids(u) {
                next.extend(neighbors.filter(|&v| visited.try_visit(v)));
            }
        }
        if next.is_empty() {
            break;
        }
        layers.push(next);
    }
    Ok(layers)
}

/// `(node, distance)` pairs in BFS order.
///
/// # Errors
/// Returns [`Error::UnknownNode`] if `start` is not in the graph.
pub fn bfs_distances<G: Adjacency + ?Sized>(
    graph: &G,
    start: NodeId,
) -> Result<Vec<(NodeId, usize)>> {
    let layers = bfs_layers(graph, start)?;
    Ok(layers
        .into_iter()
        .enumerate()
        .flat_map(|(d, layer)| layer.into_iter().map(move |n| (n, d)))
        .collect())
}

/// Recursive depth-first pre-order from `start`.
///
/// `visited` belongs to the caller and is updated in place: nodes already in
/// it are neither emitted nor descended into, and every emitted node is added
/// to it. Pass a fresh set for an independent traversal.
///
/// Recursion depth grows with the longest simple path from `start`; use
/// [`dfs_iterative`] for very deep graphs.
///
/// # Errors
/// Returns [`Error::UnknownNode`] if `start` is not in the graph; `visited`
/// is left untouched.
pub fn dfs<G: Adjacency + ?Sized>(
    graph: &G,
    start: NodeId,
    visited: &mut VisitedSet,
) -> Result<Vec<NodeId>> {
    ensure_known(graph, start)?;
    let mut order = Vec::new();
    visit(graph, start, visited, &mut order);
    trace_event!(start = start, visited = order.len(), "dfs finished");
    Ok(order)
}

fn visit<G: Adjacency + ?Sized>(
    graph: &G,
    node: NodeId,
    visited: &mut VisitedSet,
    order: &mut Vec<NodeId>,
) {
    if !visited.try_visit(node) {
        return;
    }
    order.push(node);
    if let Some(neighbors) = graph.neighbor_ids(node) {
        for next in neighbors {
            visit(graph, next, visited, order);
        }
    }
}

/// Depth-first pre-order from `start` using an explicit stack.
///
/// Produces exactly the sequence [`dfs`] would, with the same treatment of
/// the caller's `visited` set, but without growing the call stack.
///
/// # Errors
/// Returns [`Error::UnknownNode`] if `start` is not in the graph; `visited`
/// is left untouched.
pub fn dfs_iterative<G: Adjacency + ?Sized>(
    graph: &G,
    start: NodeId,
    visited: &mut VisitedSet,
) -> Result<Vec<NodeId>> {
    ensure_known(graph, start)?;
    let mut walk = Dfs::with_visited(graph, start, core::mem::take(visited))?;
    let order: Vec<_> = walk.by_ref().collect();
    *visited = walk.into_visited();
    trace_event!(start = start, visited = order.len(), "iterative dfs finished");
    Ok(order)
}
