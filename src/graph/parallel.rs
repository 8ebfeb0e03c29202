//! Layer-parallel BFS (requires the `parallel` feature).
//!
//! Each frontier's neighbor lists are read in parallel, then merged on the
//! calling thread in frontier order. Only the merge touches the visited set,
//! so the emitted order is exactly that of [`bfs`](super::traversal::bfs).

use rayon::prelude::*;

use super::traversal::{ensure_known, Adjacency};
use super::{NodeId, VisitedSet};
use crate::error::Result;

/// Breadth-first visit order from `start`, expanding frontiers in parallel.
///
/// # Errors
/// Returns [`Error::UnknownNode`](crate::Error::UnknownNode) if `start` is not in the graph.
pub fn par_bfs<G>(graph: &G, start: NodeId) -> Result<Vec<NodeId>>
where
    G: Adjacency + Sync + ?Sized,
{
    ensure_known(graph, start)?;

    let mut visited = VisitedSet::with_capacity(graph.node_count_hint());
    visited.try_visit(start);
    let mut order = vec![start];
    let mut frontier = vec![start];

    while !frontier.is_empty() {
        let expanded: Vec<Vec<NodeId>> = frontier
            .par_iter()
            .map(|&u| {
                graph
                    .neighbor_ids(u)
                    .map(|nbrs| nbrs.collect())
                    .unwrap_or_default()
            })
            .collect();

        let mut next = Vec::new();
        for v in expanded.into_iter().flatten() {
            if visited.try_visit(v) {
                next.push(v);
            }
        }
        order.extend_from_slice(&next);
        frontier = next;
    }

    trace_event!(start = start, visited = order.len(), "parallel bfs finished");
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::graph::{traversal, AdjacencyMatrix, Graph};

    #[test]
    fn matches_sequential_bfs() {
        let g = Graph::from_edges([(1, 2), (1, 3), (2, 4), (3, 4), (4, 5), (2, 6), (6, 5)]);
        for &start in g.nodes() {
            assert_eq!(par_bfs(&g, start).unwrap(), traversal::bfs(&g, start).unwrap());
        }
        assert_eq!(par_bfs(&g, 99), Err(Error::UnknownNode(99)));
    }

    #[test]
    fn unknown_start_on_a_matrix() {
        let m = AdjacencyMatrix::new(2).unwrap();
        assert_eq!(par_bfs(&m, 2), Err(Error::UnknownNode(2)));
        assert_eq!(par_bfs(&m, -1), Err(Error::UnknownNode(-1)));
        assert_eq!(par_bfs(&m, 1).unwrap(), vec![1]);
    }
}
