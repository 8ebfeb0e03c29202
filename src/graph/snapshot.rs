//! Serde representation of a [`Graph`].
//!
//! A graph serializes as its node list plus its edge log, both in insertion
//! order. Deserializing replays `add_node` and `add_edge`, so neighbor order
//! round-trips exactly and edges naming unknown nodes are rejected.

use serde::{Deserialize, Serialize};

use super::{Graph, NodeId};
use crate::error::Error;

/// Wire form of a [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Node identifiers in insertion order.
    pub nodes: Vec<NodeId>,
    /// Undirected edges in insertion order.
    #[serde(default)]
    pub edges: Vec<(NodeId, NodeId)>,
}

impl From<Graph> for GraphSnapshot {
    fn from(graph: Graph) -> Self {
        Self {
            nodes: graph.nodes().to_vec(),
            edges: graph.edges().to_vec(),
        }
    }
}

impl TryFrom<GraphSnapshot> for Graph {
    type Error = Error;

    fn try_from(snapshot: GraphSnapshot) -> Result<Self, Self::Error> {
        let mut graph = Graph::with_capacity(snapshot.nodes.len());
        for node in snapshot.nodes {
            graph.add_node(node);
        }
        for (a, b) in snapshot.edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_restores_neighbor_order() {
        let mut g = Graph::new();
        for n in [3, 1, 2] {
            g.add_node(n);
        }
        g.add_edge(1, 3).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(3, 3).unwrap();

        let restored = Graph::try_from(GraphSnapshot::from(g.clone())).unwrap();
        assert_eq!(restored, g);
        assert_eq!(restored.neighbors(1).unwrap(), &[3, 2]);
    }

    #[test]
    fn dangling_edge_is_rejected() {
        let snapshot = GraphSnapshot {
            nodes: vec![1],
            edges: vec![(1, 2)],
        };
        assert_eq!(Graph::try_from(snapshot), Err(Error::UnknownNode(2)));
    }
}
