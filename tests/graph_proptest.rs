use std::collections::{HashMap, HashSet};

use petgraph::algo::dijkstra;
use petgraph::graphmap::UnGraphMap;
use proptest::prelude::*;
use rudiments::graph::{bfs_distances, bfs_layers};
use rudiments::{Graph, NodeId, VisitedSet};

const MAX_NODE: NodeId = 24;

fn arb_graph() -> impl Strategy<Value = (Graph, NodeId)> {
    (
        1..=MAX_NODE,
        proptest::collection::vec((0..MAX_NODE, 0..MAX_NODE), 0..60),
    )
        .prop_flat_map(|(n, raw_edges)| {
            let mut g = Graph::with_capacity(n as usize);
            for node in 0..n {
                g.add_node(node);
            }
            for (a, b) in raw_edges {
                g.add_edge(a % n, b % n).unwrap();
            }
            (Just(g), 0..n)
        })
}

fn oracle(g: &Graph) -> UnGraphMap<NodeId, ()> {
    let mut og = UnGraphMap::new();
    for &node in g.nodes() {
        og.add_node(node);
    }
    for &(a, b) in g.edges() {
        og.add_edge(a, b, ());
    }
    og
}

proptest! {
    #[test]
    fn test_edges_are_symmetric((g, _start) in arb_graph()) {
        for (node, nbrs) in &g {
            for &other in nbrs {
                prop_assert!(g.neighbors(other).unwrap().contains(&node));
            }
        }
        let entries: usize = g.iter().map(|(_, nbrs)| nbrs.len()).sum();
        prop_assert_eq!(entries, 2 * g.edge_count());
    }

    #[test]
    fn test_bfs_visits_reachable_nodes_once((g, start) in arb_graph()) {
        let order = g.bfs(start).unwrap();
        let unique: HashSet<_> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), order.len());
        prop_assert_eq!(order.first().copied(), Some(start));

        let expected: HashSet<NodeId> = dijkstra(&oracle(&g), start, None, |_| 1usize)
            .into_keys()
            .collect();
        prop_assert_eq!(unique, expected);
    }

    #[test]
    fn test_bfs_distances_match_oracle((g, start) in arb_graph()) {
        let distances = bfs_distances(&g, start).unwrap();
        prop_assert!(distances.windows(2).all(|w| w[0].1 <= w[1].1));

        let ours: HashMap<NodeId, usize> = distances.into_iter().collect();
        let theirs = dijkstra(&oracle(&g), start, None, |_| 1usize);
        prop_assert_eq!(ours, theirs);

        let layers = bfs_layers(&g, start).unwrap();
        let flattened: Vec<NodeId> = layers.into_iter().flatten().collect();
        prop_assert_eq!(flattened, g.bfs(start).unwrap());
    }

    #[test]
    fn test_dfs_variants_agree((g, start) in arb_graph()) {
        let recursive = g.dfs(start, &mut VisitedSet::new()).unwrap();
        let iterative = g.dfs_iterative(start, &mut VisitedSet::new()).unwrap();
        prop_assert_eq!(&recursive, &iterative);

        let as_set: HashSet<_> = recursive.iter().copied().collect();
        let bfs_set: HashSet<_> = g.bfs(start).unwrap().into_iter().collect();
        prop_assert_eq!(as_set, bfs_set);
    }

    #[test]
    fn test_dfs_respects_prefilled_visited((g, start) in arb_graph(), blocked in 0..MAX_NODE) {
        prop_assume!(blocked != start);
        let mut a: VisitedSet = [blocked].into_iter().collect();
        let mut b: VisitedSet = [blocked].into_iter().collect();
        let recursive = g.dfs(start, &mut a).unwrap();
        let iterative = g.dfs_iterative(start, &mut b).unwrap();
        prop_assert!(!recursive.contains(&blocked));
        prop_assert_eq!(recursive, iterative);
        prop_assert_eq!(a, b);
    }
}
