use rudiments::graph::{self, bfs_distances, bfs_layers, Bfs, Dfs};
use rudiments::{AdjacencyMatrix, Error, Graph, GraphSnapshot, VisitedSet};

fn triangle() -> Graph {
    let mut g = Graph::new();
    for n in [1, 2, 3] {
        g.add_node(n);
    }
    g.add_edge(1, 2).unwrap();
    g.add_edge(1, 3).unwrap();
    g.add_edge(2, 3).unwrap();
    g
}

// 1 - 2 - 4
// |   |
// 3   5 - 6
fn branching() -> Graph {
    Graph::from_edges([(1, 2), (1, 3), (2, 4), (2, 5), (5, 6)])
}

#[test]
fn test_triangle_traversals() {
    let g = triangle();
    assert_eq!(g.bfs(1).unwrap(), vec![1, 2, 3]);
    assert_eq!(g.dfs(1, &mut VisitedSet::new()).unwrap(), vec![1, 2, 3]);
    assert_eq!(g.dfs_iterative(1, &mut VisitedSet::new()).unwrap(), vec![1, 2, 3]);
    assert_eq!(g.to_string(), "1 -> [2, 3]\n2 -> [1, 3]\n3 -> [1, 2]\n");
}

#[test]
fn test_bfs_and_dfs_differ_on_branching_graph() {
    let g = branching();
    assert_eq!(g.bfs(1).unwrap(), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(g.dfs(1, &mut VisitedSet::new()).unwrap(), vec![1, 2, 4, 5, 6, 3]);
    assert_eq!(bfs_layers(&g, 1).unwrap(), vec![vec![1], vec![2, 3], vec![4, 5], vec![6]]);
    assert_eq!(
        bfs_distances(&g, 3).unwrap(),
        vec![(3, 0), (1, 1), (2, 2), (4, 3), (5, 3), (6, 4)]
    );
}

#[test]
fn test_unknown_start_emits_nothing() {
    let g = triangle();
    assert_eq!(g.bfs(42), Err(Error::UnknownNode(42)));

    let mut visited: VisitedSet = [1].into_iter().collect();
    assert_eq!(g.dfs(42, &mut visited), Err(Error::UnknownNode(42)));
    assert_eq!(g.dfs_iterative(42, &mut visited), Err(Error::UnknownNode(42)));
    assert_eq!(visited.len(), 1);
    assert!(Bfs::new(&g, 42).is_err());
    assert!(Dfs::new(&g, 42).is_err());
}

#[test]
fn test_shared_visited_set_spans_components() {
    let mut g = Graph::from_edges([(1, 2), (3, 4)]);
    g.add_node(5);

    let mut visited = VisitedSet::new();
    let mut components = Vec::new();
    for &node in g.nodes() {
        if !visited.is_visited(node) {
            components.push(g.dfs(node, &mut visited).unwrap());
        }
    }
    assert_eq!(components, vec![vec![1, 2], vec![3, 4], vec![5]]);
    assert_eq!(visited.len(), 5);

    // Everything is already visited, so a second pass emits nothing.
    assert_eq!(g.dfs_iterative(1, &mut visited).unwrap(), Vec::<i64>::new());
}

#[test]
fn test_iterators_match_functions() {
    let g = branching();
    assert_eq!(Bfs::new(&g, 1).unwrap().collect::<Vec<_>>(), g.bfs(1).unwrap());
    assert_eq!(
        Dfs::new(&g, 1).unwrap().collect::<Vec<_>>(),
        g.dfs(1, &mut VisitedSet::new()).unwrap()
    );
    // Lazily stop after the first two nodes.
    assert_eq!(Bfs::new(&g, 1).unwrap().take(2).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_matrix_and_list_agree() {
    let mut m = AdjacencyMatrix::new(3).unwrap();
    m.add_edge(0, 1).unwrap();
    m.add_edge(0, 2).unwrap();
    m.add_edge(1, 2).unwrap();
    assert_eq!(m.to_string(), "[0, 1, 1]\n[1, 0, 1]\n[1, 1, 0]\n");

    let list = Graph::from_edges([(0, 1), (0, 2), (1, 2)]);
    assert_eq!(graph::bfs(&m, 0).unwrap(), graph::bfs(&list, 0).unwrap());
    assert_eq!(
        graph::dfs(&m, 2, &mut VisitedSet::new()).unwrap(),
        graph::dfs(&list, 2, &mut VisitedSet::new()).unwrap()
    );
    assert_eq!(m.add_edge(0, 3), Err(Error::UnknownNode(3)));
    assert_eq!(graph::bfs(&m, -1), Err(Error::UnknownNode(-1)));
}

#[test]
fn test_snapshot_round_trip() {
    let g = branching();
    let json = serde_json::to_string(&g).unwrap();
    let back: Graph = serde_json::from_str(&json).unwrap();
    assert_eq!(back, g);
    assert_eq!(back.neighbors(2).unwrap(), g.neighbors(2).unwrap());

    let snapshot: GraphSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot.nodes, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_snapshot_rejects_dangling_edge() {
    let json = r#"{ "nodes": [1, 2], "edges": [[1, 2], [2, 7]] }"#;
    let err = serde_json::from_str::<Graph>(json).unwrap_err();
    assert!(err.to_string().contains("unknown node 7"));

    let isolated: Graph = serde_json::from_str(r#"{ "nodes": [4] }"#).unwrap();
    assert_eq!(isolated.bfs(4).unwrap(), vec![4]);
}
