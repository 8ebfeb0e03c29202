use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rudiments::graph::{bfs, dfs, dfs_iterative};
use rudiments::{Graph, NodeId, VisitedSet};

fn chain(size: NodeId) -> Graph {
    Graph::from_edges((0..size - 1).map(|i| (i, i + 1)))
}

// Complete binary tree: node i links to 2i + 1 and 2i + 2.
fn binary_tree(size: NodeId) -> Graph {
    Graph::from_edges((1..size).map(|i| ((i - 1) / 2, i)))
}

fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    for size in [1_000, 10_000] {
        for (shape, graph) in [("chain", chain(size)), ("tree", binary_tree(size))] {
            group.bench_with_input(BenchmarkId::new(format!("bfs_{shape}"), size), &graph, |b, g| {
                b.iter(|| black_box(bfs(g, 0).unwrap()));
            });
            group.bench_with_input(BenchmarkId::new(format!("dfs_{shape}"), size), &graph, |b, g| {
                b.iter(|| black_box(dfs(g, 0, &mut VisitedSet::new()).unwrap()));
            });
            group.bench_with_input(
                BenchmarkId::new(format!("dfs_iterative_{shape}"), size),
                &graph,
                |b, g| {
                    b.iter(|| black_box(dfs_iterative(g, 0, &mut VisitedSet::new()).unwrap()));
                },
            );
        }
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_chain_10000", |b| {
        b.iter(|| black_box(chain(10_000)));
    });
}

criterion_group!(benches, bench_traversals, bench_build);
criterion_main!(benches);
