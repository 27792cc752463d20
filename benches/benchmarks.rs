//! Criterion benchmarks for graphwalk.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use graphwalk::graph::Graph;

/// Build a random graph with a fixed number of out-edges per vertex.
fn make_large_graph(vertex_count: u32, edges_per_vertex: usize) -> Graph<u32> {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new();
    for v in 0..vertex_count {
        graph.add_vertex(v);
    }
    for v in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            graph.add_edge(v, rng.gen_range(0..vertex_count));
        }
    }
    graph
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("build_10k_vertices_5_edges", |b| {
        b.iter(|| make_large_graph(10_000, 5));
    });
}

fn bench_traversal(c: &mut Criterion) {
    let graph = make_large_graph(10_000, 5);

    c.bench_function("bft_10k", |b| {
        b.iter(|| graph.bft(&0).unwrap());
    });
    c.bench_function("dft_10k", |b| {
        b.iter(|| graph.dft(&0).unwrap());
    });

    // Recursion depth grows with path length; keep this one small.
    let small = make_large_graph(500, 3);
    c.bench_function("dft_recursive_500", |b| {
        b.iter(|| small.dft_recursive(&0).unwrap());
    });
}

fn bench_search(c: &mut Criterion) {
    let graph = make_large_graph(2_000, 3);

    c.bench_function("bfs_2k", |b| {
        b.iter(|| graph.bfs(&0, &1_999));
    });
    c.bench_function("dfs_2k", |b| {
        b.iter(|| graph.dfs(&0, &1_999));
    });
}

criterion_group!(benches, bench_construction, bench_traversal, bench_search);
criterion_main!(benches);
