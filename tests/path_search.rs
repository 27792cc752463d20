//! Path search tests: bfs and dfs.

use std::collections::{BTreeMap, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use graphwalk::graph::Graph;
use graphwalk::sample_graph;
use graphwalk::types::GraphError;

// ==================== Helpers ====================

fn random_graph(rng: &mut StdRng, n: u32, density: f64) -> Graph<u32> {
    let mut graph = Graph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    for v1 in 0..n {
        for v2 in 0..n {
            if v1 != v2 && rng.gen_bool(density) {
                graph.add_edge(v1, v2);
            }
        }
    }
    graph
}

/// Edge-count distance from `start` to every reachable vertex.
fn distances(graph: &Graph<u32>, start: u32) -> BTreeMap<u32, usize> {
    let mut dist = BTreeMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(v) = queue.pop_front() {
        let d = dist[&v];
        for &next in graph.neighbors(&v).into_iter().flatten() {
            if !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

fn assert_valid_path(graph: &Graph<u32>, path: &[u32], start: u32, destination: u32) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&destination));
    for pair in path.windows(2) {
        assert!(
            graph.has_edge(&pair[0], &pair[1]),
            "missing edge {} -> {} in {:?}",
            pair[0],
            pair[1],
            path
        );
    }
}

// ==================== Sample Graph ====================

#[test]
fn test_bfs_shortest_path() {
    let graph = sample_graph();
    let path = graph.bfs(&1, &6).unwrap();
    assert_eq!(path, vec![1, 2, 4, 6]);
}

#[test]
fn test_dfs_path() {
    let graph = sample_graph();
    let path = graph.dfs(&1, &6).unwrap();
    assert_eq!(path, vec![1, 2, 4, 7, 6]);
}

#[test]
fn test_bfs_through_cycle() {
    let graph = sample_graph();
    assert_eq!(graph.bfs(&4, &3).unwrap(), vec![4, 6, 3]);
    assert_eq!(graph.bfs(&7, &5).unwrap(), vec![7, 6, 3, 5]);
}

#[test]
fn test_trivial_self_path() {
    let graph = sample_graph();
    assert_eq!(graph.bfs(&3, &3).unwrap(), vec![3]);
    assert_eq!(graph.dfs(&2, &2).unwrap(), vec![2]);
}

// ==================== Not Found ====================

#[test]
fn test_absent_destination_not_found() {
    let graph = sample_graph();

    let err = graph.bfs(&1, &16).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "path from 1 to 16 not found");

    let err = graph.dfs(&3, &26).unwrap_err();
    assert_eq!(
        err,
        GraphError::NotFound {
            start: "3".into(),
            destination: "26".into(),
        }
    );
}

#[test]
fn test_unreachable_destination_not_found() {
    let graph = sample_graph();
    // Nothing reachable from 5 leads back to 1.
    assert!(graph.bfs(&5, &1).unwrap_err().is_not_found());
    assert!(graph.dfs(&5, &1).unwrap_err().is_not_found());
}

#[test]
fn test_start_without_neighbors_not_found() {
    let mut graph = Graph::new();
    graph.add_vertex(1);
    graph.add_vertex(2);

    assert!(matches!(graph.bfs(&1, &2), Err(GraphError::NotFound { .. })));
    assert!(matches!(graph.dfs(&1, &2), Err(GraphError::NotFound { .. })));
}

#[test]
fn test_unknown_start_fails() {
    let graph = sample_graph();
    for result in [graph.bfs(&0, &1), graph.dfs(&0, &1)] {
        match result {
            Err(GraphError::UnknownVertex(id)) => assert_eq!(id, "0"),
            other => panic!("Expected UnknownVertex error, got {:?}", other),
        }
    }
}

#[test]
fn test_unknown_start_checked_before_self_path() {
    let graph = sample_graph();
    assert!(matches!(graph.bfs(&8, &8), Err(GraphError::UnknownVertex(_))));
    assert!(matches!(graph.dfs(&8, &8), Err(GraphError::UnknownVertex(_))));
}

#[test]
fn test_string_identifiers_in_error() {
    let graph = Graph::from_edges([("a".to_string(), "b".to_string())]);
    let err = graph.bfs(&"b".to_string(), &"a".to_string()).unwrap_err();
    assert_eq!(err.to_string(), "path from \"b\" to \"a\" not found");
}

// ==================== Properties ====================

#[test]
fn test_bfs_is_shortest_on_random_graphs() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..15 {
        let graph = random_graph(&mut rng, 20, 0.1);
        let start = rng.gen_range(0..20);
        let dist = distances(&graph, start);

        for destination in 0..20 {
            match (graph.bfs(&start, &destination), dist.get(&destination)) {
                (Ok(path), Some(&d)) => {
                    assert_valid_path(&graph, &path, start, destination);
                    assert_eq!(path.len(), d + 1);
                }
                (Err(e), None) => assert!(e.is_not_found()),
                (result, d) => panic!(
                    "bfs({}, {}) = {:?} but distance is {:?}",
                    start, destination, result, d
                ),
            }
        }
    }
}

#[test]
fn test_dfs_finds_valid_path_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..15 {
        let graph = random_graph(&mut rng, 20, 0.1);
        let start = rng.gen_range(0..20);
        let dist = distances(&graph, start);

        for destination in 0..20 {
            match graph.dfs(&start, &destination) {
                Ok(path) => {
                    assert!(dist.contains_key(&destination));
                    assert_valid_path(&graph, &path, start, destination);
                    assert!(path.len() > dist[&destination]);
                }
                Err(e) => {
                    assert!(e.is_not_found());
                    assert!(!dist.contains_key(&destination));
                }
            }
        }
    }
}
