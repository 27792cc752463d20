//! graphwalk — a directed graph with traversal and path search.
//!
//! Vertices map to ordered sets of outbound neighbors. On top of that
//! storage the graph offers breadth-first and depth-first traversal
//! (iterative and recursive) and breadth-first / depth-first path search.

pub mod cli;
pub mod frontier;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use frontier::{Frontier, Queue, Stack};
pub use graph::{Graph, GraphBuilder};
pub use types::{GraphError, GraphResult, Path, SAMPLE_EDGES};

/// Create a new empty graph.
pub fn new_graph<V: Ord + Clone>() -> Graph<V> {
    Graph::new()
}

/// Build the sample graph shared by the demo and the tests.
pub fn sample_graph() -> Graph<u32> {
    GraphBuilder::new()
        .vertices(1..=7)
        .edges(SAMPLE_EDGES)
        .build()
}
