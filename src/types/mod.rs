//! Shared types for the graphwalk library.

pub mod error;

pub use error::{GraphError, GraphResult};

/// An ordered walk from a start vertex to the current frontier vertex.
pub type Path<V> = Vec<V>;

/// Edges of the sample graph used by the demo and the test fixtures.
///
/// Adjacency: `{1: {2}, 2: {3, 4}, 3: {5}, 4: {6, 7}, 5: {3}, 6: {3}, 7: {1, 6}}`.
pub const SAMPLE_EDGES: [(u32, u32); 10] = [
    (5, 3),
    (6, 3),
    (7, 1),
    (4, 7),
    (1, 2),
    (7, 6),
    (2, 4),
    (3, 5),
    (2, 3),
    (4, 6),
];
