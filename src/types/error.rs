//! Error types for the graphwalk library.

use thiserror::Error;

/// All errors that can occur in the graphwalk library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A traversal or search was started from a vertex that was never added.
    #[error("Vertex {0} not found")]
    UnknownVertex(String),

    /// A path search exhausted its frontier without reaching the destination.
    #[error("path from {start} to {destination} not found")]
    NotFound { start: String, destination: String },
}

impl GraphError {
    pub(crate) fn unknown_vertex<V: std::fmt::Debug>(id: &V) -> Self {
        GraphError::UnknownVertex(format!("{:?}", id))
    }

    pub(crate) fn not_found<V: std::fmt::Debug>(start: &V, destination: &V) -> Self {
        GraphError::NotFound {
            start: format!("{:?}", start),
            destination: format!("{:?}", destination),
        }
    }

    /// `UnknownVertex` with the identifier rendered by `Display`.
    pub fn unknown_vertex_named<V: std::fmt::Display>(id: &V) -> Self {
        GraphError::UnknownVertex(id.to_string())
    }

    /// `NotFound` with both identifiers rendered by `Display`.
    pub fn not_found_named<V: std::fmt::Display>(start: &V, destination: &V) -> Self {
        GraphError::NotFound {
            start: start.to_string(),
            destination: destination.to_string(),
        }
    }

    /// True if this error signals that no path exists.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GraphError::NotFound { .. })
    }
}

/// Convenience result type for graphwalk operations.
pub type GraphResult<T> = Result<T, GraphError>;
