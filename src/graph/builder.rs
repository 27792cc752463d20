//! Fluent API for building Graph instances.

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Operations apply in call order with the same semantics as
/// [`Graph::add_vertex`] and [`Graph::add_edge`], so a later `vertex(id)`
/// clears the edges previously added from `id`.
#[derive(Debug, Clone)]
pub struct GraphBuilder<V> {
    graph: Graph<V>,
}

impl<V: Ord + Clone> GraphBuilder<V> {
    /// Create a builder for an empty graph.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Add a vertex.
    pub fn vertex(mut self, id: V) -> Self {
        self.graph.add_vertex(id);
        self
    }

    /// Add several vertices.
    pub fn vertices<I: IntoIterator<Item = V>>(mut self, ids: I) -> Self {
        for id in ids {
            self.graph.add_vertex(id);
        }
        self
    }

    /// Add a directed edge.
    pub fn edge(mut self, v1: V, v2: V) -> Self {
        self.graph.add_edge(v1, v2);
        self
    }

    /// Add several directed edges.
    pub fn edges<I: IntoIterator<Item = (V, V)>>(mut self, edges: I) -> Self {
        self.graph.extend(edges);
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph<V> {
        self.graph
    }
}

impl<V: Ord + Clone> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
