//! Core graph structure — vertex identifiers mapped to their out-edge sets.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::types::{GraphError, GraphResult};

/// A directed graph stored as a mapping from vertex to its outbound neighbors.
///
/// Neighbor sets are ordered, so every traversal visits neighbors in
/// ascending identifier order and produces a deterministic result.
///
/// The graph is not internally synchronized. Traversals borrow it
/// immutably, so it can be shared across threads for reading as long as no
/// one holds it mutably at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Graph<V> {
    vertices: BTreeMap<V, BTreeSet<V>>,
}

impl<V: Ord + Clone> Graph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
        }
    }

    /// Build a graph from directed `(from, to)` pairs.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }

    /// Add a vertex with an empty edge set.
    ///
    /// Calling this on an existing vertex discards its outbound edges.
    pub fn add_vertex(&mut self, id: V) {
        self.vertices.insert(id, BTreeSet::new());
    }

    /// Add a directed edge `v1 -> v2`, creating either endpoint if missing.
    ///
    /// Existing endpoints keep their edges; adding the same edge twice is a no-op.
    pub fn add_edge(&mut self, v1: V, v2: V) {
        if !self.vertices.contains_key(&v2) {
            self.add_vertex(v2.clone());
        }
        self.vertices.entry(v1).or_default().insert(v2);
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(BTreeSet::len).sum()
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether `id` has been added as a vertex.
    pub fn contains_vertex(&self, id: &V) -> bool {
        self.vertices.contains_key(id)
    }

    /// Outbound neighbors of `id`, or `None` if it is not a vertex.
    pub fn neighbors(&self, id: &V) -> Option<&BTreeSet<V>> {
        self.vertices.get(id)
    }

    /// Whether the directed edge `v1 -> v2` exists.
    pub fn has_edge(&self, v1: &V, v2: &V) -> bool {
        self.vertices
            .get(v1)
            .map(|edges| edges.contains(v2))
            .unwrap_or(false)
    }

    /// Read-only view of the vertex-to-neighbors mapping.
    pub fn vertices(&self) -> &BTreeMap<V, BTreeSet<V>> {
        &self.vertices
    }

    /// Neighbors of a vertex known to exist; empty for unknown ids.
    pub(crate) fn adjacent<'a>(&'a self, id: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.vertices.get(id).into_iter().flatten()
    }

    /// Fail with `UnknownVertex` unless `id` is in the graph.
    pub(crate) fn require_vertex(&self, id: &V) -> GraphResult<()>
    where
        V: fmt::Debug,
    {
        if self.vertices.contains_key(id) {
            Ok(())
        } else {
            Err(GraphError::unknown_vertex(id))
        }
    }
}

impl<V: Ord + Clone> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Ord + Clone> Extend<(V, V)> for Graph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, edges: I) {
        for (v1, v2) in edges {
            self.add_edge(v1, v2);
        }
    }
}

impl<V: Ord + Clone> FromIterator<(V, V)> for Graph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        Self::from_edges(edges)
    }
}

impl<V: fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (vertex, edges)) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {{", vertex)?;
            for (j, target) in edges.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", target)?;
            }
            write!(f, "}}")?;
        }
        write!(f, "}}")
    }
}
