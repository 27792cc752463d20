//! Path search between two vertices (BFS and DFS over partial paths).

use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::frontier::{Frontier, Queue, Stack};
use crate::types::{GraphError, GraphResult, Path};

use super::Graph;

impl<V: Ord + Clone + Debug> Graph<V> {
    /// Shortest path (by edge count) from `start` to `destination`.
    ///
    /// Returns `[start]` when both are the same vertex.
    pub fn bfs(&self, start: &V, destination: &V) -> GraphResult<Path<V>> {
        self.search_paths(start, destination, Queue::new(), "bfs")
    }

    /// A path from `start` to `destination` in depth-first discovery order.
    ///
    /// Not necessarily the shortest.
    pub fn dfs(&self, start: &V, destination: &V) -> GraphResult<Path<V>> {
        self.search_paths(start, destination, Stack::new(), "dfs")
    }

    /// Drive a frontier of partial paths until one ends at `destination`.
    ///
    /// Paths are never modified once pushed; each extension is a copy.
    fn search_paths<F>(
        &self,
        start: &V,
        destination: &V,
        mut frontier: F,
        label: &str,
    ) -> GraphResult<Path<V>>
    where
        F: Frontier<Path<V>>,
    {
        self.require_vertex(start)?;

        let mut visited: BTreeSet<V> = BTreeSet::new();
        frontier.push(vec![start.clone()]);

        while let Some(path) = frontier.pop() {
            let Some(vertex) = path.last() else {
                continue;
            };

            if vertex == destination {
                log::debug!(
                    "{}: {:?} -> {:?} found path of {} vertices",
                    label,
                    start,
                    destination,
                    path.len()
                );
                return Ok(path);
            }
            if visited.contains(vertex) {
                continue;
            }

            log::trace!("{}: expand {:?} ({} pending)", label, vertex, frontier.len());
            for next in self.adjacent(vertex) {
                let mut next_path = path.clone();
                next_path.push(next.clone());
                frontier.push(next_path);
            }
            visited.insert(vertex.clone());
        }

        log::debug!(
            "{}: {:?} -> {:?} exhausted after {} vertices",
            label,
            start,
            destination,
            visited.len()
        );
        Err(GraphError::not_found(start, destination))
    }
}
