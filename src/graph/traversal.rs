//! Whole-graph traversals: breadth-first, depth-first, and recursive depth-first.

use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::frontier::{Frontier, Queue, Stack};
use crate::types::{GraphResult, Path};

use super::Graph;

impl<V: Ord + Clone + Debug> Graph<V> {
    /// Visit every vertex reachable from `start` in breadth-first order.
    ///
    /// A vertex is marked visited when it is dequeued, so it may be queued
    /// more than once; later copies are skipped and each vertex appears in
    /// the result exactly once.
    pub fn bft(&self, start: &V) -> GraphResult<Vec<V>> {
        self.require_vertex(start)?;

        let mut queue: Queue<V> = Queue::new();
        let mut visited: BTreeSet<V> = BTreeSet::new();
        let mut order: Vec<V> = Vec::new();

        queue.push(start.clone());

        while let Some(vertex) = queue.pop() {
            if !visited.insert(vertex.clone()) {
                continue;
            }
            log::trace!("bft: visit {:?} ({} queued)", vertex, queue.len());

            for next in self.adjacent(&vertex) {
                if !visited.contains(next) {
                    queue.push(next.clone());
                }
            }
            order.push(vertex);
        }

        log::debug!("bft from {:?} visited {} vertices", start, order.len());
        Ok(order)
    }

    /// Visit every vertex reachable from `start` in depth-first order.
    ///
    /// Neighbors are marked visited as they are pushed, which keeps each
    /// vertex on the stack at most once. The start vertex is marked when
    /// it is popped.
    pub fn dft(&self, start: &V) -> GraphResult<Vec<V>> {
        self.require_vertex(start)?;

        let mut stack: Stack<V> = Stack::new();
        let mut visited: BTreeSet<V> = BTreeSet::new();
        let mut order: Vec<V> = Vec::new();

        stack.push(start.clone());

        while let Some(vertex) = stack.pop() {
            visited.insert(vertex.clone());
            log::trace!("dft: visit {:?} ({} stacked)", vertex, stack.len());

            for next in self.adjacent(&vertex) {
                if visited.insert(next.clone()) {
                    stack.push(next.clone());
                }
            }
            order.push(vertex);
        }

        log::debug!("dft from {:?} visited {} vertices", start, order.len());
        Ok(order)
    }

    /// Depth-first traversal by recursion, starting from an empty path.
    ///
    /// Every call allocates its own accumulator, so repeated calls never
    /// see each other's results.
    ///
    /// Recursion depth follows the longest simple path explored, so a very
    /// deep graph (a chain of a few hundred thousand vertices) overflows the
    /// thread stack. Use [`Graph::dft`] for those.
    pub fn dft_recursive(&self, start: &V) -> GraphResult<Path<V>> {
        self.dft_recursive_with(start, Path::new())
    }

    /// Depth-first traversal by recursion, appending to a caller-supplied path.
    ///
    /// Vertices already present in `path` are not entered again.
    pub fn dft_recursive_with(&self, start: &V, path: Path<V>) -> GraphResult<Path<V>> {
        self.require_vertex(start)?;
        let path = self.visit_recursive(start, path);
        log::debug!(
            "dft_recursive from {:?} produced {} vertices",
            start,
            path.len()
        );
        Ok(path)
    }

    fn visit_recursive(&self, vertex: &V, mut path: Path<V>) -> Path<V> {
        path.push(vertex.clone());
        for next in self.adjacent(vertex) {
            if !path.contains(next) {
                path = self.visit_recursive(next, path);
            }
        }
        path
    }
}
