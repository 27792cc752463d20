//! Pending-work containers driven by the traversal and search algorithms.
//!
//! The graph core only needs three capabilities from a frontier: insert an
//! item, remove the next item, and report how many items are pending. The
//! removal order is what distinguishes breadth-first from depth-first work.

pub mod queue;
pub mod stack;

pub use queue::Queue;
pub use stack::Stack;

/// Minimal capability contract for a frontier container.
pub trait Frontier<T> {
    /// Insert an item.
    fn push(&mut self, item: T);

    /// Remove the next item, or `None` when empty.
    fn pop(&mut self) -> Option<T>;

    /// Number of pending items.
    fn len(&self) -> usize;

    /// True if nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
