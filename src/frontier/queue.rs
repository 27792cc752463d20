//! FIFO frontier: insert at the end, remove from the front.

use std::collections::VecDeque;

use super::Frontier;

/// First-in, first-out sequence.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append an item at the end.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove the item at the front.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Number of queued items.
    pub fn size(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T) {
        self.enqueue(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.dequeue()
    }

    fn len(&self) -> usize {
        self.size()
    }
}
