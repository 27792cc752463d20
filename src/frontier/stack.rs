//! LIFO frontier: insert at the top, remove from the top.

use super::Frontier;

/// Last-in, first-out sequence.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push an item onto the top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Pop the item on top.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Number of stacked items.
    pub fn size(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T) {
        Stack::push(self, item);
    }

    fn pop(&mut self) -> Option<T> {
        Stack::pop(self)
    }

    fn len(&self) -> usize {
        self.size()
    }
}
