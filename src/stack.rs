//! A LIFO container backing the tree's non-recursive walks.

/// A last-in, first-out stack. Walks over the tree push the nodes they still have to visit here
/// instead of on the call stack, so a degenerate (list-shaped) tree can't overflow it.
#[derive(Debug, Clone)]
pub(crate) struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub(crate) fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub(crate) fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
