//! Walks over a [`Tree`]. None of them recurse, so they're safe on arbitrarily deep trees, and
//! the borrowing ones can be abandoned early or started again at will.

use std::iter::{self, FusedIterator};

use crate::stack::Stack;
use crate::tree::{Link, Node, Tree};

impl<T> Tree<T> {
    /// Iterates over the items in preorder: a node, then its left subtree, then its right
    /// subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&2, &1, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let mut stack = Stack::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(root);
        }
        Iter {
            stack,
            remaining: self.size,
        }
    }

    /// Iterates over the items in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree: Tree<_> = [2, 3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&1, &2, &2, &3]);
    /// ```
    pub fn inorder(&self) -> Inorder<'_, T> {
        let mut inorder = Inorder {
            stack: Stack::new(),
            remaining: self.size,
        };
        inorder.push_left_spine(self.root.as_deref());
        inorder
    }

    /// Postorder traversal is not provided; this is always empty.
    pub fn postorder(&self) -> iter::Empty<&T> {
        iter::empty()
    }

    /// Level-order traversal is not provided; this is always empty.
    pub fn levelorder(&self) -> iter::Empty<&T> {
        iter::empty()
    }
}

/// A preorder iterator over the items of a [`Tree`], created by [`Tree::iter`].
pub struct Iter<'a, T> {
    stack: Stack<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree comes out next.
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// An ascending iterator over the items of a [`Tree`], created by [`Tree::inorder`].
pub struct Inorder<'a, T> {
    stack: Stack<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Inorder<'a, T> {
    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Inorder<'_, T> {}
impl<T> FusedIterator for Inorder<'_, T> {}

impl<T> Clone for Inorder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// An owning iterator yielding the items of a [`Tree`] in ascending order. Dropping it part way
/// frees the remaining nodes without recursing.
pub struct IntoIter<T> {
    // Every node on the stack has already handed its left subtree to the nodes above it.
    stack: Stack<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        let mut into_iter = Self {
            stack: Stack::new(),
            remaining: len,
        };
        into_iter.push_left_spine(root);
        into_iter
    }

    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { data, right, .. } = *node;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        while !self.stack.is_empty() {
            self.next();
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding its items in ascending order.
    fn into_iter(mut self) -> Self::IntoIter {
        let len = std::mem::take(&mut self.size);
        IntoIter::new(self.root.take(), len)
    }
}
