//! A link-based BST. Every `Node` exclusively owns its children, so the whole structure is a
//! plain ownership tree with no parent pointers and no `unsafe`.
//!
//! # Examples
//!
//! ```
//! use linkedbst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.add(1);
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Adding an equal item keeps both copies.
//! tree.add(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing hands the item back and fails loudly when there's nothing to remove.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Err(Error::KeyNotFound));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::error::Error;
use crate::iter::IntoIter;
use crate::stack::Stack;

/// An optional, exclusively owned subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }

    /// Builds a minimum-height subtree out of the next `len` items, which must arrive in
    /// ascending order. The item at index `len / 2` becomes the root.
    fn build(len: usize, items: &mut impl Iterator<Item = T>) -> Link<T> {
        if len == 0 {
            return None;
        }

        let mid = len / 2;
        let left = Self::build(mid, items);
        let data = items
            .next()
            .expect("`build` is handed exactly as many items as it asks for");
        let right = Self::build(len - mid - 1, items);

        Some(Box::new(Self { data, left, right }))
    }
}

/// Removes the largest node from the non-empty subtree at `link` and returns its item. The
/// largest node has no right child, so its left child (if any) takes its place.
fn detach_max<T>(mut link: &mut Link<T>) -> T {
    while link.as_ref().map_or(false, |node| node.right.is_some()) {
        link = &mut link.as_mut().expect("checked for a node above").right;
    }

    let max = link.take().expect("`detach_max` requires a non-empty subtree");
    let Node { data, left, .. } = *max;
    *link = left;
    data
}

/// An unbalanced Binary Search Tree storing items in the order given by `Ord`. Items that compare
/// equal to an existing item are kept and go to its right. Nothing is rebalanced automatically;
/// call [`Tree::rebalance`] to rebuild a minimum-height tree.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    pub(crate) size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Draining tears the nodes down one at a time instead of recursing once per level.
        drop(IntoIter::new(self.root.take(), self.size));
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// The number of items stored in the tree, counting every copy of equal items.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Potentially finds the stored item equal to `item`. If no item matches, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&3), Some(&3));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            match item.cmp(&node.data) {
                Ordering::Less => link = node.left.as_deref(),
                Ordering::Equal => return Some(&node.data),
                Ordering::Greater => link = node.right.as_deref(),
            }
        }
        None
    }

    /// Whether an item equal to `item` is stored in the tree.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.find(item).is_some()
    }

    /// Adds the item to the tree. Items equal to one already stored are added too, to its right.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(2);
    /// tree.add(1);
    /// tree.add(2);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&1, &2, &2]);
    /// ```
    pub fn add(&mut self, item: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if item < node.data {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        *link = Some(Node::new_boxed(item));
        self.size += 1;
    }

    /// Removes one stored item equal to `item` and returns it.
    ///
    /// A node with two children keeps its place in the tree: it takes over the largest item of
    /// its left subtree and the node that held that item is unlinked instead.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no stored item equals `item`. The tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::{Error, Tree};
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&2), Ok(2));
    /// assert_eq!(tree.find(&2), None);
    /// assert_eq!(tree.remove(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T, Error>
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                Some(node) => item.cmp(&node.data),
                None => {
                    log::debug!("remove missed in a tree of {} items", self.size);
                    return Err(Error::KeyNotFound);
                }
            };
            if ordering == Ordering::Equal {
                break;
            }

            let node = link.as_mut().expect("matched a node above");
            link = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        let target = link.as_mut().expect("the loop only breaks on a node");
        let removed = if target.left.is_some() && target.right.is_some() {
            let max = detach_max(&mut target.left);
            mem::replace(&mut target.data, max)
        } else {
            let target = link.take().expect("the loop only breaks on a node");
            let Node { data, left, right } = *target;
            *link = left.or(right);
            data
        };

        self.size -= 1;
        Ok(removed)
    }

    /// Overwrites the stored item equal to `item` with `new_item` and returns the old one, or
    /// `None` if nothing matches. The node keeps its position, so `new_item` should order the
    /// same way `item` does.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.replace(&3, 3), Some(3));
    /// assert_eq!(tree.replace(&4, 4), None);
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T>
    where
        T: Ord,
    {
        let mut link = self.root.as_deref_mut();
        while let Some(node) = link {
            match item.cmp(&node.data) {
                Ordering::Less => link = node.left.as_deref_mut(),
                Ordering::Equal => return Some(mem::replace(&mut node.data, new_item)),
                Ordering::Greater => link = node.right.as_deref_mut(),
            }
        }
        None
    }

    /// Removes every item from the tree.
    pub fn clear(&mut self) {
        log::trace!("clearing tree of {} items", self.size);
        drop(mem::take(self));
    }

    /// The number of edges on the longest path from the root to a leaf. An empty tree has a
    /// height of `-1` and a tree holding a single item has a height of `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.extend([1, 2, 3]);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> isize {
        self.levels() as isize - 1
    }

    /// How many nodes are on the longest root-to-leaf path, `0` for an empty tree.
    fn levels(&self) -> usize {
        let mut stack = Stack::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }

        let mut levels = 0;
        while let Some((node, depth)) = stack.pop() {
            levels = levels.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                stack.push((child, depth + 1));
            }
        }
        levels
    }

    /// A rough "not grossly unbalanced" check: holds when `height() + 1` stays below
    /// `2 * log2(2 * (n + 1)) - 1` for the `n` stored items. This isn't an AVL or red-black
    /// guarantee.
    pub fn is_balanced(&self) -> bool {
        let count = self.inorder().count();
        let bound = 2.0 * (2.0 * (count as f64 + 1.0)).log2() - 1.0;
        (self.levels() as f64) < bound
    }

    /// Rebuilds the tree into a minimum-height shape holding the same items.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert!(tree.inorder().copied().eq(1..=7));
    /// ```
    pub fn rebalance(&mut self) {
        let len = self.size;
        let levels_before = self.levels();

        let mut items = mem::take(self).into_iter();
        self.root = Node::build(len, &mut items);
        self.size = len;

        let levels = self.levels();
        log::trace!("rebalanced {len} items: {levels_before} -> {levels} levels");
        if cfg!(debug_assertions) {
            // A minimum-height tree over `len` nodes has as many levels as `len` has bits.
            assert_eq!(levels, (usize::BITS - len.leading_zeros()) as usize);
            assert!(items.next().is_none());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    /// Copies node by node, so the clone has exactly the shape of `self`.
    fn clone(&self) -> Self {
        let mut root = None;
        let mut stack = Stack::new();
        stack.push((self.root.as_deref(), &mut root));

        while let Some((source, target)) = stack.pop() {
            let Some(source) = source else {
                continue;
            };
            let node = target.insert(Node::new_boxed(source.data.clone()));
            let Node { left, right, .. } = &mut **node;
            stack.push((source.left.as_deref(), left));
            stack.push((source.right.as_deref(), right));
        }
        drop(stack);

        Self {
            root,
            size: self.size,
        }
    }
}

impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    /// Trees are equal when they hold the same items, whatever their shapes.
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.inorder().eq(other.inorder())
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inorder()).finish()
    }
}

/// Pushes `link` and its chain of right children, one level deeper each.
fn push_right_spine<'a, T>(
    stack: &mut Stack<(&'a Node<T>, usize)>,
    mut link: Option<&'a Node<T>>,
    mut depth: usize,
) {
    while let Some(node) = link {
        stack.push((node, depth));
        link = node.right.as_deref();
        depth += 1;
    }
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    /// Renders the tree rotated a quarter turn counterclockwise: the right subtree is printed
    /// above its parent and the left one below, with one `"| "` of indentation per level.
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.to_string(), "| 3\n2\n| 1\n");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = Stack::new();
        push_right_spine(&mut stack, self.root.as_deref(), 0);

        while let Some((node, depth)) = stack.pop() {
            for _ in 0..depth {
                f.write_str("| ")?;
            }
            writeln!(f, "{}", node.data)?;
            push_right_spine(&mut stack, node.left.as_deref(), depth + 1);
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}
