//! Ordered queries that only walk the part of the tree they need.
//!
//! These rely on nothing but `Ord`, so they work for any item type. For the unit-stepping
//! flavour restricted to integers see [`crate::step`].

use crate::stack::Stack;
use crate::tree::Tree;

impl<T> Tree<T>
where
    T: Ord,
{
    /// Returns the stored items `x` with `low <= x <= high` in ascending order, or `None` when
    /// there are none (in particular whenever `low > high`). Every copy of an equal item in the
    /// range is returned.
    ///
    /// Subtrees lying wholly below `low` are skipped and the walk stops at the first item above
    /// `high`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.range_find(&2, &9), Some(vec![&3, &4, &5, &7, &8, &9]));
    /// assert_eq!(tree.range_find(&10, &20), None);
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Option<Vec<&T>> {
        let mut found = Vec::new();
        let mut stack = Stack::new();
        let mut link = self.root.as_deref();

        while link.is_some() || !stack.is_empty() {
            while let Some(node) = link {
                if node.data < *low {
                    link = node.right.as_deref();
                } else {
                    stack.push(node);
                    link = node.left.as_deref();
                }
            }

            let Some(node) = stack.pop() else {
                break;
            };
            if node.data > *high {
                break;
            }
            found.push(&node.data);
            link = node.right.as_deref();
        }

        if found.is_empty() {
            None
        } else {
            Some(found)
        }
    }

    /// The smallest stored item strictly greater than `item`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&5), Some(&8));
    /// assert_eq!(tree.successor(&4), Some(&5));
    /// assert_eq!(tree.successor(&8), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T> {
        let mut candidate = None;
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            if node.data > *item {
                candidate = Some(&node.data);
                link = node.left.as_deref();
            } else {
                link = node.right.as_deref();
            }
        }
        candidate
    }

    /// The largest stored item strictly less than `item`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.predecessor(&5), Some(&3));
    /// assert_eq!(tree.predecessor(&6), Some(&5));
    /// assert_eq!(tree.predecessor(&3), None);
    /// ```
    pub fn predecessor(&self, item: &T) -> Option<&T> {
        let mut candidate = None;
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            if node.data < *item {
                candidate = Some(&node.data);
                link = node.right.as_deref();
            } else {
                link = node.left.as_deref();
            }
        }
        candidate
    }
}
