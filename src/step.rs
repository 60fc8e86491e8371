//! Unit-stepping versions of the ordered queries.
//!
//! These materialize the ascending sequence of items and probe it one value at a time, moving a
//! query bound up or down by one until it lands on a stored item. That only makes sense when
//! every value between two items can be enumerated, so they're limited to [`Step`] types (the
//! primitive integers). They give the same answers as [`Tree::range_find`],
//! [`Tree::successor`] and [`Tree::predecessor`] but cost `O(n)` plus the size of the gap
//! probed. Prefer those unless the stepping behaviour itself is wanted.

use crate::tree::Tree;

/// A key domain that can be walked one unit at a time.
pub trait Step: Ord + Copy {
    /// The next value up, or `None` at the top of the domain.
    fn forward(self) -> Option<Self>;

    /// The next value down, or `None` at the bottom of the domain.
    fn backward(self) -> Option<Self>;
}

macro_rules! impl_step {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                fn forward(self) -> Option<Self> {
                    self.checked_add(1)
                }

                fn backward(self) -> Option<Self> {
                    self.checked_sub(1)
                }
            }
        )*
    };
}

impl_step!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T> Tree<T>
where
    T: Step,
{
    /// Like [`Tree::range_find`], but moves `low` up and `high` down one unit at a time until
    /// each lands on a stored item, then slices the ascending sequence between them. A bound
    /// beyond the smallest/largest item snaps straight to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.range_find_stepped(2, 9), Some(vec![&3, &4, &5, &7, &8, &9]));
    /// assert_eq!(tree.range_find_stepped(6, 6), None);
    /// ```
    pub fn range_find_stepped(&self, low: T, high: T) -> Option<Vec<&T>> {
        let items: Vec<&T> = self.inorder().collect();
        let (first, last) = (**items.first()?, **items.last()?);
        let holds = |probe: T| items.binary_search(&&probe).is_ok();

        let mut low = low.max(first);
        while !holds(low) {
            if low > last {
                return None;
            }
            low = low.forward()?;
        }

        let mut high = high.min(last);
        while !holds(high) {
            if high < first {
                return None;
            }
            high = high.backward()?;
        }

        if low > high {
            return None;
        }
        let start = items.partition_point(|x| **x < low);
        let end = items.partition_point(|x| **x <= high);
        Some(items[start..end].to_vec())
    }

    /// Like [`Tree::successor`], but probes `item + 1`, `item + 2`, ... until one is stored or
    /// the largest item is passed.
    pub fn successor_stepped(&self, item: T) -> Option<&T> {
        let items: Vec<&T> = self.inorder().collect();
        let (first, last) = (*items.first()?, *items.last()?);
        if item < *first {
            return Some(first);
        }

        let mut probe = item;
        while probe < *last {
            probe = probe.forward()?;
            if let Ok(at) = items.binary_search(&&probe) {
                return Some(items[at]);
            }
        }
        None
    }

    /// Like [`Tree::predecessor`], but probes `item - 1`, `item - 2`, ... until one is stored or
    /// the smallest item is passed.
    pub fn predecessor_stepped(&self, item: T) -> Option<&T> {
        let items: Vec<&T> = self.inorder().collect();
        let (first, last) = (*items.first()?, *items.last()?);
        if item > *last {
            return Some(last);
        }

        let mut probe = item;
        while probe > *first {
            probe = probe.backward()?;
            if let Ok(at) = items.binary_search(&&probe) {
                return Some(items[at]);
            }
        }
        None
    }
}
