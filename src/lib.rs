//! This crate exposes a link-based Binary Search Tree (BST): an ordered collection supporting
//! insertion, lookup, deletion, range queries, successor/predecessor lookup and rebuilding the
//! whole tree into a minimum-height shape.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. Equal values are kept,
//!    so the tree is a multiset rather than a set.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree never rebalances on its own, so
//! adding already sorted values produces a tree as tall as a linked list. [`Tree::rebalance`]
//! rebuilds it with a height of `O(lg N)` where `N` is the number of nodes in the tree. BSTs
//! also naturally support sorted iteration by visiting the left subtree, then the subtree root,
//! then the right subtree; see [`Tree::inorder`].
//!
//! # Examples
//!
//! ```
//! use linkedbst::Tree;
//!
//! let mut tree: Tree<_> = (1..=7).collect();
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.range_find(&2, &4), Some(vec![&2, &3, &4]));
//! assert_eq!(tree.successor(&7), None);
//! ```
//!
//! The tree logs structural rebuilds through the [`log`] facade at `trace` level.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod iter;
mod range;
mod stack;
pub mod step;
mod tree;

pub use error::Error;
pub use iter::{Inorder, IntoIter, Iter};
pub use step::Step;
pub use tree::Tree;
