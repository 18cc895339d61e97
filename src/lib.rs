//! An ordered Binary Search Tree (BST) that only grows: keys are inserted,
//! searched for, and read back either in sorted order or level by level.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores its keys in `Node`s. Every `Node` holds one key
//! and has up to two children. The invariant this crate maintains is:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less
//!    than _or equal to_ its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    strictly greater than its own key.
//!
//! Equal keys always route left, so inserting the same key repeatedly grows a
//! left-leaning chain and every inserted key is kept.
//!
//! The tree does not rebalance itself. Searching costs `O(height)` and inserting
//! sorted input degenerates the tree into a list with `height == len`. None of
//! the operations recurse, so a degenerate tree is slow but never overflows the
//! stack.
//!
//! Keys are ordered by a [`Compare`] implementation. [`Natural`] uses the key's
//! `Ord` implementation and any `Fn(&K, &K) -> Ordering` closure works too.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let tree: OrderedTree<_> = [10, 5, 15, 20, 17, 4].into_iter().collect();
//!
//! assert!(tree.contains(&17));
//! assert!(!tree.contains(&16));
//!
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [4, 5, 10, 15, 17, 20]);
//! assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), [10, 5, 15, 4, 20, 17]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
pub mod error;
pub mod iter;
pub mod ordered;

pub use compare::{Compare, Natural};
pub use error::InsertError;
pub use ordered::OrderedTree;
