//! Three-way comparisons used to order keys in an [`OrderedTree`][crate::OrderedTree].
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//! use ordered_tree::{Compare, Natural};
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"xy"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over `K`. Implementations must be consistent: if `a < b` and
/// `b < c` then `a < c`, and `compare(a, b)` is the reverse of `compare(b, a)`.
/// A tree built with an inconsistent comparator is still memory safe but its
/// search and traversal results are unspecified.
pub trait Compare<K: ?Sized> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<K> Compare<K> for Natural
where
    K: Ord + ?Sized,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K, F> Compare<K> for F
where
    K: ?Sized,
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
