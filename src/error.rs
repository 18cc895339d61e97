//! Errors surfaced by [`OrderedTree`][crate::OrderedTree].

use std::collections::TryReserveError;

use thiserror::Error;

/// Why [`OrderedTree::try_insert`][crate::OrderedTree::try_insert] failed. The tree is
/// left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertError {
    /// There was no memory left for the new node.
    #[error("failed to allocate a node for the inserted key")]
    Alloc(#[from] TryReserveError),
}
