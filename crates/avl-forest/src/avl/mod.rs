//! Self-balancing binary search tree map.
//!
//! [`AvlMap`] keeps the height difference of every node's subtrees within
//! one by applying at most one of four rotation cases per ancestor after
//! each structural change, giving O(log n) insert, remove and lookup.

mod balance;
mod map;

pub use map::{AvlMap, Iter};

use thiserror::Error;

/// Why a removal could not happen. The tree is left unchanged either way.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RemoveError {
    /// The tree holds no entries at all; reported before any search.
    #[error("EMPTY")]
    Empty,
    /// The key is not present in a populated tree.
    #[error("NOT_FOUND")]
    NotFound,
}
