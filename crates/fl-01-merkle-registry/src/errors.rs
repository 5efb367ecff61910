//! Registry error types.

use thiserror::Error;

/// Errors from leaf-set construction and tree operations.
///
/// All variants are non-retryable: the caller supplied data violating a tree
/// size invariant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Leaf sets must be non-empty with a power-of-two length.
    #[error("invalid leaf set of length {len}: expected a power of two >= 2")]
    InvalidLeafSet {
        /// Offending length
        len: usize,
    },

    /// More real addresses than the tree depth can hold.
    #[error("tree full: {count} addresses exceed capacity {capacity}")]
    TreeFull {
        /// Addresses after sentinel filtering
        count: usize,
        /// Maximum leaves at the requested depth
        capacity: usize,
    },

    /// Requested depth outside the supported witness format.
    #[error("depth {depth} out of range: must be in [2, {max}]")]
    DepthOutOfRange {
        /// Requested depth
        depth: usize,
        /// Maximum supported depth
        max: usize,
    },

    /// Authentication path requested for a leaf the tree does not have.
    #[error("leaf index {index} out of range for tree with {leaves} leaves")]
    LeafIndexOutOfRange {
        /// Requested leaf index
        index: usize,
        /// Number of leaves in the tree
        leaves: usize,
    },

    /// The tree is taller than the fixed witness format allows.
    #[error("tree height {height} exceeds maximum witness depth {max}")]
    TreeTooDeep {
        /// Actual tree height
        height: usize,
        /// Maximum supported depth
        max: usize,
    },
}
