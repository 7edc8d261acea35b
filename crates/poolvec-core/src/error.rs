//! Error types for pool-backed containers
//!
//! Provides a unified error type shared by all poolvec crates.

use thiserror::Error;

/// Core error type for pool-backed container operations
#[derive(Error, Debug)]
pub enum Error {
    /// Index argument outside the container's logical length
    #[error("Index out of bounds: index {index}, length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Index + count range reaching past the container's logical length
    #[error("Range out of bounds: index {index} + count {count} exceeds length {len}")]
    RangeOutOfBounds {
        index: usize,
        count: usize,
        len: usize,
    },

    /// Destination or source of a bulk copy has the wrong length
    #[error("Size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an index past the logical length
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Create an error for an index + count range past the logical length
    pub fn range_out_of_bounds(index: usize, count: usize, len: usize) -> Self {
        Self::RangeOutOfBounds { index, count, len }
    }

    /// Create an error for a length mismatch in a bulk copy
    pub fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }
}
