//! Growable sequence container backed by reusable blocks from a shared pool
//!
//! `poolvec` provides [`PooledVec<T>`], a randomly-indexable sequence whose
//! backing storage is checked out of a shared [`BlockPool`] instead of being
//! allocated per container. The container tracks a logical length separate
//! from the block's physical capacity and exposes the live elements as a
//! plain slice of exactly the logical length, so values can be handed to
//! APIs that require a precisely sized contiguous array without a copy.
//!
//! Storage returns to the pool when the container shrinks to empty, grows
//! past its block, or is dropped, so release on every exit path is enforced
//! structurally rather than by convention.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use poolvec::{BlockPool, PooledVec};
//!
//! let pool = Arc::new(BlockPool::new(16));
//!
//! let mut vec = PooledVec::new(Arc::clone(&pool));
//! vec.extend_from_slice(&[1, 9, 1, 1]);
//! vec.remove_at(0)?;
//!
//! // A slice of exactly vec.len() elements, no copy.
//! assert_eq!(vec.as_slice(), &[9, 1, 1]);
//!
//! drop(vec); // block goes back to the pool
//! assert_eq!(pool.free_blocks(), 1);
//! # Ok::<(), poolvec::Error>(())
//! ```

pub mod vec;

// Re-export core types
pub use poolvec_core::{Block, BlockPool, Error, Result};
pub use vec::PooledVec;
