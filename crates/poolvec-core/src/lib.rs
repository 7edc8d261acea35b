//! Shared block pool and error types for pool-backed containers
//!
//! This crate provides the foundation that `poolvec` builds on:
//!
//! - [`Block<T>`] - a fixed-capacity, default-initialized storage region
//! - [`BlockPool<T>`] - a process-wide free list of reusable blocks
//! - [`Error`] / [`Result`] - the unified error type for all poolvec crates
//!
//! Blocks are exclusively owned while checked out and are reset to default
//! values when released, so no borrower ever observes another borrower's
//! data.
//!
//! # Example
//!
//! ```rust
//! use poolvec_core::BlockPool;
//!
//! let pool: BlockPool<u64> = BlockPool::new(16);
//!
//! let block = pool.acquire(100);
//! assert!(block.capacity() >= 100);
//!
//! pool.release(block);
//! assert_eq!(pool.free_blocks(), 1);
//! ```

pub mod error;
pub mod pool;

// Re-export core types
pub use error::{Error, Result};
pub use pool::{Block, BlockPool};
