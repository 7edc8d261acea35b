//! Reusable block storage and the shared block pool
//!
//! This module provides the process-wide pool that pool-backed containers
//! draw their storage from:
//! - Fixed-capacity, default-initialized blocks for any `Clone + Default` type
//! - Free-list reuse to minimize allocations in hot paths
//! - Default-reset on release so no live data leaks across borrowers

use std::sync::Mutex;

/// Smallest capacity a freshly allocated block is given.
const MIN_BLOCK_CAPACITY: usize = 4;

/// One physical contiguous region with a fixed capacity.
///
/// Every cell is initialized to `T::default()` on allocation, and the pool
/// resets all cells to `T::default()` when a block is released, so a block
/// handed out by [`BlockPool::acquire`] never exposes a previous borrower's
/// data. A block has no notion of logical length; containers built on top
/// track how much of the capacity is live.
#[derive(Debug)]
pub struct Block<T> {
    cells: Box<[T]>,
}

impl<T: Clone + Default> Block<T> {
    /// Allocate a fresh block with exactly `capacity` default-valued cells.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: vec![T::default(); capacity].into_boxed_slice(),
        }
    }

    /// Physical capacity of the block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// The full physical region, including cells past any logical length.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Mutable view of the full physical region.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Reset the cells in `range` back to `T::default()`.
    ///
    /// Used to scrub vacated tail positions so previously live values are
    /// not retained past their logical removal.
    #[inline]
    pub fn reset_range(&mut self, range: std::ops::Range<usize>) {
        for cell in &mut self.cells[range] {
            *cell = T::default();
        }
    }

    /// Reset every cell back to `T::default()`.
    pub fn reset(&mut self) {
        self.reset_range(0..self.cells.len());
    }
}

/// Shared pool of reusable blocks for a specific element type
///
/// Maintains a free list of blocks to minimize allocations. Containers
/// acquire a block, own it exclusively while checked out, and release it
/// back when they shrink to empty, grow past its capacity, or are dropped.
///
/// The pool itself is safe for concurrent acquire/release from multiple
/// containers; individual blocks are exclusively owned while checked out.
pub struct BlockPool<T> {
    free: Mutex<Vec<Block<T>>>,
    max_blocks: usize,
}

impl<T: Clone + Default> BlockPool<T> {
    /// Create a new pool retaining at most `max_blocks` free blocks.
    ///
    /// Released blocks past the cap are dropped instead of retained.
    pub fn new(max_blocks: usize) -> Self {
        Self {
            free: Mutex::new(Vec::with_capacity(max_blocks)),
            max_blocks,
        }
    }

    /// Check out a block with at least the specified capacity.
    ///
    /// If a suitable block exists on the free list it is reused; otherwise a
    /// new block is allocated with capacity rounded up to the next power of
    /// two. Either way the returned block's capacity may exceed the request,
    /// and callers should adopt its actual capacity.
    pub fn acquire(&self, min_capacity: usize) -> Block<T> {
        let reused = {
            let mut free = self.free.lock().unwrap();
            free.iter()
                .position(|block| block.capacity() >= min_capacity)
                .map(|idx| free.swap_remove(idx))
        };

        match reused {
            Some(block) => {
                log::trace!(
                    "block pool: reusing block (capacity {}, requested {})",
                    block.capacity(),
                    min_capacity
                );
                block
            }
            None => {
                let capacity = min_capacity
                    .next_power_of_two()
                    .max(MIN_BLOCK_CAPACITY);
                log::trace!(
                    "block pool: allocating block (capacity {capacity}, requested {min_capacity})"
                );
                Block::with_capacity(capacity)
            }
        }
    }

    /// Return a block to the pool.
    ///
    /// All cells are reset to `T::default()` before the block rejoins the
    /// free list, so the next borrower never observes stale data. If the
    /// free list is already at `max_blocks`, the block is dropped instead.
    pub fn release(&self, mut block: Block<T>) {
        block.reset();
        let mut free = self.free.lock().unwrap();
        if free.len() < self.max_blocks {
            free.push(block);
        }
        // Otherwise let it drop
    }

    /// Number of blocks currently on the free list.
    pub fn free_blocks(&self) -> usize {
        self.free.lock().unwrap().len()
    }

    /// Drop every retained free block, returning how many were dropped.
    ///
    /// Useful to give peak memory back after a burst of large containers.
    pub fn purge(&self) -> usize {
        let mut free = self.free.lock().unwrap();
        let dropped = free.len();
        free.clear();
        dropped
    }
}

impl<T: Clone + Default> Default for BlockPool<T> {
    /// A pool with a small default retention cap.
    fn default() -> Self {
        Self::new(16)
    }
}
