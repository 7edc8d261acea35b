//! Pool-backed growable sequence container
//!
//! [`PooledVec`] owns at most one block checked out from a shared
//! [`BlockPool`] and tracks a logical length separate from the block's
//! physical capacity. Every mutation goes through a single capacity
//! resolution step that either reuses the current block in place or
//! exchanges it for a larger one, copying the live elements across. The
//! live elements are exposed as a plain `&[T]` sized to the logical
//! length, so consumers that need "an array of exactly N elements" get
//! one with no copy.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::sync::Arc;

use poolvec_core::{Block, BlockPool, Error, Result};

/// A growable, randomly-indexable sequence whose storage is drawn from a
/// shared block pool.
///
/// The container starts empty with no pool interaction; the first mutation
/// acquires a block. Growth past the current capacity acquires a larger
/// block, copies the live elements, and releases the old block. Shrinking
/// reuses the block in place, resetting the vacated tail to
/// `T::default()` so no removed value is retained. Dropping the container
/// (or calling [`clear`](PooledVec::clear)) releases the block back to the
/// pool; a cleared container is in its initial state and can be reused.
///
/// The live elements are visible through [`as_slice`](PooledVec::as_slice),
/// whose length is always the logical length, never the block capacity.
/// The borrow checker ties that view to the container, so it cannot outlive
/// the next mutation.
///
/// A single `PooledVec` must not be mutated from more than one thread at a
/// time; the pool behind it is safe to share.
pub struct PooledVec<T: Clone + Default> {
    pool: Arc<BlockPool<T>>,
    block: Option<Block<T>>,
    len: usize,
}

impl<T: Clone + Default> PooledVec<T> {
    /// Create an empty container bound to `pool`.
    ///
    /// No block is acquired until the first element is added.
    pub fn new(pool: Arc<BlockPool<T>>) -> Self {
        Self {
            pool,
            block: None,
            len: 0,
        }
    }

    /// Create an empty container that has already acquired a block with
    /// room for at least `capacity` elements.
    pub fn with_capacity(pool: Arc<BlockPool<T>>, capacity: usize) -> Self {
        let block = (capacity > 0).then(|| pool.acquire(capacity));
        Self {
            pool,
            block,
            len: 0,
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the container holds no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Physical capacity of the current block, 0 when no block is held.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.block.as_ref().map_or(0, Block::capacity)
    }

    /// The live elements as a slice of exactly `len()` elements.
    ///
    /// This is the zero-copy hand-off view: its length is the logical
    /// length even when the backing block is larger.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match &self.block {
            Some(block) => &block.as_slice()[..self.len],
            None => &[],
        }
    }

    /// Mutable view of the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        match &mut self.block {
            Some(block) => &mut block.as_mut_slice()[..len],
            None => &mut [],
        }
    }

    /// Reference to the element at `index`, or `None` when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable reference to the element at `index`, or `None` when out of
    /// range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Append one element.
    pub fn push(&mut self, item: T) {
        let old_len = self.len;
        self.resize_to(old_len + 1);
        self.as_mut_slice()[old_len] = item;
    }

    /// Append `count` clones of `item`. `count == 0` is a no-op.
    pub fn extend_with(&mut self, item: T, count: usize) {
        if count == 0 {
            return;
        }
        let old_len = self.len;
        self.resize_to(old_len + count);
        for cell in &mut self.as_mut_slice()[old_len..] {
            *cell = item.clone();
        }
    }

    /// Append every element of `items` in order. An empty slice is a no-op.
    pub fn extend_from_slice(&mut self, items: &[T]) {
        if items.is_empty() {
            return;
        }
        let old_len = self.len;
        self.resize_to(old_len + items.len());
        self.as_mut_slice()[old_len..].clone_from_slice(items);
    }

    /// Insert one element at `index`, shifting everything at or after it
    /// one position right.
    ///
    /// Valid indices are `0..=len()`; `len()` appends.
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        self.insert_with(index, item, 1)
    }

    /// Insert `count` clones of `item` starting at `index`, shifting
    /// everything at or after `index` right by `count` positions.
    ///
    /// Valid indices are `0..=len()`. The bounds check runs before the
    /// `count == 0` no-op check, so an out-of-range index always fails.
    pub fn insert_with(&mut self, index: usize, item: T, count: usize) -> Result<()> {
        if index > self.len {
            return Err(Error::index_out_of_bounds(index, self.len));
        }
        if count == 0 {
            return Ok(());
        }
        let old_len = self.len;
        self.resize_to(old_len + count);
        let live = self.as_mut_slice();
        live[index..].rotate_right(count);
        for cell in &mut live[index..index + count] {
            *cell = item.clone();
        }
        Ok(())
    }

    /// Insert every element of `items` in order starting at `index`, with
    /// the same shift semantics as [`insert_with`](PooledVec::insert_with).
    ///
    /// An empty slice is a no-op, but the index is bounds-checked first.
    pub fn insert_slice(&mut self, index: usize, items: &[T]) -> Result<()> {
        if index > self.len {
            return Err(Error::index_out_of_bounds(index, self.len));
        }
        if items.is_empty() {
            return Ok(());
        }
        let old_len = self.len;
        self.resize_to(old_len + items.len());
        let live = self.as_mut_slice();
        live[index..].rotate_right(items.len());
        live[index..index + items.len()].clone_from_slice(items);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting the tail left to
    /// close the gap.
    ///
    /// Valid indices are `0..len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(Error::index_out_of_bounds(index, self.len));
        }
        let removed = std::mem::take(&mut self.as_mut_slice()[index]);
        self.as_mut_slice()[index..].rotate_left(1);
        self.resize_to(self.len - 1);
        Ok(removed)
    }

    /// Remove `count` elements starting at `index`, shifting the tail left
    /// and resetting the vacated positions to `T::default()`.
    ///
    /// Requires `index < len()` and `index + count <= len()`; `count == 0`
    /// is a no-op after the index bounds check. Validation happens before
    /// any mutation, so a failed call leaves the container unchanged.
    pub fn remove_range(&mut self, index: usize, count: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::index_out_of_bounds(index, self.len));
        }
        if count == 0 {
            return Ok(());
        }
        if count > self.len - index {
            return Err(Error::range_out_of_bounds(index, count, self.len));
        }
        self.as_mut_slice()[index..].rotate_left(count);
        self.resize_to(self.len - count);
        Ok(())
    }

    /// Remove the first element equal to `item`. Returns whether a removal
    /// occurred; when `item` is absent the container is untouched.
    pub fn remove_item(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(item) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Whether any live element equals `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(item)
    }

    /// Position of the first live element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|v| v == item)
    }

    /// Clone the live elements into the front of `dst`.
    ///
    /// `dst` must have room for all `len()` elements; a shorter destination
    /// fails with a size mismatch and copies nothing.
    pub fn copy_to(&self, dst: &mut [T]) -> Result<()> {
        if dst.len() < self.len {
            return Err(Error::size_mismatch(self.len, dst.len()));
        }
        dst[..self.len].clone_from_slice(self.as_slice());
        Ok(())
    }

    /// Drop every live element and return the block to the pool.
    ///
    /// Idempotent; afterwards the container is in its initial empty state
    /// (`len() == 0`, `capacity() == 0`) and can be reused.
    pub fn clear(&mut self) {
        self.release_block();
    }

    /// Shrink the logical length to `new_len`, resetting the vacated tail.
    ///
    /// No-op when `new_len >= len()`. Shrinking to 0 releases the block.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.resize_to(new_len);
        }
    }

    /// Iterate over the live elements in index order.
    ///
    /// The iterator is lazy and restartable; it borrows the container, so
    /// mutation during iteration is rejected at compile time.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// The capacity resolution step behind every mutation.
    ///
    /// - `new_len == 0` releases the block entirely;
    /// - `new_len` within the current capacity reuses the block in place,
    ///   resetting `[new_len, len)` when shrinking;
    /// - otherwise a block of capacity >= `new_len` is acquired, the live
    ///   prefix is copied across, and the old block is released. The
    ///   acquired block may be larger than requested; its actual capacity
    ///   is adopted.
    ///
    /// Positions `[len, new_len)` after growth are `T::default()`; callers
    /// are expected to overwrite them.
    fn resize_to(&mut self, new_len: usize) {
        if new_len == 0 {
            self.release_block();
            return;
        }
        match &mut self.block {
            Some(block) if new_len <= block.capacity() => {
                if new_len < self.len {
                    block.reset_range(new_len..self.len);
                }
                self.len = new_len;
            }
            _ => {
                let mut fresh = self.pool.acquire(new_len);
                if let Some(old) = self.block.take() {
                    log::trace!(
                        "pooled vec: growing {} -> {} (capacity {} -> {})",
                        self.len,
                        new_len,
                        old.capacity(),
                        fresh.capacity()
                    );
                    fresh.as_mut_slice()[..self.len].clone_from_slice(&old.as_slice()[..self.len]);
                    self.pool.release(old);
                }
                self.block = Some(fresh);
                self.len = new_len;
            }
        }
    }

    fn release_block(&mut self) {
        if let Some(block) = self.block.take() {
            self.pool.release(block);
        }
        self.len = 0;
    }
}

impl<T: Clone + Default> Drop for PooledVec<T> {
    fn drop(&mut self) {
        self.release_block();
    }
}

impl<T: Clone + Default> Extend<T> for PooledVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Clone + Default> Index<usize> for PooledVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T: Clone + Default> IndexMut<usize> for PooledVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, T: Clone + Default> IntoIterator for &'a PooledVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone + Default + fmt::Debug> fmt::Debug for PooledVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
