//! Contract tests for the pool-backed container
//!
//! Exercises the externally observable behavior: positional semantics
//! across shifts, bounds validation with no partial mutation, view
//! truncation, and block reuse through the shared pool.

use std::sync::Arc;

use poolvec::{BlockPool, Error, PooledVec};

fn pool() -> Arc<BlockPool<i32>> {
    Arc::new(BlockPool::new(16))
}

#[test]
fn push_insert_remove_clear_sequence() {
    let mut vec = PooledVec::new(pool());

    vec.push(1);
    vec.push(1);
    vec.push(1);
    assert_eq!(vec.len(), 3);
    assert_eq!(vec.as_slice(), &[1, 1, 1]);

    vec.insert(1, 9).unwrap();
    assert_eq!(vec.as_slice(), &[1, 9, 1, 1]);
    assert_eq!(vec.len(), 4);

    vec.remove_at(0).unwrap();
    assert_eq!(vec.as_slice(), &[9, 1, 1]);
    assert_eq!(vec.len(), 3);

    vec.clear();
    assert_eq!(vec.len(), 0);
    assert!(vec.as_slice().is_empty());
}

#[test]
fn out_of_bounds_insert_leaves_state_unchanged() {
    let mut vec = PooledVec::new(pool());
    vec.extend_from_slice(&[1, 2]);

    let err = vec.insert(5, 9).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfBounds { index: 5, len: 2 }));
    assert_eq!(vec.as_slice(), &[1, 2]);
}

#[test]
fn out_of_bounds_removals_leave_state_unchanged() {
    let mut vec = PooledVec::new(pool());
    vec.extend_from_slice(&[1, 2, 3]);

    assert!(matches!(
        vec.remove_at(3),
        Err(Error::IndexOutOfBounds { index: 3, len: 3 })
    ));
    assert!(matches!(
        vec.remove_range(1, 3),
        Err(Error::RangeOutOfBounds {
            index: 1,
            count: 3,
            len: 3
        })
    ));
    assert_eq!(vec.as_slice(), &[1, 2, 3]);
}

#[test]
fn zero_count_operations_are_no_ops() {
    let mut vec = PooledVec::new(pool());
    vec.extend_from_slice(&[1, 2, 3]);

    vec.extend_with(9, 0);
    vec.insert_with(1, 9, 0).unwrap();
    vec.insert_slice(2, &[]).unwrap();
    vec.remove_range(0, 0).unwrap();
    assert_eq!(vec.as_slice(), &[1, 2, 3]);

    // Empty input does not skip the bounds check.
    assert!(vec.insert_slice(4, &[]).is_err());
}

#[test]
fn insert_slice_preserves_relative_order() {
    let mut vec = PooledVec::new(pool());
    vec.extend_from_slice(&[1, 5]);
    vec.insert_slice(1, &[2, 3, 4]).unwrap();
    assert_eq!(vec.as_slice(), &[1, 2, 3, 4, 5]);
}

#[test]
fn remove_range_closes_the_gap() {
    let mut vec = PooledVec::new(pool());
    vec.extend_from_slice(&[0, 1, 2, 3, 4, 5]);
    vec.remove_range(1, 3).unwrap();
    assert_eq!(vec.as_slice(), &[0, 4, 5]);
}

#[test]
fn remove_item_by_equality() {
    let mut vec = PooledVec::new(pool());
    vec.extend_from_slice(&[1, 2, 2, 3]);

    assert!(vec.remove_item(&2));
    assert_eq!(vec.as_slice(), &[1, 2, 3]);

    assert!(!vec.remove_item(&9));
    assert_eq!(vec.as_slice(), &[1, 2, 3]);
}

#[test]
fn contains_and_index_of() {
    let mut vec = PooledVec::new(pool());
    vec.extend_from_slice(&[4, 5, 6]);

    assert!(vec.contains(&5));
    assert!(!vec.contains(&7));
    assert_eq!(vec.index_of(&6), Some(2));
    assert_eq!(vec.index_of(&7), None);
}

#[test]
fn copy_to_fills_destination_prefix() {
    let mut vec = PooledVec::new(pool());
    vec.extend_from_slice(&[1, 2, 3]);

    let mut dst = [0; 5];
    vec.copy_to(&mut dst).unwrap();
    assert_eq!(dst, [1, 2, 3, 0, 0]);

    let mut short = [0; 2];
    assert!(matches!(
        vec.copy_to(&mut short),
        Err(Error::SizeMismatch {
            expected: 3,
            actual: 2
        })
    ));
}

#[test]
fn iteration_is_ordered_and_restartable() {
    let mut vec = PooledVec::new(pool());
    vec.extend_from_slice(&[1, 2, 3]);

    let first: Vec<i32> = vec.iter().copied().collect();
    let second: Vec<i32> = (&vec).into_iter().copied().collect();
    assert_eq!(first, [1, 2, 3]);
    assert_eq!(first, second);
}

#[test]
fn growth_beyond_capacity_preserves_elements() {
    let p = pool();
    let mut vec = PooledVec::with_capacity(Arc::clone(&p), 4);
    let initial_capacity = vec.capacity();

    for i in 0..((initial_capacity as i32) + 10) {
        vec.push(i);
    }
    assert!(vec.capacity() > initial_capacity);
    assert!(vec.capacity() >= vec.len());
    let expected: Vec<i32> = (0..(initial_capacity as i32) + 10).collect();
    assert_eq!(vec.as_slice(), expected.as_slice());

    // The outgrown block went back to the pool for the next container.
    assert!(p.free_blocks() > 0);
}

#[test]
fn containers_share_blocks_through_the_pool() {
    let p = pool();

    let mut first = PooledVec::new(Arc::clone(&p));
    first.extend_with(1, 100);
    let capacity = first.capacity();
    drop(first);

    // The next container reuses the released block instead of allocating.
    let mut second = PooledVec::new(Arc::clone(&p));
    second.extend_with(2, 50);
    assert_eq!(second.capacity(), capacity);
    assert_eq!(p.free_blocks(), 0);
}

#[test]
fn extend_from_iterator() {
    let mut vec = PooledVec::new(pool());
    vec.extend(0..5);
    assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 4]);
}

#[test]
fn debug_formats_like_a_slice() {
    let mut vec = PooledVec::new(pool());
    vec.extend_from_slice(&[1, 2]);
    assert_eq!(format!("{vec:?}"), "[1, 2]");
}
