//! Allocator-level behaviour: reallocation counts, balance, and recoverable
//! allocation failure.

use std::mem::{align_of, size_of};

use rkvec::{ArrayError, GrowableArray, GrowthPolicy};
use rkvec_test_utils::{CountingAlloc, LimitedAlloc};

/// Header size for a `u32` array (two `usize` fields, no padding).
const HEADER: usize = 2 * size_of::<usize>();

#[test]
fn new_array_does_not_allocate() {
    let alloc = CountingAlloc::new();
    let array: GrowableArray<u64, _> = GrowableArray::new_in(alloc.clone());
    assert_eq!(array.capacity(), 0);
    drop(array);
    assert_eq!(alloc.allocations(), 0);
    assert_eq!(alloc.deallocations(), 0);
}

#[test]
fn pushes_reallocate_logarithmically() {
    let alloc = CountingAlloc::new();
    let mut array = GrowableArray::new_in(alloc.clone());
    for n in 1..=10_000usize {
        array.push(n);
        let bound = n.ilog2() as usize + 1;
        assert!(
            alloc.growth_events() <= bound,
            "{} growth events after {n} pushes, expected at most {bound}",
            alloc.growth_events()
        );
    }
    // 4 -> 8 -> ... -> 16384: one allocation, twelve doublings.
    assert_eq!(alloc.allocations(), 1);
    assert_eq!(alloc.reallocations(), 12);
    assert_eq!(array.capacity(), 16_384);
}

#[test]
fn storage_is_released_exactly_once() {
    let alloc = CountingAlloc::new();
    {
        let mut array = GrowableArray::new_in(alloc.clone());
        for i in 0..100u32 {
            array.push(i);
        }
        assert_eq!(alloc.live_bytes(), array.heap_bytes());
        array.free();
    }
    assert!(alloc.is_balanced());
}

#[test]
fn live_bytes_match_header_plus_slots() {
    let alloc = CountingAlloc::new();
    let mut array = GrowableArray::new_in(alloc.clone());
    array.push(7u32);
    assert_eq!(alloc.live_bytes(), HEADER + 4 * size_of::<u32>());
    assert_eq!(array.heap_bytes(), alloc.live_bytes());
}

#[test]
fn shrink_to_fit_reallocates_down() {
    let alloc = CountingAlloc::new();
    let mut array = GrowableArray::new_in(alloc.clone());
    array.reserve(64);
    array.extend_from_slice(&[1u32, 2, 3]);
    array.shrink_to_fit();
    assert_eq!(array.capacity(), 3);
    assert_eq!(alloc.reallocations(), 1);
    // Three slots plus header, rounded up to the header's alignment.
    let expected = (HEADER + 3 * size_of::<u32>()).next_multiple_of(align_of::<usize>());
    assert_eq!(alloc.live_bytes(), expected);
    assert_eq!(alloc.live_bytes(), array.heap_bytes());
    assert_eq!(array, [1, 2, 3]);

    array.clear();
    array.shrink_to_fit();
    assert!(alloc.is_balanced());
}

#[test]
fn clone_allocates_from_the_same_allocator() {
    let alloc = CountingAlloc::new();
    let mut array = GrowableArray::new_in(alloc.clone());
    array.extend_from_slice(&[1u8, 2, 3, 4, 5]);
    let copy = array.clone();
    assert_eq!(alloc.allocations(), 2);
    assert_eq!(copy, array);
    drop(array);
    drop(copy);
    assert!(alloc.is_balanced());
}

#[test]
fn from_slice_is_one_exact_allocation() {
    let alloc = CountingAlloc::new();
    let array = GrowableArray::try_from_slice_in(&[1u32, 2, 3], alloc.clone()).unwrap();
    assert_eq!(array.capacity(), 3);
    assert_eq!(alloc.growth_events(), 1);
}

#[test]
fn failed_push_leaves_array_intact() {
    // Room for exactly eight u32 slots.
    let alloc = LimitedAlloc::new(HEADER + 8 * size_of::<u32>());
    let mut array = GrowableArray::new_in(alloc.clone());
    for i in 0..8u32 {
        array.try_push(i).unwrap();
    }
    assert_eq!(array.capacity(), 8);

    let err = array.try_push(8).unwrap_err();
    match err {
        ArrayError::AllocationFailed { layout } => {
            assert_eq!(layout.size(), HEADER + 16 * size_of::<u32>());
        }
        other => panic!("expected allocation failure, got {other:?}"),
    }
    assert_eq!(alloc.refusals(), 1);
    assert_eq!(array.len(), 8);
    assert_eq!(array.capacity(), 8);
    assert_eq!(array, [0, 1, 2, 3, 4, 5, 6, 7]);

    // The array stays fully usable after the failure.
    assert_eq!(array.pop(), Ok(7));
    array.try_push(70).unwrap();
    assert_eq!(array[7], 70);
}

#[test]
fn failed_insert_and_reserve_are_recoverable() {
    let alloc = LimitedAlloc::new(HEADER + 4 * size_of::<u32>());
    let mut array = GrowableArray::new_in(alloc.clone());
    array.try_extend_from_slice(&[1u32, 2, 3, 4]).unwrap();

    assert!(matches!(
        array.try_insert(0, 0),
        Err(ArrayError::AllocationFailed { .. })
    ));
    assert!(matches!(
        array.try_reserve(5),
        Err(ArrayError::AllocationFailed { .. })
    ));
    assert!(matches!(
        array.try_reserve_additional(1),
        Err(ArrayError::AllocationFailed { .. })
    ));
    assert_eq!(array, [1, 2, 3, 4]);
    assert_eq!(array.capacity(), 4);
}

#[test]
fn failed_from_slice_allocates_nothing() {
    let alloc = LimitedAlloc::new(HEADER);
    let result = GrowableArray::try_from_slice_in(&[1u64, 2], alloc.clone());
    assert!(matches!(result, Err(ArrayError::AllocationFailed { .. })));
    assert!(alloc.counts().is_balanced());
}

#[test]
fn custom_floor_changes_first_allocation() {
    let alloc = CountingAlloc::new();
    let mut array = GrowableArray::with_policy_in(GrowthPolicy::new(16), alloc.clone()).unwrap();
    array.push(1u8);
    assert_eq!(array.capacity(), 16);
    for i in 0..16u8 {
        array.push(i);
    }
    assert_eq!(array.capacity(), 32);
    assert_eq!(alloc.growth_events(), 2);
}
