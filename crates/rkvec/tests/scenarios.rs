//! End-to-end usage scenarios for `GrowableArray`.

use rkvec::{growable, ArrayError, GrowableArray};
use rkvec_test_utils::{DropCounter, Point};

#[test]
fn numbers_can_be_pushed() {
    let mut array = GrowableArray::new();
    array.push(123);
    assert_eq!(array[0], 123);
    assert_eq!(array.len(), 1);
    array.free();
}

#[test]
fn structs_can_be_pushed() {
    let mut array = GrowableArray::new();
    array.push(Point { x: 1, y: 2 });
    assert_eq!(array[0].x, 1);
    assert_eq!(array[0].y, 2);
    array.free();
}

#[test]
fn array_can_be_initialised_from_int_sequence() {
    let array = GrowableArray::from_slice(&[1, 2, 3]);
    assert_eq!(array[0], 1);
    assert_eq!(array[1], 2);
    assert_eq!(array[2], 3);
    assert_eq!(array.len(), 3);
}

#[test]
fn array_can_be_initialised_from_struct_sequence() {
    let array = growable![Point::new(1, 2), Point::new(3, 4), Point::new(5, 6)];
    assert_eq!(array[0].x, 1);
    assert_eq!(array[1].x, 3);
    assert_eq!(array[2].x, 5);
}

#[test]
fn mixed_workload_keeps_contents_consistent() {
    let mut array = GrowableArray::new();
    for i in 0..100 {
        array.push(i);
    }
    // Drop the evens from the front half, keeping order.
    let mut i = 0;
    while i < array.len() && array[i] < 50 {
        if array[i] % 2 == 0 {
            array.delete_at(i).unwrap();
        } else {
            i += 1;
        }
    }
    assert_eq!(array.len(), 75);
    assert_eq!(&array[..3], &[1, 3, 5]);

    array.insert_from_slice(0, &[-3, -2, -1]).unwrap();
    assert_eq!(array[0], -3);
    assert_eq!(array[3], 1);

    array.delete_range(3, 25).unwrap();
    assert_eq!(array[3], 50);

    let last = array.delete_swap(0).unwrap();
    assert_eq!(last, -3);
    assert_eq!(array[0], 99);
}

#[test]
fn errors_leave_array_untouched() {
    let mut array = GrowableArray::from_slice(&[1, 2, 3]);
    assert_eq!(
        array.insert(4, 0),
        Err(ArrayError::OutOfBounds { index: 4, len: 3 })
    );
    assert_eq!(
        array.delete_swap(3),
        Err(ArrayError::OutOfBounds { index: 3, len: 3 })
    );
    assert!(array.delete_range(1, 3).is_err());
    assert_eq!(array, [1, 2, 3]);
}

#[test]
fn capacity_never_shrinks_while_growing() {
    let mut array = GrowableArray::new();
    let mut last = 0;
    for i in 0..1000u32 {
        if i % 7 == 0 && !array.is_empty() {
            array.pop().unwrap();
        } else {
            array.push(i);
        }
        assert!(array.capacity() >= last);
        assert!(array.len() <= array.capacity());
        last = array.capacity();
    }
}

#[test]
fn every_element_dropped_exactly_once() {
    let counter = DropCounter::new();
    {
        let mut array = GrowableArray::new();
        for i in 0..50 {
            array.push(counter.track(i));
        }
        drop(array.pop().unwrap());
        drop(array.delete_at(10).unwrap());
        drop(array.delete_swap(0).unwrap());
        array.delete_range(5, 5).unwrap();
        array.truncate(30);
        assert_eq!(counter.dropped(), 3 + 5 + 12);

        let mut iter = array.into_iter();
        drop(iter.next());
        drop(iter.next_back());
    }
    assert_eq!(counter.dropped(), 50);
}

#[test]
fn owned_iteration_round_trip() {
    let array: GrowableArray<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let back: Vec<String> = array.into_iter().rev().collect();
    assert_eq!(back, vec!["c", "b", "a"]);
}
