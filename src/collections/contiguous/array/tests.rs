#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_new_is_zero_filled() {
    let arr = Array::new(5);
    assert_eq!(&*arr, &[0, 0, 0, 0, 0], "A fresh Array should be zeroed.");
    assert_eq!(Array::new(0).len(), 0, "A zero-length Array should be empty.");
}

#[test]
fn test_insert_shifts_right() {
    let mut arr = Array::from([1, 2, 4, 8, 16]);

    arr.insert(0, 0);
    assert_eq!(
        &*arr,
        &[0, 1, 2, 4, 8, 16],
        "Inserting at the front should shift every element right."
    );

    arr.insert(6, 32);
    arr.insert(7, 64);
    assert_eq!(arr.len(), 8, "Each insert should grow the Array by one.");
    assert_eq!(
        arr[arr.len() - 1],
        64,
        "Inserting at len should append."
    );

    arr.insert(3, -5);
    assert_eq!(
        &*arr,
        &[0, 1, 2, -5, 4, 8, 16, 32, 64],
        "Inserting in the middle should leave both sides intact."
    );
}

#[test]
fn test_insert_out_of_bounds_is_a_noop() {
    let mut arr = Array::from([1, 2, 3]);
    assert_eq!(
        arr.try_insert(4, 99),
        Err(IndexOutOfBounds { index: 4, len: 3 }),
        "An index past len should be rejected."
    );
    assert_eq!(&*arr, &[1, 2, 3], "A rejected insert should not mutate.");

    assert_panics!(
        {
            let mut arr = Array::from([1, 2, 3]);
            arr.insert(4, 99)
        },
        "The panicking wrapper should panic on an out-of-bounds index."
    );
}

#[test]
fn test_remove_shifts_left() {
    let mut arr = Array::from([0, 1, 2, 4, 8, 16]);

    assert_eq!(arr.remove(2), 2, "Remove should return the removed value.");
    assert_eq!(
        &*arr,
        &[0, 1, 4, 8, 16],
        "Remove should close the gap by shifting left."
    );

    assert_eq!(arr.remove(0), 0);
    assert_eq!(arr.remove(3), 16, "The last element should be removable.");
    assert_eq!(&*arr, &[1, 4, 8]);
}

#[test]
fn test_remove_bound_excludes_len() {
    // The original accepted index == len here; that off-by-one is fixed deliberately.
    let mut arr = Array::from([1, 2, 3]);
    assert_eq!(
        arr.try_remove(3),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "index == len should be out of bounds for remove."
    );
    assert_eq!(&*arr, &[1, 2, 3], "A rejected remove should not mutate.");

    let mut empty = Array::new(0);
    assert!(
        empty.try_remove(0).is_err(),
        "Removing from an empty Array should be rejected."
    );
}

#[test]
fn test_insert_remove_round_trip() {
    let original = Array::from([1, 2, 4, 8, 16]);

    for index in 0..=original.len() {
        let mut arr = original.clone();
        arr.insert(index, 99);
        assert_eq!(
            arr.remove(index),
            99,
            "Remove should return the value just inserted."
        );
        assert_eq!(
            arr, original,
            "Insert then remove at the same index should be a no-op."
        );
    }
}

#[test]
fn test_size_accounting() {
    let mut arr = Array::new(3);

    for i in 0..4 {
        arr.insert(0, i);
    }
    assert_eq!(arr.len(), 7, "Size should be initial + inserts.");

    arr.remove(0);
    arr.remove(0);
    assert_eq!(arr.len(), 5, "Size should be initial + inserts - removes.");
}

#[test]
fn test_append_then_search() {
    let mut arr = Array::from([1, 2, 4, 8]);
    arr.insert(arr.len(), 16);
    assert_eq!(
        arr.search(16),
        Some(arr.len() - 1),
        "An appended value should be found at len - 1."
    );
    assert_eq!(arr.search(7), None, "An absent value should yield None.");
}

#[test]
fn test_search_returns_first_match() {
    let arr = Array::from([5, 3, 5, 1]);
    assert_eq!(arr.search(5), Some(0), "The first of two matches should win.");
}

#[test]
fn test_bounds_checked_access() {
    let mut arr = Array::from([1, 2, 3]);
    arr[1] = 20;
    assert_eq!(arr[1], 20, "Mutation through DerefMut should stick.");
    assert_eq!(arr.get(3), None, "Slice get should bounds-check reads.");
}

#[test]
fn test_display() {
    assert_eq!(
        Array::from([1, 2, 4]).to_string(),
        "[1, 2, 4]",
        "Display should be comma-separated with no trailing comma."
    );
    assert_eq!(Array::new(0).to_string(), "[]");
}
