//! Reusable element fixtures.
//!
//! - [`Point`]: a small composite `Copy` value.
//! - [`DropCounter`] / [`Tracked`]: values that report their own drops, for
//!   checking that every element is dropped exactly once.

use std::cell::Cell;
use std::rc::Rc;

/// Two-field composite element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Shared drop tally for [`Tracked`] values.
#[derive(Clone, Debug, Default)]
pub struct DropCounter {
    dropped: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so its drop is counted here.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        Tracked {
            value,
            dropped: self.dropped.clone(),
        }
    }

    /// Number of tracked values dropped so far.
    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }
}

/// A value that bumps its [`DropCounter`] when dropped.
#[derive(Debug)]
pub struct Tracked<T> {
    pub value: T,
    dropped: Rc<Cell<usize>>,
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            dropped: self.dropped.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.dropped.set(self.dropped.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_sees_drops() {
        let counter = DropCounter::new();
        let a = counter.track(1);
        let b = a.clone();
        drop(a);
        assert_eq!(counter.dropped(), 1);
        assert_eq!(b.value, 1);
        drop(b);
        assert_eq!(counter.dropped(), 2);
    }
}
