//! Owning iteration over a [`GrowableArray`].

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;
use std::slice;

use crate::alloc::{Global, RawAlloc};
use crate::array::GrowableArray;
use crate::raw::RawArray;

/// Iterator that moves elements out of a [`GrowableArray`].
///
/// Created by `GrowableArray::into_iter`. Elements not yielded are dropped
/// with the iterator, and the allocation is released afterwards.
pub struct IntoIter<T, A: RawAlloc = Global> {
    /// Owns the block. Its header length is left stale; `start..end` is
    /// the authoritative live range.
    raw: RawArray<T, A>,
    start: usize,
    end: usize,
}

impl<T, A: RawAlloc> IntoIter<T, A> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[start, end)` are initialised and not yet moved out.
        unsafe { slice::from_raw_parts(self.raw.data().add(self.start), self.end - self.start) }
    }
}

impl<T, A: RawAlloc> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start < end`, so the slot is initialised; advancing
        // `start` retires it.
        let value = unsafe { self.raw.data().add(self.start).read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T, A: RawAlloc> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: slot `end` was initialised and is now outside the range.
        Some(unsafe { self.raw.data().add(self.end).read() })
    }
}

impl<T, A: RawAlloc> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: RawAlloc> FusedIterator for IntoIter<T, A> {}

impl<T: fmt::Debug, A: RawAlloc> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, A: RawAlloc> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        // SAFETY: drops the elements never yielded; `raw` frees the block.
        unsafe {
            let rest = self.raw.data().add(self.start);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(rest, self.end - self.start));
        }
    }
}

impl<T, A: RawAlloc> IntoIterator for GrowableArray<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> IntoIter<T, A> {
        let end = self.len();
        IntoIter {
            raw: self.into_raw(),
            start: 0,
            end,
        }
    }
}
