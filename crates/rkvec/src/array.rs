//! The growable array type and its operations.
//!
//! [`GrowableArray`] wraps the header-prefixed allocation and owns the
//! elements in slots `[0, len)`. All growth goes through the
//! array's [`GrowthPolicy`].

use std::borrow::{Borrow, BorrowMut};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::{ManuallyDrop, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::alloc::{Global, RawAlloc};
use crate::config::GrowthPolicy;
use crate::error::ArrayError;
use crate::raw::RawArray;

/// A contiguous, automatically growing array of `T`.
///
/// The handle is one pointer to a heap block that starts with the length and
/// capacity, followed by the elements. Indexing and all slice methods come
/// from `Deref<Target = [T]>`.
///
/// Operations that may reallocate take `&mut self`, which keeps references
/// obtained before the call from being used after it. Checked operations
/// return [`ArrayError`]; allocation failure aborts the process unless the
/// `try_*` variant is used.
pub struct GrowableArray<T, A: RawAlloc = Global> {
    raw: RawArray<T, A>,
    policy: GrowthPolicy,
}

impl<T> GrowableArray<T> {
    /// Create an empty array. Does not allocate.
    ///
    /// ```
    /// use rkvec::GrowableArray;
    ///
    /// let array: GrowableArray<i32> = GrowableArray::new();
    /// assert_eq!(array.len(), 0);
    /// assert_eq!(array.capacity(), 0);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    /// Alias of [`new`](Self::new).
    #[must_use]
    pub const fn empty() -> Self {
        Self::new()
    }

    /// Create an empty array with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut array = Self::new();
        array.reserve_exact(capacity);
        array
    }

    /// Create an empty array that grows by `policy`.
    ///
    /// Fails with [`ArrayError::InvalidPolicy`] if the policy does not
    /// validate.
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self, ArrayError> {
        Self::with_policy_in(policy, Global)
    }

    /// Create an array holding clones of `items`, in order.
    ///
    /// Capacity is exactly `items.len()`.
    ///
    /// ```
    /// use rkvec::GrowableArray;
    ///
    /// let array = GrowableArray::from_slice(&[1, 2, 3]);
    /// assert_eq!(array, [1, 2, 3]);
    /// assert_eq!(array.capacity(), 3);
    /// ```
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        Self::try_from_slice(items).unwrap_or_else(|err| fail(err))
    }

    /// Fallible form of [`from_slice`](Self::from_slice).
    pub fn try_from_slice(items: &[T]) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        Self::try_from_slice_in(items, Global)
    }
}

impl<T, A: RawAlloc> GrowableArray<T, A> {
    /// Create an empty array backed by `alloc`. Does not allocate.
    #[must_use]
    pub const fn new_in(alloc: A) -> Self {
        Self {
            raw: RawArray::new_in(alloc),
            policy: GrowthPolicy::DEFAULT,
        }
    }

    /// Create an empty array backed by `alloc` that grows by `policy`.
    pub fn with_policy_in(policy: GrowthPolicy, alloc: A) -> Result<Self, ArrayError> {
        policy.validate()?;
        Ok(Self {
            raw: RawArray::new_in(alloc),
            policy,
        })
    }

    /// Create an array backed by `alloc` holding clones of `items`.
    pub fn try_from_slice_in(items: &[T], alloc: A) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        let mut array = Self::new_in(alloc);
        array.try_reserve_exact(items.len())?;
        array.extend_from_slice(items);
        Ok(array)
    }

    /// The allocator backing this array.
    pub fn allocator(&self) -> &A {
        self.raw.allocator()
    }

    /// The growth policy this array uses.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of slots allocated.
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Size of the backing allocation in bytes, header included.
    ///
    /// Zero when nothing is allocated.
    pub fn heap_bytes(&self) -> usize {
        self.raw.heap_bytes()
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `data()` is aligned and non-null, and `[0, len)` are
        // initialised.
        unsafe { slice::from_raw_parts(self.raw.data(), self.len()) }
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, with exclusive access through `&mut self`.
        unsafe { slice::from_raw_parts_mut(self.raw.data(), self.len()) }
    }

    /// Pointer to the first slot.
    ///
    /// Invalidated by any operation that reallocates.
    pub fn as_ptr(&self) -> *const T {
        self.raw.data()
    }

    /// Mutable pointer to the first slot.
    ///
    /// Invalidated by any operation that reallocates.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.raw.data()
    }

    /// Checked element access.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len();
        self.as_slice()
            .get(index)
            .ok_or(ArrayError::OutOfBounds { index, len })
    }

    /// Checked mutable element access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::OutOfBounds { index, len })
    }

    // ── Capacity management ──────────────────────────────────────────

    /// Ensure `capacity() >= min_capacity`, growing by the policy.
    ///
    /// A no-op when the capacity already suffices. Otherwise the new
    /// capacity is `max(min_capacity, 2 * capacity)`, or
    /// `max(min_capacity, policy.min_capacity)` from empty. On error the
    /// array is unchanged.
    pub fn try_reserve(&mut self, min_capacity: usize) -> Result<(), ArrayError> {
        let capacity = self.capacity();
        if min_capacity <= capacity {
            return Ok(());
        }
        let new_capacity = self.policy.grown_capacity(capacity, min_capacity)?;
        self.raw.resize(new_capacity)
    }

    /// Infallible form of [`try_reserve`](Self::try_reserve).
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow or when the policy limit is exceeded.
    /// Aborts the process if the allocator fails.
    pub fn reserve(&mut self, min_capacity: usize) {
        if let Err(err) = self.try_reserve(min_capacity) {
            fail(err);
        }
    }

    /// Ensure room for `additional` more elements.
    pub fn try_reserve_additional(&mut self, additional: usize) -> Result<(), ArrayError> {
        let required = self
            .len()
            .checked_add(additional)
            .ok_or(ArrayError::CapacityOverflow)?;
        self.try_reserve(required)
    }

    /// Infallible form of [`try_reserve_additional`](Self::try_reserve_additional).
    pub fn reserve_additional(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve_additional(additional) {
            fail(err);
        }
    }

    /// Ensure `capacity() >= min_capacity` without over-allocating.
    pub fn try_reserve_exact(&mut self, min_capacity: usize) -> Result<(), ArrayError> {
        if min_capacity <= self.capacity() {
            return Ok(());
        }
        if min_capacity > self.policy.max_capacity {
            return Err(ArrayError::CapacityExceeded {
                requested: min_capacity,
                max: self.policy.max_capacity,
            });
        }
        self.raw.resize(min_capacity)
    }

    /// Infallible form of [`try_reserve_exact`](Self::try_reserve_exact).
    pub fn reserve_exact(&mut self, min_capacity: usize) {
        if let Err(err) = self.try_reserve_exact(min_capacity) {
            fail(err);
        }
    }

    /// Shrink the allocation to exactly `len()` slots.
    ///
    /// Releases the allocation entirely when the array is empty.
    pub fn shrink_to_fit(&mut self) {
        let len = self.len();
        if len < self.capacity() {
            if let Err(err) = self.raw.resize(len) {
                fail(err);
            }
        }
    }

    // ── Growing operations ───────────────────────────────────────────

    /// Append `value`, growing if needed. On error `value` is dropped and
    /// the array is unchanged.
    pub fn try_push(&mut self, value: T) -> Result<(), ArrayError> {
        let len = self.len();
        if len == self.capacity() {
            self.try_reserve_additional(1)?;
        }
        // SAFETY: `len < capacity`, so slot `len` is allocated and unused.
        unsafe {
            self.raw.data().add(len).write(value);
            self.raw.set_len(len + 1);
        }
        Ok(())
    }

    /// Append `value`, growing if needed.
    ///
    /// ```
    /// use rkvec::GrowableArray;
    ///
    /// let mut array = GrowableArray::new();
    /// array.push(123);
    /// assert_eq!(array[0], 123);
    /// ```
    pub fn push(&mut self, value: T) {
        if let Err(err) = self.try_push(value) {
            fail(err);
        }
    }

    /// Grow `len` by `n` and return the new, uninitialised slots.
    ///
    /// # Safety
    ///
    /// Every returned slot must be written before the array is read,
    /// dropped, or passed to any other operation. Until then the array
    /// claims ownership of uninitialised memory.
    pub unsafe fn add_uninitialized(&mut self, n: usize) -> &mut [MaybeUninit<T>] {
        let len = self.len();
        self.reserve_additional(n);
        // SAFETY: `len + n <= capacity`; the caller initialises the slots.
        unsafe {
            self.raw.set_len(len + n);
            slice::from_raw_parts_mut(self.raw.data().add(len).cast::<MaybeUninit<T>>(), n)
        }
    }

    /// Append clones of `items`, reserving once up front.
    pub fn try_extend_from_slice(&mut self, items: &[T]) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        self.try_reserve_additional(items.len())?;
        for item in items {
            self.try_push(item.clone())?;
        }
        Ok(())
    }

    /// Infallible form of [`try_extend_from_slice`](Self::try_extend_from_slice).
    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        if let Err(err) = self.try_extend_from_slice(items) {
            fail(err);
        }
    }

    /// Set the length to `new_len`, appending clones of `value` or dropping
    /// the tail as needed.
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        let len = self.len();
        if new_len <= len {
            self.truncate(new_len);
            return;
        }
        self.reserve_additional(new_len - len);
        for _ in len + 1..new_len {
            self.push(value.clone());
        }
        self.push(value);
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// Fails with [`ArrayError::OutOfBounds`] when `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        let len = self.len();
        if index > len {
            return Err(ArrayError::OutOfBounds { index, len });
        }
        self.try_reserve_additional(1)?;
        // SAFETY: `len + 1 <= capacity`; the tail moves into allocated
        // slots and slot `index` is overwritten without being dropped.
        unsafe {
            let slot = self.raw.data().add(index);
            ptr::copy(slot, slot.add(1), len - index);
            slot.write(value);
            self.raw.set_len(len + 1);
        }
        Ok(())
    }

    /// Insert `value` at `index`. Aborts if the allocator fails.
    ///
    /// ```
    /// use rkvec::GrowableArray;
    ///
    /// let mut array = GrowableArray::from_slice(&[10, 30]);
    /// array.insert(1, 20).unwrap();
    /// assert_eq!(array, [10, 20, 30]);
    /// assert!(array.insert(9, 0).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        match self.try_insert(index, value) {
            Err(err @ ArrayError::OutOfBounds { .. }) => Err(err),
            Err(err) => fail(err),
            Ok(()) => Ok(()),
        }
    }

    /// Open `n` uninitialised slots at `index`, shifting the tail right.
    ///
    /// # Safety
    ///
    /// As for [`add_uninitialized`](Self::add_uninitialized): every
    /// returned slot must be written before the array is used again.
    pub unsafe fn insert_uninitialized(
        &mut self,
        index: usize,
        n: usize,
    ) -> Result<&mut [MaybeUninit<T>], ArrayError> {
        let len = self.len();
        if index > len {
            return Err(ArrayError::OutOfBounds { index, len });
        }
        self.reserve_additional(n);
        // SAFETY: `len + n <= capacity`; the caller initialises the gap.
        unsafe {
            let gap = self.raw.data().add(index);
            ptr::copy(gap, gap.add(n), len - index);
            self.raw.set_len(len + n);
            Ok(slice::from_raw_parts_mut(gap.cast::<MaybeUninit<T>>(), n))
        }
    }

    /// Insert clones of `items` at `index`, preserving order on both sides.
    ///
    /// If a clone panics, the elements after `index` are leaked rather than
    /// dropped twice.
    pub fn insert_from_slice(&mut self, index: usize, items: &[T]) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        let len = self.len();
        if index > len {
            return Err(ArrayError::OutOfBounds { index, len });
        }
        let n = items.len();
        self.reserve_additional(n);
        // SAFETY: `len + n <= capacity`. While the gap is being filled the
        // length only covers `[0, index)`, so a panic leaves no
        // uninitialised slot inside the live range.
        unsafe {
            let gap = self.raw.data().add(index);
            ptr::copy(gap, gap.add(n), len - index);
            self.raw.set_len(index);
            for (offset, item) in items.iter().enumerate() {
                gap.add(offset).write(item.clone());
            }
            self.raw.set_len(len + n);
        }
        Ok(())
    }

    // ── Shrinking operations ─────────────────────────────────────────

    /// Remove and return the last element.
    ///
    /// Fails with [`ArrayError::Empty`] on an empty array.
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        let len = self.len();
        if len == 0 {
            return Err(ArrayError::Empty);
        }
        // SAFETY: slot `len - 1` is initialised and leaves the live range
        // before it is read out.
        unsafe {
            self.raw.set_len(len - 1);
            Ok(self.raw.data().add(len - 1).read())
        }
    }

    fn check_index(&self, index: usize) -> Result<usize, ArrayError> {
        let len = self.len();
        if len == 0 {
            return Err(ArrayError::Empty);
        }
        if index >= len {
            return Err(ArrayError::OutOfBounds { index, len });
        }
        Ok(len)
    }

    /// Remove and return the element at `index`, shifting the tail left.
    ///
    /// Preserves the order of the remaining elements.
    pub fn delete_at(&mut self, index: usize) -> Result<T, ArrayError> {
        let len = self.check_index(index)?;
        // SAFETY: `index < len`; the value is moved out before its slot is
        // overwritten by the shifted tail.
        unsafe {
            let slot = self.raw.data().add(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, len - index - 1);
            self.raw.set_len(len - 1);
            Ok(value)
        }
    }

    /// Drop `count` elements starting at `index`, shifting the tail left.
    ///
    /// Fails with [`ArrayError::RangeOutOfBounds`] when
    /// `index + count > len`.
    pub fn delete_range(&mut self, index: usize, count: usize) -> Result<(), ArrayError> {
        let len = self.len();
        let end = index
            .checked_add(count)
            .filter(|&end| end <= len)
            .ok_or(ArrayError::RangeOutOfBounds { index, count, len })?;
        if count == 0 {
            return Ok(());
        }
        // SAFETY: `[index, end)` is initialised. The length is cut to
        // `index` first, so a panicking destructor leaks the tail instead
        // of exposing dropped slots.
        unsafe {
            self.raw.set_len(index);
            let start = self.raw.data().add(index);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(start, count));
            ptr::copy(start.add(count), start, len - end);
            self.raw.set_len(len - count);
        }
        Ok(())
    }

    /// Remove and return the element at `index`, moving the last element
    /// into its slot. O(1), does not preserve order.
    ///
    /// ```
    /// use rkvec::GrowableArray;
    ///
    /// let mut array = GrowableArray::from_slice(&[10, 20, 30, 40]);
    /// assert_eq!(array.delete_swap(1), Ok(20));
    /// assert_eq!(array, [10, 40, 30]);
    /// ```
    pub fn delete_swap(&mut self, index: usize) -> Result<T, ArrayError> {
        let len = self.check_index(index)?;
        let last = len - 1;
        // SAFETY: `index` and `last` are initialised. The last element is
        // moved (not copied) into the vacated slot.
        unsafe {
            let base = self.raw.data();
            let value = base.add(index).read();
            if index != last {
                ptr::copy_nonoverlapping(base.add(last), base.add(index), 1);
            }
            self.raw.set_len(last);
            Ok(value)
        }
    }

    /// Drop every element past `new_len`. No-op if `new_len >= len`.
    pub fn truncate(&mut self, new_len: usize) {
        let len = self.len();
        if new_len >= len {
            return;
        }
        // SAFETY: `[new_len, len)` is initialised and leaves the live range
        // before it is dropped.
        unsafe {
            self.raw.set_len(new_len);
            let tail = self.raw.data().add(new_len);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(tail, len - new_len));
        }
    }

    /// Drop every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Set the length directly, growing capacity if `new_len` exceeds it.
    ///
    /// Shrinking this way forgets the dropped-off elements without running
    /// their destructors.
    ///
    /// # Safety
    ///
    /// When growing, slots `[len, new_len)` are uninitialised and must be
    /// written before the array is read, dropped, or used again.
    pub unsafe fn set_length(&mut self, new_len: usize) {
        if new_len > self.capacity() {
            self.reserve(new_len);
        }
        // SAFETY: `new_len <= capacity`; initialisation is on the caller.
        unsafe { self.raw.set_len(new_len) };
    }

    /// Drop every element and release the allocation.
    ///
    /// Consumes the handle, so it cannot be used or freed again.
    pub fn free(self) {
        drop(self);
    }

    /// Hand the allocation to an owning iterator.
    pub(crate) fn into_raw(self) -> RawArray<T, A> {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so `raw` is moved out exactly once.
        unsafe { ptr::read(&this.raw) }
    }
}

/// Report an unrecoverable growth failure.
///
/// Allocator exhaustion prints a diagnostic and aborts through
/// [`std::alloc::handle_alloc_error`]; every other error is a panic.
#[cold]
#[inline(never)]
fn fail(err: ArrayError) -> ! {
    match err {
        ArrayError::AllocationFailed { layout } => {
            eprintln!("rkvec: allocation of {} bytes failed", layout.size());
            std::alloc::handle_alloc_error(layout)
        }
        other => panic!("rkvec: {other}"),
    }
}

impl<T, A: RawAlloc> Drop for GrowableArray<T, A> {
    fn drop(&mut self) {
        // SAFETY: drops the live elements; `raw` frees the block afterwards.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T, A: RawAlloc> Deref for GrowableArray<T, A> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: RawAlloc> DerefMut for GrowableArray<T, A> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: RawAlloc> AsRef<[T]> for GrowableArray<T, A> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, A: RawAlloc> AsMut<[T]> for GrowableArray<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, A: RawAlloc> Borrow<[T]> for GrowableArray<T, A> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T, A: RawAlloc> BorrowMut<[T]> for GrowableArray<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, A: RawAlloc + Default> Default for GrowableArray<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T: Clone, A: RawAlloc + Clone> Clone for GrowableArray<T, A> {
    fn clone(&self) -> Self {
        let mut array = Self {
            raw: RawArray::new_in(self.allocator().clone()),
            policy: self.policy,
        };
        array.reserve_exact(self.len());
        array.extend_from_slice(self);
        array
    }
}

impl<T: fmt::Debug, A: RawAlloc> fmt::Debug for GrowableArray<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash, A: RawAlloc> Hash for GrowableArray<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, U, A, B> PartialEq<GrowableArray<U, B>> for GrowableArray<T, A>
where
    T: PartialEq<U>,
    A: RawAlloc,
    B: RawAlloc,
{
    fn eq(&self, other: &GrowableArray<U, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: RawAlloc> Eq for GrowableArray<T, A> {}

impl<T: PartialEq<U>, U, A: RawAlloc, const N: usize> PartialEq<[U; N]> for GrowableArray<T, A> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, A: RawAlloc> PartialEq<[U]> for GrowableArray<T, A> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, A: RawAlloc> PartialEq<&[U]> for GrowableArray<T, A> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, A: RawAlloc> PartialEq<Vec<U>> for GrowableArray<T, A> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Clone> From<&[T]> for GrowableArray<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T, const N: usize> From<[T; N]> for GrowableArray<T> {
    fn from(items: [T; N]) -> Self {
        let mut array = Self::new();
        array.reserve_exact(N);
        array.extend(items);
        array
    }
}

impl<T> From<Vec<T>> for GrowableArray<T> {
    fn from(items: Vec<T>) -> Self {
        let mut array = Self::new();
        array.reserve_exact(items.len());
        array.extend(items);
        array
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T, A: RawAlloc> Extend<T> for GrowableArray<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve_additional(lower);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a, A: RawAlloc> Extend<&'a T> for GrowableArray<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        <Self as Extend<T>>::extend(self, iter.into_iter().copied());
    }
}

impl<'a, T, A: RawAlloc> IntoIterator for &'a GrowableArray<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: RawAlloc> IntoIterator for &'a mut GrowableArray<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
