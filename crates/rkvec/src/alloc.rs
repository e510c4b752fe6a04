//! Allocator seam used by array storage.
//!
//! [`RawAlloc`] is the minimal interface the storage layer needs: allocate,
//! resize in place or by move, and release. [`Global`] forwards to the
//! process allocator. Instrumented implementations (allocation counting,
//! injected failure) live in the test utilities crate.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// A byte allocator that array storage draws its single allocation from.
///
/// # Safety
///
/// Implementors must uphold the contract of [`std::alloc::GlobalAlloc`]:
///
/// - `allocate` returns either `None` or a pointer to a fresh block valid
///   for reads and writes of `layout.size()` bytes, aligned to
///   `layout.align()`.
/// - `reallocate` returns either `None`, leaving the original block
///   untouched and still owned by the caller, or a block of `new_size`
///   bytes with the old contents preserved up to the smaller size. The old
///   block is released only on success.
/// - `deallocate` accepts any block previously handed out by the same
///   allocator value (or a clone of it) with the layout it was last sized to.
pub unsafe trait RawAlloc {
    /// Allocate a block for `layout`. `layout.size()` is never zero.
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Resize a block to `new_size` bytes, keeping `old.align()`.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by this allocator for layout `old`,
    /// and `new_size` must be non-zero and not overflow `isize::MAX` when
    /// rounded up to `old.align()`.
    unsafe fn reallocate(&self, ptr: NonNull<u8>, old: Layout, new_size: usize)
        -> Option<NonNull<u8>>;

    /// Release a block.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by this allocator for `layout` and not
    /// released since.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The process-wide allocator (`std::alloc`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Global;

// SAFETY: every method forwards to the matching `std::alloc` function,
// which implements the `GlobalAlloc` contract.
unsafe impl RawAlloc for Global {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        debug_assert!(layout.size() > 0);
        // SAFETY: callers never request zero-sized blocks.
        NonNull::new(unsafe { alloc::alloc(layout) })
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        // SAFETY: forwarded from the caller's contract.
        NonNull::new(unsafe { alloc::realloc(ptr.as_ptr(), old, new_size) })
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded from the caller's contract.
        unsafe { alloc::dealloc(ptr.as_ptr(), layout) }
    }
}

// SAFETY: a shared reference to an allocator forwards to the allocator.
unsafe impl<A: RawAlloc + ?Sized> RawAlloc for &A {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        (**self).allocate(layout)
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        // SAFETY: forwarded from the caller's contract.
        unsafe { (**self).reallocate(ptr, old, new_size) }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded from the caller's contract.
        unsafe { (**self).deallocate(ptr, layout) }
    }
}
