//! Owner of the single header-prefixed allocation.
//!
//! [`RawArray`] allocates, resizes and releases the block, and keeps the
//! header in sync. It never reads, writes or drops elements: tracking which
//! slots are initialised is the caller's job, and `len` is stored here only
//! because it lives in the same header as `cap`.

use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::alloc::RawAlloc;
use crate::error::ArrayError;
use crate::header::{allocation_layout, data_offset, Header};

pub(crate) struct RawArray<T, A: RawAlloc> {
    /// `None` exactly when capacity is zero. When `Some`, points at a live
    /// block from `alloc` sized by `allocation_layout::<T>(header.cap)`.
    header: Option<NonNull<Header>>,
    alloc: A,
    _marker: PhantomData<T>,
}

// SAFETY: `RawArray` uniquely owns its block, like `Vec<T>` does.
unsafe impl<T: Send, A: RawAlloc + Send> Send for RawArray<T, A> {}
// SAFETY: shared access only hands out shared access to `T`.
unsafe impl<T: Sync, A: RawAlloc + Sync> Sync for RawArray<T, A> {}

impl<T, A: RawAlloc> RawArray<T, A> {
    pub(crate) const fn new_in(alloc: A) -> Self {
        Self {
            header: None,
            alloc,
            _marker: PhantomData,
        }
    }

    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    fn header(&self) -> Option<&Header> {
        // SAFETY: a `Some` header points at a live, initialised `Header`
        // that only `&mut self` methods write to.
        self.header.map(|h| unsafe { &*h.as_ptr() })
    }

    pub(crate) fn len(&self) -> usize {
        self.header().map_or(0, |h| h.len)
    }

    pub(crate) fn capacity(&self) -> usize {
        self.header().map_or(0, |h| h.cap)
    }

    /// Size of the backing block in bytes, header included.
    pub(crate) fn heap_bytes(&self) -> usize {
        match self.header() {
            Some(h) => allocation_layout::<T>(h.cap).map_or(0, |layout| layout.size()),
            None => 0,
        }
    }

    /// Pointer to slot 0. Dangling (but aligned) when nothing is allocated.
    pub(crate) fn data(&self) -> *mut T {
        match self.header {
            // SAFETY: the block is at least `data_offset::<T>()` bytes long.
            Some(h) => unsafe { h.as_ptr().cast::<u8>().add(data_offset::<T>()).cast::<T>() },
            None => NonNull::dangling().as_ptr(),
        }
    }

    /// Record a new element count.
    ///
    /// # Safety
    ///
    /// `len <= capacity()`, and the caller takes responsibility for slots
    /// `[0, len)` being initialised before they are read or dropped.
    pub(crate) unsafe fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        if let Some(h) = self.header {
            // SAFETY: exclusive access through `&mut self`.
            unsafe { (*h.as_ptr()).len = len };
        }
    }

    /// Resize the block to exactly `new_cap` slots, preserving the first
    /// `len()` slots by bulk copy.
    ///
    /// `new_cap == 0` releases the block. On error the current block and
    /// header are untouched.
    pub(crate) fn resize(&mut self, new_cap: usize) -> Result<(), ArrayError> {
        let len = self.len();
        debug_assert!(new_cap >= len);
        if new_cap == self.capacity() {
            return Ok(());
        }
        if new_cap == 0 {
            self.release();
            return Ok(());
        }

        let layout = allocation_layout::<T>(new_cap)?;
        let block = match self.header {
            None => self.alloc.allocate(layout),
            Some(h) => {
                let old = allocation_layout::<T>(self.capacity())?;
                // SAFETY: `h` came from `self.alloc` with layout `old`; the
                // new layout shares its alignment and has a non-zero size.
                unsafe { self.alloc.reallocate(h.cast(), old, layout.size()) }
            }
        };
        let Some(block) = block else {
            return Err(ArrayError::AllocationFailed { layout });
        };

        let header = block.cast::<Header>();
        // SAFETY: the block is aligned for `Header` and large enough for it.
        unsafe { header.as_ptr().write(Header { len, cap: new_cap }) };
        self.header = Some(header);
        Ok(())
    }

    /// Return the block to the allocator without touching elements.
    pub(crate) fn release(&mut self) {
        let Some(h) = self.header.take() else {
            return;
        };
        // SAFETY: reading the header before the block goes away.
        let cap = unsafe { (*h.as_ptr()).cap };
        if let Ok(layout) = allocation_layout::<T>(cap) {
            // SAFETY: `h` is live, came from `self.alloc`, and is sized by
            // `layout`; it is no longer reachable after `take()`.
            unsafe { self.alloc.deallocate(h.cast(), layout) };
        }
    }
}

impl<T, A: RawAlloc> Drop for RawArray<T, A> {
    fn drop(&mut self) {
        self.release();
    }
}
