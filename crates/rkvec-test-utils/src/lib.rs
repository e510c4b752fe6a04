//! Test utilities for rkvec development.
//!
//! Provides instrumented [`RawAlloc`] implementations for observing and
//! provoking allocator behaviour:
//!
//! - [`CountingAlloc`]: forwards to the system allocator and counts
//!   allocations, reallocations, releases and live bytes.
//! - [`LimitedAlloc`]: refuses any block larger than a byte limit, for
//!   exercising the recoverable allocation-failure paths.
//!
//! Element fixtures live in [`fixtures`].

#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::alloc::Layout;
use std::cell::Cell;
use std::ptr::NonNull;
use std::rc::Rc;

use rkvec::{Global, RawAlloc};

pub use fixtures::{DropCounter, Point, Tracked};

/// Counters shared between clones of a [`CountingAlloc`].
#[derive(Debug, Default)]
struct AllocStats {
    allocations: Cell<usize>,
    reallocations: Cell<usize>,
    deallocations: Cell<usize>,
    live_bytes: Cell<usize>,
    peak_bytes: Cell<usize>,
}

impl AllocStats {
    fn bump(counter: &Cell<usize>) {
        counter.set(counter.get() + 1);
    }

    fn resize_live(&self, old: usize, new: usize) {
        let live = self.live_bytes.get() - old + new;
        self.live_bytes.set(live);
        if live > self.peak_bytes.get() {
            self.peak_bytes.set(live);
        }
    }
}

/// System allocator wrapper that records every successful call.
///
/// Clones share counters, so a test can keep one handle while the array
/// owns another.
#[derive(Clone, Debug, Default)]
pub struct CountingAlloc {
    stats: Rc<AllocStats>,
}

impl CountingAlloc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh blocks handed out.
    pub fn allocations(&self) -> usize {
        self.stats.allocations.get()
    }

    /// Successful resizes of an existing block.
    pub fn reallocations(&self) -> usize {
        self.stats.reallocations.get()
    }

    /// Allocations plus reallocations: every time storage was (re)obtained.
    pub fn growth_events(&self) -> usize {
        self.allocations() + self.reallocations()
    }

    pub fn deallocations(&self) -> usize {
        self.stats.deallocations.get()
    }

    /// Bytes currently held by live blocks.
    pub fn live_bytes(&self) -> usize {
        self.stats.live_bytes.get()
    }

    /// Largest value `live_bytes` has reached.
    pub fn peak_bytes(&self) -> usize {
        self.stats.peak_bytes.get()
    }

    /// Every block handed out has been returned.
    pub fn is_balanced(&self) -> bool {
        self.allocations() == self.deallocations() && self.live_bytes() == 0
    }
}

// SAFETY: forwards to `Global`, only adding bookkeeping after success.
unsafe impl RawAlloc for CountingAlloc {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        let block = Global.allocate(layout)?;
        AllocStats::bump(&self.stats.allocations);
        self.stats.resize_live(0, layout.size());
        Some(block)
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        // SAFETY: forwarded from the caller's contract.
        let block = unsafe { Global.reallocate(ptr, old, new_size) }?;
        AllocStats::bump(&self.stats.reallocations);
        self.stats.resize_live(old.size(), new_size);
        Some(block)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded from the caller's contract.
        unsafe { Global.deallocate(ptr, layout) };
        AllocStats::bump(&self.stats.deallocations);
        self.stats.resize_live(layout.size(), 0);
    }
}

/// Allocator that refuses any block larger than `max_bytes`.
///
/// Requests within the limit are served (and counted) by an inner
/// [`CountingAlloc`]. A refused reallocation leaves the original block
/// untouched, as the [`RawAlloc`] contract requires.
#[derive(Clone, Debug)]
pub struct LimitedAlloc {
    max_bytes: usize,
    inner: CountingAlloc,
    refusals: Rc<Cell<usize>>,
}

impl LimitedAlloc {
    pub fn new(max_bytes: usize) -> Self {
        Self {
            max_bytes,
            inner: CountingAlloc::new(),
            refusals: Rc::new(Cell::new(0)),
        }
    }

    /// Counters for the requests that were served.
    pub fn counts(&self) -> &CountingAlloc {
        &self.inner
    }

    /// Number of requests refused for exceeding the limit.
    pub fn refusals(&self) -> usize {
        self.refusals.get()
    }

    fn refuse(&self) -> Option<NonNull<u8>> {
        self.refusals.set(self.refusals.get() + 1);
        None
    }
}

// SAFETY: either refuses without side effects on the block or forwards to
// `CountingAlloc`.
unsafe impl RawAlloc for LimitedAlloc {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        if layout.size() > self.max_bytes {
            return self.refuse();
        }
        self.inner.allocate(layout)
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        if new_size > self.max_bytes {
            return self.refuse();
        }
        // SAFETY: forwarded from the caller's contract.
        unsafe { self.inner.reallocate(ptr, old, new_size) }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded from the caller's contract.
        unsafe { self.inner.deallocate(ptr, layout) }
    }
}
