//! Allocation header and layout arithmetic.
//!
//! An array allocation is one block laid out as `Header`, then padding up
//! to `align_of::<T>()`, then `capacity` slots of `T`. The data offset is a
//! compile-time constant per element type.

use std::alloc::Layout;
use std::mem;

use crate::error::ArrayError;

/// Metadata stored at the start of every array allocation.
#[repr(C)]
#[derive(Debug)]
pub(crate) struct Header {
    /// Number of initialised elements.
    pub(crate) len: usize,
    /// Number of element slots in the allocation.
    pub(crate) cap: usize,
}

/// Byte offset of slot 0 from the start of the allocation.
pub(crate) const fn data_offset<T>() -> usize {
    let header = mem::size_of::<Header>();
    let align = mem::align_of::<T>();
    (header + align - 1) & !(align - 1)
}

/// Layout of an allocation holding a header and `cap` slots of `T`.
pub(crate) fn allocation_layout<T>(cap: usize) -> Result<Layout, ArrayError> {
    let slots = Layout::array::<T>(cap).map_err(|_| ArrayError::CapacityOverflow)?;
    let (layout, offset) = Layout::new::<Header>()
        .extend(slots)
        .map_err(|_| ArrayError::CapacityOverflow)?;
    debug_assert_eq!(offset, data_offset::<T>());
    Ok(layout.pad_to_align())
}
