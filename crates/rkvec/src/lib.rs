//! Growable contiguous arrays with amortized O(1) append.
//!
//! [`GrowableArray<T>`] stores its elements in one heap allocation that
//! begins with a small header (length, capacity). The handle is a single
//! pointer to that allocation, elements are reached through plain
//! indexing, and storage is reallocated transparently as the array grows.
//!
//! # Layout
//!
//! ```text
//! GrowableArray<T>
//! └── RawArray<T, A>
//!     └── Option<NonNull<Header>> ──► +--------+----------+---------+--------+-----+
//!                                     | length | capacity | padding | item 0 | ... |
//!                                     +--------+----------+---------+--------+-----+
//! ```
//!
//! An empty array with zero capacity holds no allocation at all.
//!
//! # Growth
//!
//! Growth goes through [`GrowthPolicy`]: capacity doubles, with a floor of
//! [`GrowthPolicy::DEFAULT_MIN_CAPACITY`] slots on the first allocation.
//! Pushing N elements from empty performs O(log N) reallocations.
//!
//! # Ownership
//!
//! Every operation that may reallocate takes `&mut self`, so references
//! into the array obtained before the call cannot be used after it:
//!
//! ```compile_fail
//! use rkvec::GrowableArray;
//!
//! let mut array = GrowableArray::from_slice(&[1, 2, 3]);
//! let first = &array[0];
//! array.push(4);
//! assert_eq!(*first, 1);
//! ```
//!
//! [`GrowableArray::free`] consumes the handle, so double free and
//! use-after-free are compile errors rather than runtime hazards.
//!
//! # Errors
//!
//! Index and emptiness violations return [`ArrayError`]. Allocation
//! failure aborts in the plain operations (matching the classic C
//! behaviour) and is returned as a value by the `try_*` forms.
//!
//! # Example
//!
//! ```
//! use rkvec::{growable, GrowableArray};
//!
//! let mut array = GrowableArray::new();
//! array.push(123);
//! assert_eq!(array[0], 123);
//! assert_eq!(array.len(), 1);
//!
//! let array = growable![1, 2, 3];
//! assert_eq!(array, [1, 2, 3]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod alloc;
pub mod array;
pub mod config;
pub mod error;
mod header;
pub mod iter;
mod macros;
mod raw;

// Public re-exports for the primary API surface.
pub use alloc::{Global, RawAlloc};
pub use array::GrowableArray;
pub use config::GrowthPolicy;
pub use error::ArrayError;
pub use iter::IntoIter;
