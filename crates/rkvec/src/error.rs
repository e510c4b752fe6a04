//! Array error types.

use std::alloc::Layout;
use std::error::Error;
use std::fmt;

/// Errors that can occur during array operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The allocator could not satisfy an allocation or reallocation.
    ///
    /// The array is unchanged when this is returned.
    AllocationFailed {
        /// Layout of the allocation that failed.
        layout: Layout,
    },
    /// The requested capacity overflows `usize` or `isize::MAX` bytes.
    CapacityOverflow,
    /// The requested capacity is above the array's growth policy limit.
    CapacityExceeded {
        /// Number of elements requested.
        requested: usize,
        /// Maximum capacity permitted by the policy.
        max: usize,
    },
    /// An index outside the live range of the array.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the array at the time of the call.
        len: usize,
    },
    /// A range `[index, index + count)` that does not fit in the array.
    RangeOutOfBounds {
        /// Start of the range.
        index: usize,
        /// Number of elements in the range.
        count: usize,
        /// Length of the array at the time of the call.
        len: usize,
    },
    /// Removal from an array with no elements.
    Empty,
    /// A [`GrowthPolicy`](crate::GrowthPolicy) with inconsistent parameters.
    InvalidPolicy {
        /// What is wrong with the policy.
        reason: &'static str,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { layout } => {
                write!(
                    f,
                    "allocation of {} bytes (align {}) failed",
                    layout.size(),
                    layout.align()
                )
            }
            Self::CapacityOverflow => write!(f, "capacity overflow"),
            Self::CapacityExceeded { requested, max } => {
                write!(
                    f,
                    "capacity exceeded: requested {requested} elements, max {max}"
                )
            }
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::RangeOutOfBounds { index, count, len } => {
                write!(
                    f,
                    "range of {count} elements at {index} out of bounds for length {len}"
                )
            }
            Self::Empty => write!(f, "array is empty"),
            Self::InvalidPolicy { reason } => write!(f, "invalid growth policy: {reason}"),
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_out_of_bounds() {
        let err = ArrayError::OutOfBounds { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of bounds for length 3");
    }

    #[test]
    fn display_allocation_failed_reports_size() {
        let layout = Layout::from_size_align(64, 8).unwrap();
        let err = ArrayError::AllocationFailed { layout };
        assert_eq!(err.to_string(), "allocation of 64 bytes (align 8) failed");
    }

    #[test]
    fn display_range() {
        let err = ArrayError::RangeOutOfBounds {
            index: 2,
            count: 5,
            len: 4,
        };
        assert_eq!(
            err.to_string(),
            "range of 5 elements at 2 out of bounds for length 4"
        );
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: Error + Send + Sync + 'static>() {}
        assert_error::<ArrayError>();
    }
}
