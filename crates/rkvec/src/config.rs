//! Growth policy parameters.

use crate::error::ArrayError;

/// Policy that decides the new capacity when an array must grow.
///
/// Capacity doubles on every reallocation, never dropping below the
/// requested size. Growing from zero starts at `min_capacity` slots.
/// Validated by [`GrowableArray::with_policy`](crate::GrowableArray::with_policy);
/// immutable once attached to an array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Capacity of the first allocation when growing from empty.
    ///
    /// Default: 4. Must be at least 1.
    pub min_capacity: usize,

    /// Largest capacity the array may grow to, in elements.
    ///
    /// Default: `usize::MAX`, which in practice means the array is bounded
    /// by `isize::MAX` bytes of storage. Requests above this limit fail
    /// with [`ArrayError::CapacityExceeded`]; doubling is clamped to it.
    pub max_capacity: usize,
}

impl GrowthPolicy {
    /// Default small-size floor for the first allocation.
    pub const DEFAULT_MIN_CAPACITY: usize = 4;

    /// Default upper capacity bound.
    pub const DEFAULT_MAX_CAPACITY: usize = usize::MAX;

    /// The policy every array uses unless told otherwise.
    pub const DEFAULT: Self = Self {
        min_capacity: Self::DEFAULT_MIN_CAPACITY,
        max_capacity: Self::DEFAULT_MAX_CAPACITY,
    };

    /// Create a policy with the given first-allocation floor.
    ///
    /// Uses the default maximum capacity.
    pub const fn new(min_capacity: usize) -> Self {
        Self {
            min_capacity,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }

    /// Set the maximum capacity.
    pub const fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Check the policy parameters for consistency.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.min_capacity == 0 {
            return Err(ArrayError::InvalidPolicy {
                reason: "min_capacity must be at least 1",
            });
        }
        if self.max_capacity < self.min_capacity {
            return Err(ArrayError::InvalidPolicy {
                reason: "max_capacity must not be below min_capacity",
            });
        }
        Ok(())
    }

    /// Compute the capacity to grow to so that `required` slots fit.
    ///
    /// Returns `current` unchanged when it already satisfies `required`.
    /// Otherwise the result is `max(required, 2 * current)`, or
    /// `max(required, min_capacity)` when `current == 0`, clamped to
    /// `max_capacity`.
    pub fn grown_capacity(&self, current: usize, required: usize) -> Result<usize, ArrayError> {
        if required <= current {
            return Ok(current);
        }
        if required > self.max_capacity {
            return Err(ArrayError::CapacityExceeded {
                requested: required,
                max: self.max_capacity,
            });
        }
        let target = if current == 0 {
            self.min_capacity
        } else {
            current.saturating_mul(2)
        };
        Ok(target.max(required).min(self.max_capacity))
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_floor_is_four() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.grown_capacity(0, 1), Ok(4));
    }

    #[test]
    fn large_first_request_beats_floor() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.grown_capacity(0, 100), Ok(100));
    }

    #[test]
    fn doubles_from_nonzero() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.grown_capacity(4, 5), Ok(8));
        assert_eq!(policy.grown_capacity(8, 9), Ok(16));
    }

    #[test]
    fn required_wins_over_doubling() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.grown_capacity(4, 50), Ok(50));
    }

    #[test]
    fn satisfied_request_is_noop() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.grown_capacity(16, 16), Ok(16));
        assert_eq!(policy.grown_capacity(16, 3), Ok(16));
        assert_eq!(policy.grown_capacity(0, 0), Ok(0));
    }

    #[test]
    fn doubling_clamped_to_max() {
        let policy = GrowthPolicy::new(4).with_max_capacity(10);
        assert_eq!(policy.grown_capacity(8, 9), Ok(10));
    }

    #[test]
    fn request_above_max_is_rejected() {
        let policy = GrowthPolicy::new(4).with_max_capacity(10);
        assert_eq!(
            policy.grown_capacity(8, 11),
            Err(ArrayError::CapacityExceeded {
                requested: 11,
                max: 10
            })
        );
    }

    #[test]
    fn doubling_saturates_instead_of_overflowing() {
        let policy = GrowthPolicy::default();
        let current = usize::MAX / 2 + 1;
        assert_eq!(policy.grown_capacity(current, current + 1), Ok(usize::MAX));
    }

    #[test]
    fn zero_floor_is_invalid() {
        assert!(matches!(
            GrowthPolicy::new(0).validate(),
            Err(ArrayError::InvalidPolicy { .. })
        ));
    }

    #[test]
    fn max_below_min_is_invalid() {
        let policy = GrowthPolicy::new(8).with_max_capacity(4);
        assert!(policy.validate().is_err());
        assert!(GrowthPolicy::default().validate().is_ok());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn grown_capacity_covers_request_and_never_shrinks(
                current in 0usize..1_000_000,
                required in 0usize..2_000_000,
            ) {
                let policy = GrowthPolicy::default();
                let grown = policy.grown_capacity(current, required).unwrap();
                prop_assert!(grown >= required);
                prop_assert!(grown >= current);
            }

            #[test]
            fn growth_at_least_doubles(current in 1usize..1_000_000) {
                let policy = GrowthPolicy::default();
                let grown = policy.grown_capacity(current, current + 1).unwrap();
                prop_assert!(grown >= current * 2);
            }
        }
    }
}
