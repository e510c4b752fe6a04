//! Workload generators for rkvec benchmarks.
//!
//! Provides deterministic operation sequences and appliers for both
//! [`GrowableArray`] and `std::vec::Vec`, so benchmarks compare the two on
//! identical work:
//!
//! - [`mixed_workload`]: seeded mix of push / pop / insert / delete ops
//! - [`apply`] / [`apply_std`]: run a workload, returning a checksum
//! - [`filled`]: an array of `0..n`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rkvec::GrowableArray;

/// One step of a mixed workload.
///
/// Positions are raw random numbers, reduced modulo the current length
/// when the op is applied, so a workload is valid for any starting state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Push(u64),
    Pop,
    Insert(u64, u64),
    DeleteAt(u64),
    DeleteSwap(u64),
}

/// Generate `len` ops from `seed`. Pushes dominate so the array grows.
pub fn mixed_workload(seed: u64, len: usize) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let value = rng.next_u64();
            match rng.next_u32() % 10 {
                0..=4 => Op::Push(value),
                5 => Op::Pop,
                6 | 7 => Op::Insert(rng.next_u64(), value),
                8 => Op::DeleteAt(rng.next_u64()),
                _ => Op::DeleteSwap(rng.next_u64()),
            }
        })
        .collect()
}

/// Array of `0..n`.
pub fn filled(n: u64) -> GrowableArray<u64> {
    (0..n).collect()
}

fn position(raw: u64, bound: usize) -> usize {
    (raw % bound as u64) as usize
}

/// Run `ops` against a [`GrowableArray`], returning a checksum of every
/// value popped or deleted.
pub fn apply(array: &mut GrowableArray<u64>, ops: &[Op]) -> u64 {
    let mut checksum = 0u64;
    for op in ops {
        let removed = match *op {
            Op::Push(v) => {
                array.push(v);
                None
            }
            Op::Pop => array.pop().ok(),
            Op::Insert(at, v) => {
                let index = position(at, array.len() + 1);
                array.insert(index, v).ok();
                None
            }
            Op::DeleteAt(at) if !array.is_empty() => {
                array.delete_at(position(at, array.len())).ok()
            }
            Op::DeleteSwap(at) if !array.is_empty() => {
                array.delete_swap(position(at, array.len())).ok()
            }
            Op::DeleteAt(_) | Op::DeleteSwap(_) => None,
        };
        checksum = checksum.wrapping_add(removed.unwrap_or(0));
    }
    checksum
}

/// Run `ops` against a `Vec`, with the same semantics as [`apply`].
pub fn apply_std(vec: &mut Vec<u64>, ops: &[Op]) -> u64 {
    let mut checksum = 0u64;
    for op in ops {
        let removed = match *op {
            Op::Push(v) => {
                vec.push(v);
                None
            }
            Op::Pop => vec.pop(),
            Op::Insert(at, v) => {
                let index = position(at, vec.len() + 1);
                vec.insert(index, v);
                None
            }
            Op::DeleteAt(at) if !vec.is_empty() => Some(vec.remove(position(at, vec.len()))),
            Op::DeleteSwap(at) if !vec.is_empty() => {
                Some(vec.swap_remove(position(at, vec.len())))
            }
            Op::DeleteAt(_) | Op::DeleteSwap(_) => None,
        };
        checksum = checksum.wrapping_add(removed.unwrap_or(0));
    }
    checksum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workload_is_deterministic() {
        assert_eq!(mixed_workload(42, 100), mixed_workload(42, 100));
        assert_ne!(mixed_workload(42, 100), mixed_workload(43, 100));
    }

    #[test]
    fn array_and_vec_agree() {
        let ops = mixed_workload(7, 5_000);
        let mut array = GrowableArray::new();
        let mut vec = Vec::new();
        assert_eq!(apply(&mut array, &ops), apply_std(&mut vec, &ops));
        assert_eq!(array, vec);
    }

    #[test]
    fn filled_is_sequential() {
        let array = filled(5);
        assert_eq!(array, [0, 1, 2, 3, 4]);
    }
}
