//! Input validation, strategy selection, and stage sequencing.

use std::hash::Hash;

use thiserror::Error;

use crate::buckets::{bucket_sort, map_elements};
use crate::inversions::count_inversions;
use crate::key::ScalarKey;
use crate::relabel::{self, Relabeling};

/// Errors raised for caller-precondition violations. All are synchronous
/// and unrecoverable; no partial distance is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    /// The sequences differ in length; detected before any algorithmic work.
    #[error("sequences must be the same length (left is {left}, right is {right})")]
    LengthMismatch { left: usize, right: usize },
    /// The second sequence holds a value the first does not; detected while
    /// relabeling.
    #[error("sequences must contain the same elements: the second sequence has a value the first does not")]
    ElementMismatch,
    /// Same value set, differing counts; detected while pairing.
    #[error("sequences must contain the same elements: a value occurs a different number of times in each")]
    MultiplicityMismatch,
}

/// How elements are relabeled to dense integers. Hashing is O(n) and the
/// default; the comparison strategy trades hashing cost for an O(n log n)
/// sort and may win when comparisons are much cheaper than hashes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RelabelStrategy {
    /// First-occurrence hashing.
    #[default]
    HashBased,
    /// Sort + binary search.
    ComparisonBased,
}

/// Kendall tau sequence distance measurer.
///
/// A `KendallTau` value is plain immutable configuration: it is `Copy`,
/// `Send`, and `Sync`, and every call runs independently with O(n)
/// transient memory.
///
/// ```
/// use kendall_tau_seq::KendallTau;
///
/// let kt = KendallTau::new();
/// assert_eq!(kt.distance(&[1u8, 2, 3, 4], &[1, 3, 2, 4]).unwrap(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct KendallTau {
    strategy: RelabelStrategy,
}

impl KendallTau {
    /// Measurer with the default hash-based relabeling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Measurer with an explicit relabeling strategy.
    pub fn with_strategy(strategy: RelabelStrategy) -> Self {
        KendallTau { strategy }
    }

    /// The strategy fixed at construction.
    pub fn strategy(&self) -> RelabelStrategy {
        self.strategy
    }

    /// Distance between two scalar sequences, honoring the configured
    /// strategy. Boolean sequences take a two-label shortcut with an eager
    /// count check.
    pub fn distance<K: ScalarKey>(&self, s1: &[K], s2: &[K]) -> Result<u64, DistanceError> {
        check_lengths(s1.len(), s2.len())?;
        if s1.is_empty() {
            return Ok(0);
        }
        finish(K::relabel(s1, s2, self.strategy)?)
    }

    /// Distance between two strings, measured over their `char`s. Lengths
    /// are compared in `char`s, not bytes; use `u16` slices for exact
    /// UTF-16 code-unit semantics.
    pub fn str_distance(&self, s1: &str, s2: &str) -> Result<u64, DistanceError> {
        let c1: Vec<char> = s1.chars().collect();
        let c2: Vec<char> = s2.chars().collect();
        self.distance(&c1, &c2)
    }

    /// Distance between object sequences, relabeled by hashing regardless of
    /// the configured strategy (the fallback taken when no ordering is
    /// available).
    pub fn distance_hashable<T: Hash + Eq>(
        &self,
        s1: &[T],
        s2: &[T],
    ) -> Result<u64, DistanceError> {
        check_lengths(s1.len(), s2.len())?;
        if s1.is_empty() {
            return Ok(0);
        }
        finish(relabel::relabel_hashable(s1, s2)?)
    }

    /// Distance between object sequences, relabeled by sort + binary search.
    pub fn distance_ordered<T: Ord>(&self, s1: &[T], s2: &[T]) -> Result<u64, DistanceError> {
        check_lengths(s1.len(), s2.len())?;
        if s1.is_empty() {
            return Ok(0);
        }
        finish(relabel::relabel_ordered(s1, s2)?)
    }
}

#[inline]
fn check_lengths(left: usize, right: usize) -> Result<(), DistanceError> {
    if left != right {
        return Err(DistanceError::LengthMismatch { left, right });
    }
    Ok(())
}

/// Relabeling -> buckets -> mapping -> inversion count.
fn finish(relabeling: Relabeling) -> Result<u64, DistanceError> {
    let n = relabeling.pairs.len();
    let buckets = bucket_sort(&relabeling);
    let mut mapping = map_elements(&buckets, n)?;
    Ok(count_inversions(&mut mapping))
}
