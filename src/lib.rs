//! Kendall tau sequence distance: the minimum number of adjacent-element
//! swaps needed to transform one sequence into another of the same length
//! and element multiset. Unlike the classic Kendall tau distance on
//! permutations, the sequences may contain duplicate elements.
//!
//! Highlights:
//! - O(n log n): dense relabeling, bucket pairing, merge-sort inversion count
//! - Scalar sequences (fixed-width ints, floats, `char`, UTF-16 `u16` units,
//!   `bool`) go through the [`ScalarKey`] normalization trait, so no boxing
//! - Relabeling strategy chosen once at construction via [`RelabelStrategy`]:
//!   hash-based (default) or comparison-based
//! - Object sequences via `Hash + Eq` or `Ord` entry points
//!
//! Mismatched inputs (different lengths, different element multisets) are
//! reported as [`DistanceError`]; no partial result is ever returned.
//!
//! ```
//! use kendall_tau_seq::KendallTau;
//!
//! let kt = KendallTau::new();
//! assert_eq!(kt.distance(&[0, 1, 2], &[2, 1, 0]).unwrap(), 3);
//! assert_eq!(kt.str_distance("abcdaabb", "dcbababa").unwrap(), 9);
//! ```

mod buckets;
mod distance;
pub mod inversions;
mod key;
pub mod relabel;
mod table;

pub use crate::distance::{DistanceError, KendallTau, RelabelStrategy};
pub use crate::key::ScalarKey;
