//! Element relabeling: both sequences' elements become dense integer labels
//! so downstream stages can index arrays instead of comparing elements.
//!
//! Hash strategy: a left-to-right scan of the first sequence assigns labels
//! in first-occurrence order, then the second sequence resolves against the
//! table. Sort strategy: labels are ranks in a sorted, deduplicated clone of
//! the first sequence's keys, resolved by binary search. Either way, any
//! second-sequence element with no label means the multisets differ.

use std::collections::HashMap;
use std::hash::Hash;

use crate::distance::{DistanceError, RelabelStrategy};
use crate::key::ScalarKey;
use crate::table::KeyTable;

/// Dense relabeling of a sequence pair.
pub struct Relabeling {
    /// `pairs[i] = [label of s1[i], label of s2[i]]`.
    pub pairs: Vec<[u32; 2]>,
    /// Number of distinct labels; labels are `0..num_labels`.
    pub num_labels: usize,
}

/// Relabel two equal-length scalar sequences.
pub fn relabel_scalars<K: ScalarKey>(
    s1: &[K],
    s2: &[K],
    strategy: RelabelStrategy,
) -> Result<Relabeling, DistanceError> {
    debug_assert_eq!(s1.len(), s2.len());
    match strategy {
        RelabelStrategy::HashBased => relabel_by_hash(s1, s2),
        RelabelStrategy::ComparisonBased => relabel_by_sort(s1, s2),
    }
}

fn relabel_by_hash<K: ScalarKey>(s1: &[K], s2: &[K]) -> Result<Relabeling, DistanceError> {
    let n = s1.len();
    let mut table = KeyTable::with_capacity(K::KEY_BITS, n);
    let mut num_labels = 0u32;

    let mut pairs = vec![[0u32; 2]; n];
    for (i, &v) in s1.iter().enumerate() {
        let key = v.key_bits();
        let label = match table.get(key) {
            Some(label) => label,
            None => {
                let label = num_labels;
                table.insert(key, label);
                num_labels += 1;
                label
            }
        };
        pairs[i][0] = label;
    }
    for (i, &v) in s2.iter().enumerate() {
        match table.get(v.key_bits()) {
            Some(label) => pairs[i][1] = label,
            None => return Err(DistanceError::ElementMismatch),
        }
    }
    Ok(Relabeling {
        pairs,
        num_labels: num_labels as usize,
    })
}

fn relabel_by_sort<K: ScalarKey>(s1: &[K], s2: &[K]) -> Result<Relabeling, DistanceError> {
    let n = s1.len();
    let mut sorted: Vec<u64> = s1.iter().map(|v| v.key_bits()).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut pairs = vec![[0u32; 2]; n];
    for i in 0..n {
        // every first-sequence key is in its own sorted clone
        let a = sorted
            .binary_search(&s1[i].key_bits())
            .expect("s1 key present");
        pairs[i][0] = a as u32;
        match sorted.binary_search(&s2[i].key_bits()) {
            Ok(b) => pairs[i][1] = b as u32,
            Err(_) => return Err(DistanceError::ElementMismatch),
        }
    }
    Ok(Relabeling {
        pairs,
        num_labels: sorted.len(),
    })
}

/// Boolean shortcut: at most two labels, mismatched value counts rejected
/// before the general pipeline runs.
pub fn relabel_bools(s1: &[bool], s2: &[bool]) -> Result<Relabeling, DistanceError> {
    let n = s1.len();
    debug_assert_eq!(n, s2.len());
    if n == 0 {
        return Ok(Relabeling {
            pairs: Vec::new(),
            num_labels: 0,
        });
    }

    let trues1 = s1.iter().filter(|&&b| b).count();
    let trues2 = s2.iter().filter(|&&b| b).count();
    if trues1 != trues2 {
        // uniform s1 means the offending s2 value is absent outright
        let absent = (trues1 == 0 && trues2 > 0) || (trues1 == n && trues2 < n);
        return Err(if absent {
            DistanceError::ElementMismatch
        } else {
            DistanceError::MultiplicityMismatch
        });
    }

    let first = s1[0];
    let label_of = |b: bool| u32::from(b != first);
    let num_labels = if trues1 == 0 || trues1 == n { 1 } else { 2 };
    let pairs = s1
        .iter()
        .zip(s2)
        .map(|(&a, &b)| [label_of(a), label_of(b)])
        .collect();
    Ok(Relabeling { pairs, num_labels })
}

/// Relabel object sequences by hashing (first-occurrence label order).
pub fn relabel_hashable<T: Hash + Eq>(s1: &[T], s2: &[T]) -> Result<Relabeling, DistanceError> {
    let n = s1.len();
    debug_assert_eq!(n, s2.len());
    let mut labels: HashMap<&T, u32> = HashMap::with_capacity(n + n / 3 + 1);

    let mut pairs = vec![[0u32; 2]; n];
    for (i, v) in s1.iter().enumerate() {
        let next = labels.len() as u32;
        pairs[i][0] = *labels.entry(v).or_insert(next);
    }
    for (i, v) in s2.iter().enumerate() {
        match labels.get(v) {
            Some(&label) => pairs[i][1] = label,
            None => return Err(DistanceError::ElementMismatch),
        }
    }
    Ok(Relabeling {
        pairs,
        num_labels: labels.len(),
    })
}

/// Relabel object sequences by sort + binary search (labels are ranks).
pub fn relabel_ordered<T: Ord>(s1: &[T], s2: &[T]) -> Result<Relabeling, DistanceError> {
    let n = s1.len();
    debug_assert_eq!(n, s2.len());
    let mut sorted: Vec<&T> = s1.iter().collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut pairs = vec![[0u32; 2]; n];
    for i in 0..n {
        let a = sorted.binary_search(&&s1[i]).expect("s1 element present");
        pairs[i][0] = a as u32;
        match sorted.binary_search(&&s2[i]) {
            Ok(b) => pairs[i][1] = b as u32,
            Err(_) => return Err(DistanceError::ElementMismatch),
        }
    }
    Ok(Relabeling {
        pairs,
        num_labels: sorted.len(),
    })
}
