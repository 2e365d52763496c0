//! Bucket sort of positions by label, and the FIFO pairing that turns a
//! relabeled sequence pair into an index permutation.

use crate::distance::DistanceError;
use crate::relabel::Relabeling;

/// Per-label position queues, one per sequence side. Positions are pushed in
/// increasing order, so every queue is position-sorted by construction.
pub(crate) struct LabelBuckets {
    s1: Vec<Vec<u32>>,
    s2: Vec<Vec<u32>>,
}

/// Group positions of each sequence by label. O(n).
pub(crate) fn bucket_sort(relabeling: &Relabeling) -> LabelBuckets {
    let mut s1 = vec![Vec::new(); relabeling.num_labels];
    let mut s2 = vec![Vec::new(); relabeling.num_labels];
    for (i, pair) in relabeling.pairs.iter().enumerate() {
        s1[pair[0] as usize].push(i as u32);
        s2[pair[1] as usize].push(i as u32);
    }
    LabelBuckets { s1, s2 }
}

/// Pair same-labeled positions in arrival order: `mapping[i] = j` pairs the
/// k-th occurrence of a label in the first sequence (position `i`) with its
/// k-th occurrence in the second (position `j`).
///
/// This is the authoritative multiset check: a label whose two queues hold
/// different counts means the sequences disagree on some multiplicity.
pub(crate) fn map_elements(
    buckets: &LabelBuckets,
    n: usize,
) -> Result<Vec<u32>, DistanceError> {
    let mut mapping = vec![0u32; n];
    for (q1, q2) in buckets.s1.iter().zip(&buckets.s2) {
        if q1.len() != q2.len() {
            return Err(DistanceError::MultiplicityMismatch);
        }
        for (&i, &j) in q1.iter().zip(q2) {
            mapping[i as usize] = j;
        }
    }
    Ok(mapping)
}
