//! Merge-sort inversion counting.
//!
//! An inversion is a pair `(i, j)` with `i < j` and `values[i] > values[j]`.
//! On the index permutation produced by pairing, the inversion count is the
//! Kendall tau sequence distance.

/// Count inversions of `values`, sorting it in place as a side effect.
/// One scratch buffer is allocated up front and shared by all merge levels.
pub fn count_inversions(values: &mut [u32]) -> u64 {
    if values.len() <= 1 {
        return 0;
    }
    let mut scratch = vec![0u32; values.len()];
    sort_counting(values, &mut scratch)
}

fn sort_counting(values: &mut [u32], scratch: &mut [u32]) -> u64 {
    let n = values.len();
    if n <= 1 {
        return 0;
    }
    let mid = n / 2;

    let mut count;
    {
        let (left, right) = values.split_at_mut(mid);
        let (left_s, right_s) = scratch.split_at_mut(mid);
        count = sort_counting(left, left_s) + sort_counting(right, right_s);
        left_s.copy_from_slice(left);
        right_s.copy_from_slice(right);
    }

    // Merge both sorted halves back; each time a right element overtakes the
    // remaining left elements, they all form inversions with it.
    let (left, right) = scratch.split_at(mid);
    let (mut i, mut j) = (0, 0);
    for slot in values.iter_mut() {
        if i < left.len() && (j >= right.len() || left[i] <= right[j]) {
            *slot = left[i];
            i += 1;
        } else {
            count += (left.len() - i) as u64;
            *slot = right[j];
            j += 1;
        }
    }
    count
}
