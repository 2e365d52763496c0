use std::collections::{HashMap, HashSet, VecDeque};

use kendall_tau_seq::inversions::count_inversions;
use kendall_tau_seq::{KendallTau, RelabelStrategy};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Exhaustive baseline: breadth-first search over adjacent swaps, editing
/// `s2` into `s1`. Only viable for tiny inputs.
fn bfs_min_adjacent_swaps(s1: &[u8], s2: &[u8]) -> u64 {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(s2.to_vec());
    queue.push_back((s2.to_vec(), 0u64));
    while let Some((cur, d)) = queue.pop_front() {
        if cur == s1 {
            return d;
        }
        for i in 0..cur.len().saturating_sub(1) {
            let mut next = cur.clone();
            next.swap(i, i + 1);
            if seen.insert(next.clone()) {
                queue.push_back((next, d + 1));
            }
        }
    }
    unreachable!("equal multisets are always reachable by adjacent swaps");
}

/// Two valid same-value pairings for a multiset-equal pair: occurrences
/// matched in arrival order, and with the second side reversed per value.
fn fifo_and_reversed_pairings(s1: &[u8], s2: &[u8]) -> (Vec<u32>, Vec<u32>) {
    let mut pos1: HashMap<u8, Vec<u32>> = HashMap::new();
    let mut pos2: HashMap<u8, Vec<u32>> = HashMap::new();
    for (i, &v) in s1.iter().enumerate() {
        pos1.entry(v).or_default().push(i as u32);
    }
    for (j, &v) in s2.iter().enumerate() {
        pos2.entry(v).or_default().push(j as u32);
    }
    let mut fifo = vec![0u32; s1.len()];
    let mut reversed = vec![0u32; s1.len()];
    for (v, q1) in &pos1 {
        let q2 = &pos2[v];
        assert_eq!(q1.len(), q2.len());
        for (k, &i) in q1.iter().enumerate() {
            fifo[i as usize] = q2[k];
            reversed[i as usize] = q2[q2.len() - 1 - k];
        }
    }
    (fifo, reversed)
}

/// A sequence and a shuffle of it (equal multisets by construction).
fn multiset_pair(alphabet: u8, max_len: usize) -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    prop::collection::vec(0..alphabet, 0..max_len).prop_flat_map(|s1| {
        let s2 = Just(s1.clone()).prop_shuffle();
        (Just(s1), s2)
    })
}

proptest! {
    #[test]
    fn prop_identity_distance_is_zero(s in prop::collection::vec(any::<u16>(), 0..64)) {
        let kt = KendallTau::new();
        prop_assert_eq!(kt.distance(&s, &s).unwrap(), 0);
    }

    #[test]
    fn prop_distance_is_symmetric((s1, s2) in multiset_pair(5, 32)) {
        let kt = KendallTau::new();
        prop_assert_eq!(kt.distance(&s1, &s2).unwrap(), kt.distance(&s2, &s1).unwrap());
    }

    #[test]
    fn prop_strategies_agree((s1, s2) in multiset_pair(6, 48)) {
        let hash = KendallTau::with_strategy(RelabelStrategy::HashBased);
        let cmp = KendallTau::with_strategy(RelabelStrategy::ComparisonBased);
        prop_assert_eq!(hash.distance(&s1, &s2).unwrap(), cmp.distance(&s1, &s2).unwrap());
    }

    #[test]
    fn prop_matches_exhaustive_swap_search((s1, s2) in multiset_pair(3, 7)) {
        let kt = KendallTau::new();
        prop_assert_eq!(kt.distance(&s1, &s2).unwrap(), bfs_min_adjacent_swaps(&s1, &s2));
    }

    // Which same-valued occurrences pair with which cannot change the
    // inversion count: equal elements are order-interchangeable.
    #[test]
    fn prop_pairing_choice_does_not_change_count((s1, s2) in multiset_pair(3, 32)) {
        let kt = KendallTau::new();
        let (mut fifo, mut reversed) = fifo_and_reversed_pairings(&s1, &s2);
        let fifo_count = count_inversions(&mut fifo);
        prop_assert_eq!(fifo_count, count_inversions(&mut reversed));
        prop_assert_eq!(fifo_count, kt.distance(&s1, &s2).unwrap());
    }

    #[test]
    fn prop_triangle_inequality(
        (a, b, c) in prop::collection::vec(0u8..4, 0..24).prop_flat_map(|s| {
            (Just(s.clone()), Just(s.clone()).prop_shuffle(), Just(s).prop_shuffle())
        })
    ) {
        let kt = KendallTau::new();
        let ab = kt.distance(&a, &b).unwrap();
        let bc = kt.distance(&b, &c).unwrap();
        let ac = kt.distance(&a, &c).unwrap();
        prop_assert!(ac <= ab + bc);
    }

    #[test]
    fn prop_object_entry_points_match_scalar((s1, s2) in multiset_pair(4, 24)) {
        let kt = KendallTau::new();
        let scalar = kt.distance(&s1, &s2).unwrap();
        prop_assert_eq!(kt.distance_hashable(&s1, &s2).unwrap(), scalar);
        prop_assert_eq!(kt.distance_ordered(&s1, &s2).unwrap(), scalar);
    }
}

// A budget of k adjacent swaps can never produce a distance above k.
#[test]
fn randomized_swap_budget_bounds_distance() {
    let kt = KendallTau::new();
    let mut rng = StdRng::seed_from_u64(0x5eed_cafe);
    for _ in 0..200 {
        let n = rng.gen_range(2usize..40);
        let s1: Vec<u32> = (0..n).map(|_| rng.gen_range(0u32..8)).collect();
        let mut s2 = s1.clone();
        let budget = rng.gen_range(0u64..64);
        for _ in 0..budget {
            let i = rng.gen_range(0..n - 1);
            s2.swap(i, i + 1);
        }
        assert!(kt.distance(&s1, &s2).unwrap() <= budget);
    }
}

// Swapping one adjacent pair of distinct elements is distance exactly 1.
#[test]
fn randomized_single_swap_is_distance_one() {
    let kt = KendallTau::new();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let n = rng.gen_range(2usize..50);
        let s1: Vec<u64> = (0..n as u64).collect();
        let mut s2 = s1.clone();
        let i = rng.gen_range(0..n - 1);
        s2.swap(i, i + 1);
        assert_eq!(kt.distance(&s1, &s2).unwrap(), 1);
    }
}
