//! Property tests for the public `Fenwick` contract.
//!
//! Verifies against a linear scan over the same values:
//! 1. Prefix sums and `to_vec` match the cumulative sum
//! 2. `from_slice` agrees with sequential `add`s
//! 3. `lower_bound` / `upper_bound` find the first `>=` / `>` prefix sum
//! 4. A flipped comparator swaps the two bounds
//! 5. Targets below zero or above the total clamp to `0` / `len`
//! 6. `index_of` / `last_index_of` match first/last exact positions
//! 7. Interleaved `add`/`set` keep every read consistent

use bitree::{Error, Fenwick};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_weights() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..50, 0..200)
}

#[derive(Clone, Debug)]
enum Op {
    Add(usize, i64),
    Set(usize, i64),
}

fn arb_ops(len: usize) -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        (0..len, 0i64..20).prop_map(|(i, d)| Op::Add(i, d)),
        (0..len, 0i64..20).prop_map(|(i, v)| Op::Set(i, v)),
    ];
    prop::collection::vec(op, 0..64)
}

fn cumulative(values: &[i64]) -> Vec<i64> {
    let mut acc = 0;
    values
        .iter()
        .map(|x| {
            acc += x;
            acc
        })
        .collect()
}

fn first_where(cusum: &[i64], pred: impl Fn(i64) -> bool) -> usize {
    cusum.iter().position(|&x| pred(x)).unwrap_or(cusum.len())
}

// ── Properties ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prefix_sums_match_cumulative(values in arb_weights()) {
        let t = Fenwick::from_slice(&values);
        let cusum = cumulative(&values);
        for (i, &s) in cusum.iter().enumerate() {
            prop_assert_eq!(t.get(i), Some(s));
            prop_assert_eq!(t.original(i), Some(values[i]));
        }
        prop_assert_eq!(t.get(values.len()), None);
        prop_assert_eq!(t.to_vec(), cusum.clone());
        prop_assert_eq!(t.sum(), cusum.last().copied().unwrap_or(0));
    }
}

proptest! {
    #[test]
    fn build_matches_sequential_adds(values in arb_weights()) {
        let mut added = Fenwick::new(values.len());
        for (i, &x) in values.iter().enumerate() {
            added.add(i, x).unwrap();
        }
        let built = Fenwick::from_slice(&values);
        prop_assert_eq!(built.to_vec(), added.to_vec());
        prop_assert_eq!(built.sum(), added.sum());
    }
}

proptest! {
    #[test]
    fn bounds_match_linear_scan(values in arb_weights(), target in -5i64..10_000) {
        let t = Fenwick::from_slice(&values);
        let cusum = cumulative(&values);
        prop_assert_eq!(t.lower_bound(target), first_where(&cusum, |x| target <= x));
        prop_assert_eq!(t.upper_bound(target), first_where(&cusum, |x| target < x));
        prop_assert_eq!(t.find_index(|x| *x > target), cusum.iter().position(|&x| x > target));
    }
}

proptest! {
    #[test]
    fn flipped_comparator_swaps_bounds(values in arb_weights(), target in 0i64..2_000) {
        let t = Fenwick::from_slice(&values);
        let flipped = |a: &i64, b: &i64| a <= b;
        prop_assert_eq!(t.upper_bound(target), t.lower_bound_by(target, flipped));
        prop_assert_eq!(t.lower_bound(target), t.upper_bound_by(target, flipped));
    }
}

proptest! {
    #[test]
    fn out_of_range_targets_clamp(values in arb_weights()) {
        let t = Fenwick::from_slice(&values);
        let n = values.len();
        prop_assert_eq!(t.lower_bound(-1), 0);
        prop_assert_eq!(t.upper_bound(-1), 0);
        prop_assert_eq!(t.lower_bound(t.sum() + 1), n);
        prop_assert_eq!(t.upper_bound(t.sum() + 1), n);
    }
}

proptest! {
    #[test]
    fn exact_positions_match_linear_scan(values in prop::collection::vec(0i64..3, 0..64)) {
        let t = Fenwick::from_slice(&values);
        let cusum = cumulative(&values);
        let max = cusum.last().copied().unwrap_or(0);
        for target in -1..=max + 1 {
            prop_assert_eq!(t.index_of(target), cusum.iter().position(|&x| x == target));
            prop_assert_eq!(t.last_index_of(target), cusum.iter().rposition(|&x| x == target));
        }
    }
}

proptest! {
    #[test]
    fn updates_keep_reads_consistent(
        (values, ops) in (1usize..100).prop_flat_map(|len| {
            (prop::collection::vec(0i64..50, len), arb_ops(len))
        })
    ) {
        let mut t = Fenwick::from_slice(&values);
        let mut shadow = values.clone();
        for op in ops {
            match op {
                Op::Add(i, d) => {
                    t.add(i, d).unwrap();
                    shadow[i] += d;
                }
                Op::Set(i, v) => {
                    t.set(i, v).unwrap();
                    shadow[i] = v;
                }
            }
        }
        prop_assert_eq!(t.originals(), &shadow[..]);
        prop_assert_eq!(t.to_vec(), cumulative(&shadow));
        prop_assert_eq!(t.sum(), shadow.iter().sum::<i64>());

        let len = shadow.len();
        prop_assert_eq!(t.add(len, 1), Err(Error::IndexOutOfRange { index: len, len }));
    }
}
