use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::weight::Weight;

/// A Fenwick tree (binary indexed tree) over a fixed number of weights.
///
/// Positions are 0-based in the public API. Every position starts at `T::ZERO` and is changed
/// through [`Fenwick::add`] or [`Fenwick::set`]; all reads see the result of every prior update.
///
/// The search operations ([`Fenwick::partition_point`] and everything built on it) walk the
/// implicit tree top-down in `O(log n)`. They assume that all weights are non-negative, so that
/// the prefix sums are non-decreasing. Results for other inputs are unspecified, but index
/// results always stay within `[0, len]`.
///
/// Sums are formed with the plain `+`/`-` of `T`. For integer weights every prefix sum must fit
/// in `T`: overflow panics in debug builds and wraps in release builds.
///
/// Mutators take `&mut self`; sharing a tree between threads needs external synchronization.
#[derive(Clone, Debug)]
pub struct Fenwick<T = i64> {
    tree: Vec<T>, // 1-indexed, slot 0 unused
    original: Vec<T>,
    max_bit: usize,
}

impl<T: Weight> Fenwick<T> {
    /// Creates a tree of `len` positions, all zero.
    pub fn new(len: usize) -> Self {
        bdebug!(len, "Fenwick::new");
        Self {
            tree: alloc::vec![T::ZERO; len + 1],
            original: alloc::vec![T::ZERO; len],
            max_bit: highest_power_of_two_leq(len),
        }
    }

    /// Builds a tree holding `values`.
    ///
    /// The result has the same prefix sums as `new(values.len())` followed by one `add` per
    /// position, but is built in `O(n)` by folding each node into its parent.
    ///
    /// # Panics
    ///
    /// In debug builds, if an integer node sum overflows `T`.
    pub fn from_slice(values: &[T]) -> Self {
        let n = values.len();
        let mut tree = Vec::with_capacity(n + 1);
        tree.push(T::ZERO);
        tree.extend_from_slice(values);

        for i in 1..=n {
            let parent = i + lsb(i);
            if parent <= n {
                let child = tree[i];
                tree[parent] = tree[parent] + child;
            }
        }
        bdebug!(len = n, "Fenwick::from_slice");

        Self {
            tree,
            original: values.to_vec(),
            max_bit: highest_power_of_two_leq(n),
        }
    }

    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Adds `delta` to the value at `index`.
    ///
    /// Returns [`Error::IndexOutOfRange`] without touching the tree if `index >= len`.
    ///
    /// # Panics
    ///
    /// In debug builds, if an integer node sum overflows `T`.
    pub fn add(&mut self, index: usize, delta: T) -> Result<()> {
        let n = self.check_index(index)?;
        btrace!(index, ?delta, "Fenwick::add");

        self.original[index] = self.original[index] + delta;
        let mut i = index + 1;
        while i <= n {
            self.tree[i] = self.tree[i] + delta;
            i += lsb(i);
        }
        Ok(())
    }

    /// Replaces the value at `index` with `value`.
    ///
    /// Unlike `add(index, value - current)` this never forms a negative delta, so it is safe for
    /// unsigned weights.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let n = self.check_index(index)?;
        let current = self.original[index];
        btrace!(index, ?current, ?value, "Fenwick::set");

        self.original[index] = value;
        let mut i = index + 1;
        while i <= n {
            self.tree[i] = self.tree[i] - current + value;
            i += lsb(i);
        }
        Ok(())
    }

    /// Returns the inclusive prefix sum `original[0] + .. + original[index]`.
    ///
    /// Returns `None` if `index >= len`.
    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        Some(self.prefix_sum(index + 1))
    }

    /// Returns the current value at `index` (not the cumulative sum).
    pub fn original(&self, index: usize) -> Option<T> {
        self.original.get(index).copied()
    }

    pub fn originals(&self) -> &[T] {
        &self.original
    }

    /// Returns the sum of all values, `T::ZERO` for an empty tree.
    pub fn sum(&self) -> T {
        self.prefix_sum(self.len())
    }

    /// Returns every prefix sum; element `i` equals `get(i)`.
    ///
    /// Each element repeats the `get` walk so float sums round identically, `O(n log n)`.
    pub fn to_vec(&self) -> Vec<T> {
        (1..=self.len()).map(|count| self.prefix_sum(count)).collect()
    }

    /// Returns the number of leading prefix sums for which `pred` is `false`.
    ///
    /// `pred` must be monotone over the prefix sums (`false` for a leading run, `true` after
    /// it), as with [`slice::partition_point`]. The result is in `[0, len]`; `len` means no
    /// prefix sum satisfies `pred`.
    pub fn partition_point<P>(&self, mut pred: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let n = self.len();
        let mut idx = 0usize;
        let mut acc = T::ZERO;
        let mut bit = self.max_bit;
        while bit != 0 {
            let next = idx + bit;
            if next <= n {
                let candidate = acc + self.tree[next];
                if !pred(&candidate) {
                    idx = next;
                    acc = candidate;
                }
            }
            bit >>= 1;
        }
        idx
    }

    /// Returns the smallest index whose prefix sum is `>= target`, or `len` if there is none.
    pub fn lower_bound(&self, target: T) -> usize {
        self.lower_bound_by(target, |a, b| a < b)
    }

    /// Like [`Fenwick::lower_bound`] with a custom "less than" comparator.
    ///
    /// Returns the first index `i` for which `less(&cusum[i], &target)` is `false`. Passing
    /// `|a, b| a <= b` turns this into [`Fenwick::upper_bound`].
    pub fn lower_bound_by<F>(&self, target: T, mut less: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.partition_point(|sum| !less(sum, &target))
    }

    /// Returns the smallest index whose prefix sum is `> target`, or `len` if there is none.
    pub fn upper_bound(&self, target: T) -> usize {
        self.upper_bound_by(target, |a, b| a < b)
    }

    /// Like [`Fenwick::upper_bound`] with a custom "less than" comparator.
    ///
    /// Returns the first index `i` for which `less(&target, &cusum[i])` is `true`. Passing
    /// `|a, b| a <= b` turns this into [`Fenwick::lower_bound`].
    pub fn upper_bound_by<F>(&self, target: T, mut less: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.partition_point(|sum| less(&target, sum))
    }

    /// Returns the first index whose prefix sum satisfies the monotone predicate `pred`.
    pub fn find_index<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        let i = self.partition_point(pred);
        (i < self.len()).then_some(i)
    }

    /// Returns the first prefix sum satisfying the monotone predicate `pred`.
    pub fn find<P>(&self, pred: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.find_index(pred).and_then(|i| self.get(i))
    }

    /// Returns the first index whose prefix sum equals `target`.
    pub fn index_of(&self, target: T) -> Option<usize> {
        let i = self.lower_bound(target);
        (self.get(i)? == target).then_some(i)
    }

    /// Returns the last index whose prefix sum equals `target`.
    pub fn last_index_of(&self, target: T) -> Option<usize> {
        let i = self.upper_bound(target).checked_sub(1)?;
        (self.get(i)? == target).then_some(i)
    }

    fn prefix_sum(&self, count: usize) -> T {
        let mut i = count;
        let mut sum = T::ZERO;
        while i > 0 {
            sum = sum + self.tree[i];
            i &= i - 1;
        }
        sum
    }

    fn check_index(&self, index: usize) -> Result<usize> {
        let len = self.len();
        if index >= len {
            bwarn!(index, len, "Fenwick: index out of range");
            return Err(Error::IndexOutOfRange { index, len });
        }
        Ok(len)
    }
}

impl<T: Weight> Default for Fenwick<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: Weight> PartialEq for Fenwick<T> {
    fn eq(&self, other: &Self) -> bool {
        self.original == other.original
    }
}

impl<T: Weight> From<&[T]> for Fenwick<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T: Weight> From<Vec<T>> for Fenwick<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_slice(&values)
    }
}

impl<T: Weight> FromIterator<T> for Fenwick<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        Self::from_slice(&values)
    }
}

fn lsb(i: usize) -> usize {
    i & i.wrapping_neg()
}

fn highest_power_of_two_leq(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let mut p = 1usize;
    while p <= n / 2 {
        p <<= 1;
    }
    p
}
