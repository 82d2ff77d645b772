use std::cmp::Ordering;
use std::time::Instant;

use log::{debug, trace};

use super::metrics::Metrics;
use crate::error::{Error, Result};

/// Number of elements per group when computing the median of medians.
pub const GROUP_SIZE: usize = 5;

/// How the descent continues once the pivot has split the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescentPolicy {
    /// Enter the side holding `k` through a depth-tracked recursive call when
    /// that side is no larger than the other one, otherwise narrow the range
    /// in place and keep looping.
    #[default]
    RecurseSmaller,
    /// Always narrow the range in place. Recursion only happens for the
    /// nested median-of-medians sub-problem.
    Iterative,
}

/// How a range is rearranged around the pivot value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartitionScheme {
    /// Two-way Lomuto partition. Values equal to the pivot land on the high
    /// side, so each round on a run of equal values removes a single element.
    /// The nested median-of-medians call degenerates the same way, and on
    /// inputs with few distinct values the comparison count grows roughly as
    /// the fourth power of the length. Use `ThreeWay` for such inputs.
    #[default]
    Lomuto,
    /// Three-way partition that gathers every value equal to the pivot into
    /// one segment. Linear on duplicate-heavy inputs, but the comparison and
    /// swap counts differ from `Lomuto`.
    ThreeWay,
}

/// Worst-case linear k-th smallest selection using the median of medians.
///
/// The linear bound holds for inputs of distinct values under the default
/// [`PartitionScheme::Lomuto`]. For inputs with many repeated values build the
/// selector with [`PartitionScheme::ThreeWay`], which stays linear there too.
///
/// # Examples
///
/// ```
/// use deterministic_select::sort::{Metrics, Selector};
///
/// let data = [9, 3, 7, 1, 5, 2, 8, 4, 6, 0];
/// let mut metrics = Metrics::new();
/// let value = Selector::new().select(&data, 4, &mut metrics).unwrap();
/// assert_eq!(value, 4);
/// assert!(metrics.comparisons > 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Selector {
    policy: DescentPolicy,
    partition: PartitionScheme,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: DescentPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_partition(mut self, partition: PartitionScheme) -> Self {
        self.partition = partition;
        self
    }

    pub fn policy(&self) -> DescentPolicy {
        self.policy
    }

    pub fn partition(&self) -> PartitionScheme {
        self.partition
    }

    /// Returns the element of rank `k` (0-based) of `input` under ascending order.
    ///
    /// `input` is left untouched; the work happens on a private copy. Fails
    /// with [`Error::InvalidArgument`] when `input` is empty or `k` is not a
    /// valid index, in which case `metrics` is not modified.
    pub fn select<T: Ord + Copy>(&self, input: &[T], k: usize, metrics: &mut Metrics) -> Result<T> {
        if input.is_empty() {
            return Err(Error::invalid_argument("empty input"));
        }
        if k >= input.len() {
            return Err(Error::invalid_argument("rank out of range"));
        }

        let mut buf = input.to_vec();
        metrics.allocations += 1;

        let start = Instant::now();
        let high = buf.len() - 1;
        let value = self.select_in_place(&mut buf, 0, high, k, metrics);
        metrics.elapsed = start.elapsed();

        debug!(
            "selected rank {} of {} elements: comparisons={} swaps={} depth={} elapsed={:?}",
            k,
            input.len(),
            metrics.comparisons,
            metrics.swaps,
            metrics.max_recursion_depth,
            metrics.elapsed
        );
        Ok(value)
    }

    // `k` is an absolute index into `a`; only the bounds move.
    fn select_in_place<T: Ord + Copy>(
        &self,
        a: &mut [T],
        mut low: usize,
        mut high: usize,
        k: usize,
        m: &mut Metrics,
    ) -> T {
        loop {
            if low == high {
                return a[low];
            }

            let pivot = self.median_of_medians(a, low, high, m);
            let (eq_low, eq_high) = match self.partition {
                PartitionScheme::Lomuto => {
                    let p = partition_around_value(a, low, high, pivot, m);
                    (p, p)
                }
                PartitionScheme::ThreeWay => partition_three_way(a, low, high, pivot, m),
            };
            trace!("range [{}, {}] split at [{}, {}]", low, high, eq_low, eq_high);

            if (eq_low..=eq_high).contains(&k) {
                return a[k];
            }

            let left = eq_low - low;
            let right = high - eq_high;
            let recurse = self.policy == DescentPolicy::RecurseSmaller;

            if k < eq_low {
                if recurse && left <= right {
                    m.enter();
                    let res = self.select_in_place(a, low, eq_low - 1, k, m);
                    m.exit();
                    return res;
                }
                high = eq_low - 1;
            } else {
                if recurse && right <= left {
                    m.enter();
                    let res = self.select_in_place(a, eq_high + 1, high, k, m);
                    m.exit();
                    return res;
                }
                low = eq_high + 1;
            }
        }
    }

    /// Returns the pivot value for `[low, high]`.
    ///
    /// Group medians are compacted into the front of the range by swapping,
    /// so the nested selection reuses the same buffer.
    fn median_of_medians<T: Ord + Copy>(
        &self,
        a: &mut [T],
        low: usize,
        high: usize,
        m: &mut Metrics,
    ) -> T {
        let n = high - low + 1;
        if n <= GROUP_SIZE {
            insertion_sort(a, low, high, m);
            return a[low + n / 2];
        }

        let mut write = low;
        for group_low in (low..=high).step_by(GROUP_SIZE) {
            let group_high = (group_low + GROUP_SIZE - 1).min(high);
            insertion_sort(a, group_low, group_high, m);
            let median = group_low + (group_high - group_low) / 2;
            swap(a, write, median, m);
            write += 1;
        }

        let mid = low + (write - low - 1) / 2;
        m.enter();
        let mom = self.select_in_place(a, low, write - 1, mid, m);
        m.exit();
        mom
    }
}

/// Selects the element of rank `k` with the default [`Selector`].
///
/// The default uses Lomuto partitioning, which is slow on inputs made of a few
/// repeated values; see [`PartitionScheme::ThreeWay`].
pub fn select<T: Ord + Copy>(input: &[T], k: usize, metrics: &mut Metrics) -> Result<T> {
    Selector::new().select(input, k, metrics)
}

/// Selects the element of rank `k` without reporting metrics.
///
/// # Examples
///
/// ```
/// use deterministic_select::sort::kth_smallest;
///
/// assert_eq!(kth_smallest(&[5, 5, 5, 5], 2), Ok(5));
/// assert!(kth_smallest::<i32>(&[], 0).is_err());
/// ```
pub fn kth_smallest<T: Ord + Copy>(input: &[T], k: usize) -> Result<T> {
    select(input, k, &mut Metrics::new())
}

/// Returns the lower median, the element of rank `(len - 1) / 2`.
pub fn median<T: Ord + Copy>(input: &[T]) -> Result<T> {
    if input.is_empty() {
        return Err(Error::invalid_argument("empty input"));
    }
    kth_smallest(input, (input.len() - 1) / 2)
}

/// Lomuto partition of `[low, high]` around `pivot`, which must occur in the range.
///
/// Returns the final index `p` of the pivot: everything before `p` is strictly
/// smaller, everything after is greater or equal.
fn partition_around_value<T: Ord + Copy>(
    a: &mut [T],
    low: usize,
    high: usize,
    pivot: T,
    m: &mut Metrics,
) -> usize {
    let pivot_idx = a[low..=high]
        .iter()
        .position(|&x| {
            m.comparisons += 1;
            x == pivot
        })
        .map_or(high, |offset| low + offset);
    swap(a, pivot_idx, high, m);

    let mut store = low;
    for i in low..high {
        m.comparisons += 1;
        if a[i] < pivot {
            swap(a, store, i, m);
            store += 1;
        }
    }
    swap(a, store, high, m);
    store
}

/// Three-way partition of `[low, high]` around `pivot`.
///
/// Returns the inclusive bounds of the segment holding values equal to `pivot`.
fn partition_three_way<T: Ord + Copy>(
    a: &mut [T],
    low: usize,
    high: usize,
    pivot: T,
    m: &mut Metrics,
) -> (usize, usize) {
    let mut lt = low;
    let mut i = low;
    let mut gt = high + 1;
    while i < gt {
        m.comparisons += 1;
        match a[i].cmp(&pivot) {
            Ordering::Less => {
                swap(a, lt, i, m);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                swap(a, i, gt, m);
            }
            Ordering::Equal => i += 1,
        }
    }
    (lt, gt - 1)
}

/// Stable insertion sort of `[low, high]`. Shifts are not counted as swaps.
fn insertion_sort<T: Ord + Copy>(a: &mut [T], low: usize, high: usize, m: &mut Metrics) {
    for i in low + 1..=high {
        let key = a[i];
        let mut j = i;
        while j > low {
            m.comparisons += 1;
            if a[j - 1] <= key {
                break;
            }
            a[j] = a[j - 1];
            j -= 1;
        }
        a[j] = key;
    }
}

fn swap<T>(a: &mut [T], i: usize, j: usize, m: &mut Metrics) {
    if i == j {
        return;
    }
    a.swap(i, j);
    m.swaps += 1;
}
