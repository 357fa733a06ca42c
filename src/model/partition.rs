//! # Static Partitioning
//!
//! ## Role
//! Splits work into contiguous, near-equal pieces before it is handed to
//! workers. Sizes are decided up front, so the split depends only on the
//! inputs and never on scheduling.
//!
//! ## Layout
//! For `n` elements and `k` workers the first `n mod k` pieces hold
//! `n / k + 1` elements and the remaining pieces hold `n / k`.

use super::sum_squares::sum_squares_range;

/// Half-open index range `[start, end)` assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub start: i64,
    pub end: i64,
}

impl Partition {
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start).max(0) as u64
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Partial sum of squares over this range, in increasing index order.
    #[inline]
    pub fn sum_squares(&self) -> f64 {
        sum_squares_range(self.start, self.end)
    }
}

/// Partition `[0, n)` into at most `workers` contiguous pieces.
///
/// Returns no pieces for an empty range or zero workers, and never more
/// pieces than elements.
pub fn static_partitions(n: i64, workers: usize) -> Vec<Partition> {
    if n <= 0 || workers == 0 {
        return Vec::new();
    }

    let total = n as u64;
    let k = (workers as u64).min(total);
    let base = total / k;
    let rem = total % k;

    let mut start = 0i64;
    (0..k)
        .map(|idx| {
            let len = base + u64::from(idx < rem);
            let end = start + len as i64;
            let part = Partition { start, end };
            start = end;
            part
        })
        .collect()
}

/// Split an iteration budget into `workers` counts that sum to `total`.
pub fn split_iterations(total: u64, workers: usize) -> Vec<u64> {
    if workers == 0 {
        return Vec::new();
    }
    let k = workers as u64;
    let base = total / k;
    let rem = total % k;
    (0..k).map(|idx| base + u64::from(idx < rem)).collect()
}
