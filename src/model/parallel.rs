//! # Parallel Reduction
//!
//! ## Role
//! Fork-join sum of squares: partition `[0, n)` statically, sum every
//! partition on its own rayon task, then fold the partials in partition order.
//!
//! ## Thread Count
//! A positive `num_threads` builds a pool owned by the reducer and fixes the
//! partition count at `num_threads`. The pool itself starts at most
//! `MAX_POOL_THREADS` OS threads; larger requests still get their partition
//! layout, spread over the capped pool. Zero or a negative hint runs on the
//! caller's current rayon pool. Either way the setting lives only as long as
//! the reducer, never in process-global state.

use rayon::prelude::*;

use super::partition::{static_partitions, Partition};
use super::sum_squares::SCALE;
use crate::error::Result;
use crate::utils::threading::{build_thread_pool, default_threads, resolve_threads};

/// Reusable parallel reduction engine with a fixed worker count.
pub struct ParallelReducer {
    pool: Option<rayon::ThreadPool>,
    threads: usize,
}

impl ParallelReducer {
    /// Create a reducer with `num_threads` partitions, or the default when zero.
    ///
    /// The default is read from `rayon::current_num_threads()` at construction,
    /// so it is the size of whichever pool the caller is running in (rayon's
    /// global pool from a plain thread). The partition count, and therefore
    /// the low bits of the result, follow that context.
    pub fn new(num_threads: usize) -> Result<Self> {
        if num_threads == 0 {
            return Ok(Self {
                pool: None,
                threads: default_threads(),
            });
        }
        let pool = build_thread_pool(num_threads)?;
        Ok(Self {
            pool: Some(pool),
            threads: num_threads,
        })
    }

    /// Create a reducer from a host-style hint where `<= 0` means default.
    pub fn from_hint(num_threads: i64) -> Result<Self> {
        Self::new(resolve_threads(num_threads)?.unwrap_or(0))
    }

    /// Number of partitions used per reduction.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// `SCALE * Σ_{i=0}^{n-1} i²` computed across the reducer's workers.
    pub fn reduce(&self, n: i64) -> f64 {
        let partitions = static_partitions(n, self.threads);
        let partials: Vec<f64> = self.install(|| {
            partitions
                .par_iter()
                .map(Partition::sum_squares)
                .collect()
        });
        let sum = partials.iter().fold(0.0f64, |acc, &partial| acc + partial);
        SCALE * sum
    }

    /// Run `op` inside this reducer's pool.
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

/// Parallel reduction over `[0, n)` with a per-call worker count.
///
/// `num_threads <= 0` uses the default worker count. The only failure is the
/// operating system refusing to start the pool's workers.
pub fn compute_parallel(n: i64, num_threads: i64) -> Result<f64> {
    let reducer = ParallelReducer::from_hint(num_threads)?;
    tracing::debug!(n, threads = reducer.threads(), "parallel reduction");
    Ok(reducer.reduce(n))
}
