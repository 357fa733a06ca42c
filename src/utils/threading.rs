//! # Threading Configuration
//!
//! ## Role
//! Build rayon thread pools sized for a single reduction and resolve the
//! default worker count.
//!
//! Pools built here are owned by the caller and dropped with it. The global
//! rayon pool is never reconfigured, so one caller's thread count cannot leak
//! into another's.

use crate::error::{ComputeError, Result};

/// Most OS threads a single pool will start. Requests above this still get
/// one partition per requested worker; the partitions share the capped pool.
pub const MAX_POOL_THREADS: usize = 256;

/// Worker count used when the caller does not ask for one.
///
/// This is `rayon::current_num_threads()`: the size of the pool the caller is
/// running in, or of rayon's global pool (which honours `RAYON_NUM_THREADS`
/// and otherwise matches hardware concurrency) from outside any pool.
pub fn default_threads() -> usize {
    rayon::current_num_threads()
}

/// Interpret a host-supplied thread hint.
///
/// Non-positive values mean "no override" and resolve to `None`. The only
/// rejection is a count that does not fit `usize`.
pub fn resolve_threads(num_threads: i64) -> Result<Option<usize>> {
    if num_threads <= 0 {
        return Ok(None);
    }
    let n = usize::try_from(num_threads).map_err(|_| {
        ComputeError::invalid_input(format!(
            "num_threads={} does not fit the platform word size",
            num_threads
        ))
    })?;
    Ok(Some(n))
}

/// Create a configured thread pool with `min(n_threads, MAX_POOL_THREADS)`
/// workers.
pub fn build_thread_pool(n_threads: usize) -> Result<rayon::ThreadPool> {
    if n_threads == 0 {
        return Err(ComputeError::invalid_input("thread count must be positive"));
    }
    let n_threads = n_threads.min(MAX_POOL_THREADS);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .thread_name(|i| format!("compute-worker-{}", i))
        .build()?;
    tracing::debug!(n_threads, "built reduction thread pool");
    Ok(pool)
}
