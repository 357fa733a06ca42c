//! # compute_ext Library Root
//!
//! ## Role
//! Sequential and parallel sum-of-squares reductions,
//! `1e-6 * Σ_{i=0}^{n-1} i²`, for benchmarking compute-heavy workloads from
//! a host scripting environment.
//!
//! ## Module Structure
//! ```text
//! compute_ext
//! ├── model       # Kernel, partitioning, parallel reduction
//! ├── pipelines   # Benchmark orchestration for the perfdemo binary
//! ├── python      # pyo3 module (feature "python")
//! └── utils       # Helpers (threading, telemetry)
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod pipelines;
#[cfg(feature = "python")]
mod python;
pub mod utils;

pub use error::{ComputeError, Result};
pub use model::{compute_parallel, compute_sequential, ParallelReducer, SCALE};
