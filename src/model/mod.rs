//! # Model Module
//!
//! The sum-of-squares reduction and the pieces it is built from.
//!
//! ## Core Algorithms
//! - `sum_squares`: the scalar kernel, the sequential entry point and the
//!   closed-form reference value
//! - `partition`: static contiguous partitioning of `[0, n)` and even
//!   splitting of an iteration budget
//! - `parallel`: fork-join reduction over a rayon pool sized per call
//!
//! ## Summation Order
//!
//! Floating-point addition is not associative, so the parallel result can
//! differ from the sequential one in the last bits once partial sums exceed
//! 2^53. Within a partition indices are summed in increasing order and the
//! partials are folded in partition order, so a fixed `(n, num_threads)`
//! pair always produces the same bits.

pub mod parallel;
pub mod partition;
pub mod sum_squares;

pub use parallel::{compute_parallel, ParallelReducer};
pub use partition::{split_iterations, static_partitions, Partition};
pub use sum_squares::{compute_sequential, expected_sum_squares, sum_squares_range, SCALE};
