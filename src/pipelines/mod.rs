//! # Pipeline Module
//!
//! High-level orchestration of the compute benchmarks.
//! Coordinates warm-up, timing, and reporting around the reductions.

pub mod benchmark;

pub use benchmark::BenchmarkPipeline;
