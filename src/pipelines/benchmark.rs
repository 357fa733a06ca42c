//! # Benchmark Pipeline
//!
//! ## Role
//! Runs the compute demos selected by [`Mode`]: warm up, time one full
//! reduction, and produce a [`RunReport`] per demo.
//!
//! ## Demos
//! - `sequential`: one thread, one loop over `[0, iters)`
//! - `partitioned`: `iters` split evenly across workers, each running an
//!   independent sequential loop over `[0, part)`; the checksum is the sum of
//!   the per-worker results
//! - `parallel`: one range reduced by [`ParallelReducer`]

use std::hint::black_box;
use std::time::Instant;

use rayon::prelude::*;
use tracing::instrument;

use crate::config::{Config, Mode};
use crate::error::{ComputeError, Result};
use crate::model::{
    compute_sequential, expected_sum_squares, split_iterations, ParallelReducer,
};
use crate::utils::telemetry::{relative_error, RunReport};

pub struct BenchmarkPipeline {
    config: Config,
}

impl BenchmarkPipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the configured demos in order.
    pub fn run(&mut self) -> Result<Vec<RunReport>> {
        let iters = self.iterations()?;
        let threads = self.config.nthreads();

        let mut reports = Vec::new();
        if matches!(self.config.mode, Mode::All | Mode::Sequential) {
            reports.push(self.run_sequential(iters));
        }
        if matches!(self.config.mode, Mode::All | Mode::Partitioned) {
            reports.push(self.run_partitioned(iters, threads)?);
        }
        if matches!(self.config.mode, Mode::All | Mode::Parallel) {
            reports.push(self.run_parallel(iters, threads)?);
        }

        for report in &reports {
            tracing::info!("{}", report);
        }
        Ok(reports)
    }

    fn iterations(&self) -> Result<i64> {
        i64::try_from(self.config.iters)
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| {
                ComputeError::invalid_input(format!(
                    "iteration budget {} is outside 1..={}",
                    self.config.iters,
                    i64::MAX
                ))
            })
    }

    fn warmup(&self) -> i64 {
        // Capped at `iters`, which already fits in i64.
        self.config.warmup_iters().min(i64::MAX as u64) as i64
    }

    #[instrument(skip(self))]
    fn run_sequential(&self, iters: i64) -> RunReport {
        black_box(compute_sequential(black_box(self.warmup())));

        let start = Instant::now();
        let checksum = compute_sequential(iters);
        let elapsed = start.elapsed();

        RunReport {
            label: "sequential",
            threads: 1,
            iterations: iters as u64,
            elapsed,
            checksum,
            rel_error: Some(relative_error(checksum, expected_sum_squares(iters))),
        }
    }

    #[instrument(skip(self))]
    fn run_partitioned(&self, iters: i64, threads: usize) -> Result<RunReport> {
        let reducer = ParallelReducer::new(threads)?;
        let parts: Vec<i64> = split_iterations(iters as u64, threads)
            .into_iter()
            .map(|part| part as i64)
            .collect();
        tracing::debug!(?parts, "split iteration budget");

        let warmup = self.warmup();
        reducer.install(|| {
            (0..threads)
                .into_par_iter()
                .for_each(|_| {
                    black_box(compute_sequential(black_box(warmup)));
                })
        });

        let start = Instant::now();
        let results: Vec<f64> = reducer.install(|| {
            parts
                .par_iter()
                .map(|&part| compute_sequential(part))
                .collect()
        });
        let elapsed = start.elapsed();

        let checksum: f64 = results.iter().sum();
        let expected: f64 = parts.iter().map(|&part| expected_sum_squares(part)).sum();

        Ok(RunReport {
            label: "partitioned",
            threads,
            iterations: iters as u64,
            elapsed,
            checksum,
            rel_error: Some(relative_error(checksum, expected)),
        })
    }

    #[instrument(skip(self))]
    fn run_parallel(&self, iters: i64, threads: usize) -> Result<RunReport> {
        let reducer = ParallelReducer::new(threads)?;
        black_box(reducer.reduce(black_box(self.warmup())));

        let start = Instant::now();
        let checksum = reducer.reduce(iters);
        let elapsed = start.elapsed();

        Ok(RunReport {
            label: "parallel",
            threads: reducer.threads(),
            iterations: iters as u64,
            elapsed,
            checksum,
            rel_error: Some(relative_error(checksum, expected_sum_squares(iters))),
        })
    }
}
