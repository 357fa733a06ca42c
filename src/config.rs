//! # Configuration Logic
//!
//! ## Role
//! CLI argument parsing and validation for the `perfdemo` benchmark driver.
//!
//! ## Example CLI
//! ```bash
//! perfdemo --iters 4000000000 --threads 8 --mode parallel
//! ```

use clap::{Parser, ValueEnum};

use crate::error::{ComputeError, Result};
use crate::utils::threading::default_threads;

/// Which compute demos to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Every demo, in order: sequential, partitioned, parallel
    All,
    /// Single-threaded loop
    Sequential,
    /// Budget split across workers, each running the sequential loop
    Partitioned,
    /// Fork-join reduction over one range
    Parallel,
}

const DEFAULT_WARMUP: u64 = 10_000;

#[derive(Parser, Debug, Clone)]
#[command(name = "perfdemo", version, about = "Sum-of-squares compute benchmarks")]
pub struct Config {
    /// Total loop iterations per demo
    #[arg(long, default_value_t = 4_000_000_000)]
    pub iters: u64,

    /// Worker threads (default: all cores)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Warm-up iterations, excluded from timing [default: 10000, capped at --iters]
    #[arg(long)]
    pub warmup: Option<u64>,

    /// Demo selection
    #[arg(long, value_enum, default_value_t = Mode::All)]
    pub mode: Mode,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse from the process arguments and validate.
    pub fn parse_and_validate() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.iters == 0 {
            return Err(ComputeError::config("--iters must be positive"));
        }
        if i64::try_from(self.iters).is_err() {
            return Err(ComputeError::config(format!(
                "--iters must not exceed {}",
                i64::MAX
            )));
        }
        if let Some(warmup) = self.warmup.filter(|&w| w > self.iters) {
            return Err(ComputeError::config(format!(
                "--warmup ({}) must not exceed --iters ({})",
                warmup, self.iters
            )));
        }
        if self.threads == Some(0) {
            return Err(ComputeError::config("--threads must be positive"));
        }
        Ok(())
    }

    /// Warm-up budget: the explicit value, or the default capped at `iters`.
    pub fn warmup_iters(&self) -> u64 {
        self.warmup.unwrap_or(DEFAULT_WARMUP).min(self.iters)
    }

    /// Worker count for the parallel demos.
    pub fn nthreads(&self) -> usize {
        self.threads.unwrap_or_else(|| default_threads().max(2))
    }
}
