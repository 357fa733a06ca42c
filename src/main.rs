//! # perfdemo: Compute Benchmark Driver
//!
//! Times the sum-of-squares reduction in sequential, partitioned and
//! parallel form and prints throughput and checksums.
//!
//! ## Usage
//! ```bash
//! # All demos, all cores
//! perfdemo
//!
//! # Parallel only, 8 threads, smaller budget
//! perfdemo --mode parallel --threads 8 --iters 1000000000
//! ```

use std::time::Instant;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use compute_ext::config::Config;
use compute_ext::pipelines::BenchmarkPipeline;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> anyhow::Result<()> {
    let start = Instant::now();

    let config = Config::parse_and_validate().context("invalid arguments")?;
    init_tracing(config.verbose);

    tracing::info!(
        iters = config.iters,
        threads = config.nthreads(),
        mode = ?config.mode,
        "perfdemo v{}",
        env!("CARGO_PKG_VERSION")
    );

    let mut pipeline = BenchmarkPipeline::new(config);
    let reports = pipeline.run().context("benchmark failed")?;

    for report in &reports {
        println!("{}", report);
    }

    tracing::info!("Completed in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}
