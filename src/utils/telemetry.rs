//! # Run Telemetry
//!
//! Timing and reporting for benchmark runs. A [`RunReport`] captures one
//! timed reduction; its `Display` form is the line the driver prints.

use std::fmt;
use std::time::Duration;

/// Outcome of a single timed reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub label: &'static str,
    pub threads: usize,
    pub iterations: u64,
    pub elapsed: Duration,
    pub checksum: f64,
    /// Relative error against the closed form, when one applies.
    pub rel_error: Option<f64>,
}

impl RunReport {
    /// Loop iterations per second, in millions.
    pub fn throughput_mits(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.iterations as f64 / secs / 1e6
        } else {
            0.0
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} threads, {} iterations, {}, {:.2} M it/s, checksum={:.3e}",
            self.label,
            self.threads,
            group_thousands(self.iterations),
            format_duration(self.elapsed),
            self.throughput_mits(),
            self.checksum
        )?;
        if let Some(err) = self.rel_error {
            write!(f, ", rel_err={:.2e}", err)?;
        }
        Ok(())
    }
}

/// Relative error of `actual` against `expected`; zero when both are zero.
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected == 0.0 {
        actual.abs()
    } else {
        ((actual - expected) / expected).abs()
    }
}

/// Millisecond precision under a minute, `XmYs` above.
pub fn format_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs < 60.0 {
        format!("{:.3}s", secs)
    } else {
        let whole = elapsed.as_secs();
        format!("{}m{}s", whole / 60, whole % 60)
    }
}

/// `4000000000` -> `4,000,000,000`
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
