//! # Sum-of-Squares Kernel
//!
//! ## Role
//! Computes `SCALE * Σ_{i=0}^{n-1} i²` on the calling thread.
//!
//! Negative and zero `n` describe an empty range and produce `0.0`; the loop
//! bound `i < n` is the only check, matching the host contract.

/// Fixed multiplier applied to the raw sum, `(0.001)²`.
pub const SCALE: f64 = 1e-6;

/// Sum of `i²` for `i` in `[start, end)`, accumulated in increasing order.
///
/// Each index is converted to `f64` before squaring, so there is no integer
/// overflow for any `i64` bound.
#[inline]
pub fn sum_squares_range(start: i64, end: i64) -> f64 {
    let mut sum = 0.0f64;
    for i in start..end {
        let di = i as f64;
        sum += di * di;
    }
    sum
}

/// Sequential reduction over `[0, n)`.
pub fn compute_sequential(n: i64) -> f64 {
    SCALE * sum_squares_range(0, n)
}

/// Closed-form `SCALE * (n-1)n(2n-1)/6`.
///
/// Uses exact `u128` arithmetic while the product fits, which makes the
/// result bit-identical to [`compute_sequential`] for every `n` whose running
/// sum stays below 2^53. Falls back to `f64` for very large `n`.
pub fn expected_sum_squares(n: i64) -> f64 {
    if n <= 0 {
        return 0.0;
    }
    let nu = n as u128;
    let exact = (nu - 1)
        .checked_mul(nu)
        .and_then(|p| p.checked_mul(2 * nu - 1))
        .map(|p| p / 6);

    match exact {
        Some(total) => SCALE * total as f64,
        None => {
            let nf = n as f64;
            SCALE * ((nf - 1.0) * nf * (2.0 * nf - 1.0) / 6.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, rel_tol: f64) {
        let denom = expected.abs().max(f64::MIN_POSITIVE);
        assert!(
            (actual - expected).abs() / denom <= rel_tol,
            "actual={actual:e} expected={expected:e}"
        );
    }

    #[test]
    fn test_empty_and_trivial_ranges() {
        assert_eq!(compute_sequential(0), 0.0);
        assert_eq!(compute_sequential(1), 0.0);
        assert_eq!(compute_sequential(-1), 0.0);
        assert_eq!(compute_sequential(i64::MIN), 0.0);
    }

    #[test]
    fn test_small_concrete_values() {
        assert_close(compute_sequential(5), 3e-5, 1e-12);
        assert_close(compute_sequential(1000), 332.8335, 1e-12);
    }

    #[test]
    fn test_range_kernel() {
        assert_eq!(sum_squares_range(2, 4), 13.0);
        assert_eq!(sum_squares_range(4, 2), 0.0);
        assert_eq!(sum_squares_range(-3, 0), 14.0);
    }

    #[test]
    fn test_matches_closed_form() {
        for n in [2, 3, 10, 999, 12_345, 100_000] {
            assert_eq!(compute_sequential(n), expected_sum_squares(n), "n={n}");
        }
        assert_close(compute_sequential(3_000_000), expected_sum_squares(3_000_000), 1e-9);
    }

    #[test]
    fn test_closed_form_large_n_falls_back() {
        let value = expected_sum_squares(i64::MAX);
        assert!(value.is_finite());
        assert!(value > 0.0);
        assert_eq!(expected_sum_squares(-10), 0.0);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = compute_sequential(0);
        for n in 1..200 {
            let cur = compute_sequential(n);
            assert!(cur >= prev, "n={n}");
            prev = cur;
        }
    }
}
