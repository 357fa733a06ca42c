use compute_ext::model::{
    compute_parallel, compute_sequential, expected_sum_squares, static_partitions,
    ParallelReducer,
};

// --- Helpers ---

fn assert_rel_close(actual: f64, expected: f64, rel_tol: f64) {
    let scale = expected.abs().max(1e-300);
    let rel = (actual - expected).abs() / scale;
    assert!(
        rel <= rel_tol,
        "actual={actual:e} expected={expected:e} rel={rel:e}"
    );
}

// --- Tests ---

#[test]
fn sequential_matches_closed_form() {
    for n in [0, 1, 2, 5, 17, 1000, 65_537, 250_000] {
        assert_rel_close(compute_sequential(n), expected_sum_squares(n), 1e-9);
    }
}

#[test]
fn concrete_scenarios() {
    assert_rel_close(compute_sequential(5), 3e-5, 1e-12);
    assert_rel_close(compute_sequential(1000), 332.8335, 1e-12);
    assert_rel_close(compute_parallel(1000, 4).unwrap(), 332.8335, 1e-12);
}

#[test]
fn empty_ranges_are_zero() {
    assert_eq!(compute_sequential(0), 0.0);
    assert_eq!(compute_sequential(1), 0.0);
    for threads in [-1, 0, 1, 2, 5] {
        assert_eq!(compute_parallel(0, threads).unwrap(), 0.0);
        assert_eq!(compute_parallel(1, threads).unwrap(), 0.0);
    }
}

#[test]
fn negative_n_is_an_empty_range() {
    assert_eq!(compute_sequential(-7), 0.0);
    assert_eq!(compute_parallel(-7, 4).unwrap(), 0.0);
}

#[test]
fn parallel_agrees_with_sequential_across_thread_counts() {
    let n = 4_000_000;
    let seq = compute_sequential(n);
    for threads in [0, 1, 2, 3, 4, 6, 8, 13] {
        let par = compute_parallel(n, threads).unwrap();
        // Partial sums exceed 2^53 here, so only the low bits may move.
        assert_rel_close(par, seq, 1e-9);
    }
}

#[test]
fn parallel_is_bit_reproducible() {
    let n = 3_333_333;
    for threads in [2, 5] {
        let first = compute_parallel(n, threads).unwrap();
        for _ in 0..4 {
            assert_eq!(compute_parallel(n, threads).unwrap().to_bits(), first.to_bits());
        }
    }
}

#[test]
fn sequential_is_monotonic() {
    let values: Vec<f64> = (0..500).step_by(7).map(compute_sequential).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn thread_hint_does_not_touch_global_pool() {
    let before = rayon::current_num_threads();
    let _ = compute_parallel(10_000, 3).unwrap();
    let _ = compute_parallel(10_000, 7).unwrap();
    assert_eq!(rayon::current_num_threads(), before);
}

#[test]
fn reducer_uses_one_partition_per_worker() {
    let reducer = ParallelReducer::new(4).unwrap();
    assert_eq!(reducer.threads(), 4);
    assert_eq!(static_partitions(1000, reducer.threads()).len(), 4);
    assert_rel_close(reducer.reduce(1000), 332.8335, 1e-12);
}

#[test]
fn large_thread_hint_succeeds() {
    assert_eq!(compute_parallel(10, 2000).unwrap(), compute_sequential(10));
    assert_rel_close(compute_parallel(10, 2000).unwrap(), 0.000285, 1e-12);
    assert_rel_close(compute_parallel(1000, 5000).unwrap(), 332.8335, 1e-12);
}
