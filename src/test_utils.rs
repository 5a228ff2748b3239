use crate::strategy::SummationStrategy;

pub(crate) const ALL_STRATEGIES: [SummationStrategy; 4] = [
    SummationStrategy::Serial,
    SummationStrategy::CriticalSection,
    SummationStrategy::Reduction,
    SummationStrategy::ManualPartition,
];

pub(crate) fn test_pool(threads: usize) -> rayon::ThreadPool {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .unwrap()
}

pub(crate) fn test_rel(result: f64, expected: f64, relative_error: f64) {
    let mut status: i32 = 0;
    // Check for nan or inf or number
    if result.is_nan() || expected.is_nan() {
        status = if result.is_nan() != expected.is_nan() {
            1
        } else {
            0
        };
    } else if result.is_infinite() || expected.is_infinite() {
        status = if result.is_infinite() != expected.is_infinite() {
            1
        } else {
            0
        };
    } else if expected != 0.0 {
        status = if (result - expected).abs() / expected.abs() > relative_error {
            1
        } else {
            0
        };
    } else {
        status = if result.abs() > relative_error { 1 } else { 0 };
    }

    assert!(
        status == 0,
        "observed: {:?}, expected: {:?}",
        result,
        expected
    );
}

/// f(x) = x^3; Simpson's rule integrates it exactly.
pub(crate) fn cube(x: f64) -> f64 {
    x * x * x
}

/// f(x) = 1/x with the singular point guarded to zero.
pub(crate) fn reciprocal_guarded(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x.recip()
    }
}

/// f(x) = x; the trapezoidal rule integrates it exactly.
pub(crate) fn identity(x: f64) -> f64 {
    x
}
