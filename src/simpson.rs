use crate::result::{check_num_intervals, QuadratureResult};
use crate::strategy::SummationStrategy;
use num::Float;
use rayon::ThreadPool;

/// Composite Simpson's rule over `n` subintervals of `[from, to]`:
///
/// `h/6 * (f(from) + f(to) + 4 * sum_{i=0}^{n-1} f(from + i*h + h/2)
///                         + 2 * sum_{i=1}^{n-1} f(from + i*h))`
///
/// with `h = (to - from) / n`. The first sum samples the midpoint of every
/// subinterval, the second the interior subinterval boundaries; for
/// `n == 1` the boundary sum is vacuous and contributes zero. Both sums
/// are accumulated by `strategy` on `pool`.
pub fn simpson<T, F>(
    f: F,
    from: T,
    to: T,
    n: usize,
    strategy: SummationStrategy,
    pool: &ThreadPool,
) -> QuadratureResult<T>
where
    T: Float + Send + Sync,
    F: Fn(T) -> T + Send + Sync,
{
    check_num_intervals(n)?;
    let h = (to - from) / T::from(n).unwrap();
    let half = h / T::from(2.0).unwrap();
    let (sum1, sum2) = strategy.sum_pair(
        pool,
        n,
        |i| f(from + h * T::from(i).unwrap() + half),
        |i| f(from + h * T::from(i).unwrap()),
    );
    let two = T::from(2.0).unwrap();
    let four = T::from(4.0).unwrap();
    let six = T::from(6.0).unwrap();
    Ok(h / six * (f(from) + f(to) + four * sum1 + two * sum2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::QuadratureError;
    use crate::test_utils::*;

    #[test]
    fn test_cubic_exact_for_any_n() {
        // Simpson's rule integrates cubics exactly, independent of n.
        let pool = test_pool(4);
        for &n in &[1, 2, 3, 7, 100, 10_000] {
            for &strategy in ALL_STRATEGIES.iter() {
                let val = simpson(cube, 0.0, 1.0, n, strategy, &pool).unwrap();
                test_rel(val, 0.25, 1e-10);
            }
        }
    }

    #[test]
    fn test_one_interval_boundary_sum_vacuous() {
        let pool = test_pool(8);
        for &strategy in ALL_STRATEGIES.iter() {
            // n = 1 leaves only the midpoint term: h/6 * (f(0) + f(1) + 4*f(1/2)).
            let val = simpson(cube, 0.0, 1.0, 1, strategy, &pool).unwrap();
            test_rel(val, (0.0 + 1.0 + 4.0 * 0.125) / 6.0, 1e-15);
        }
    }

    #[test]
    fn test_strategies_agree() {
        for &n in &[1, 2, 3, 10, 100, 10_000] {
            for &threads in &[1, 2, 4, 8] {
                let pool = test_pool(threads);
                let reference =
                    simpson(cube, 0.0, 6000.0, n, SummationStrategy::Serial, &pool).unwrap();
                for &strategy in ALL_STRATEGIES.iter() {
                    let val = simpson(cube, 0.0, 6000.0, n, strategy, &pool).unwrap();
                    test_rel(val, reference, 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_reversed_bounds_negate() {
        let pool = test_pool(2);
        for &strategy in ALL_STRATEGIES.iter() {
            let fwd = simpson(cube, 0.0, 1.0, 100, strategy, &pool).unwrap();
            let rev = simpson(cube, 1.0, 0.0, 100, strategy, &pool).unwrap();
            test_rel(rev, -fwd, 1e-12);
        }
    }

    #[test]
    fn test_guarded_reciprocal_is_finite_and_consistent() {
        let pool = test_pool(4);
        let reference = simpson(
            reciprocal_guarded,
            0.0,
            100.0,
            1000,
            SummationStrategy::Serial,
            &pool,
        )
        .unwrap();
        assert!(reference.is_finite());
        for &strategy in ALL_STRATEGIES.iter() {
            let val = simpson(reciprocal_guarded, 0.0, 100.0, 1000, strategy, &pool).unwrap();
            test_rel(val, reference, 1e-9);
        }
    }

    #[test]
    fn test_zero_intervals_rejected() {
        let pool = test_pool(2);
        for &strategy in ALL_STRATEGIES.iter() {
            let err = simpson(cube, 0.0, 1.0, 0, strategy, &pool).unwrap_err();
            assert!(matches!(err, QuadratureError::InvalidNumIntervals(0)));
        }
    }
}
