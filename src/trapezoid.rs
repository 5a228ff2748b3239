use crate::result::{check_num_intervals, QuadratureResult};
use crate::strategy::SummationStrategy;
use num::Float;
use rayon::ThreadPool;

/// Composite trapezoidal rule over `n` subintervals of `[from, to]`:
///
/// `h * (f(from) + f(to) + 2 * sum_{i=1}^{n-1} f(from + i*h)) / 2`
///
/// with `h = (to - from) / n`. The bounds may be given in either order;
/// swapping them negates the result through the sign of `h`. The interior
/// sum is accumulated by `strategy` on `pool`.
pub fn trapezoid<T, F>(
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
    let two = T::from(2.0).unwrap();
    let ends = f(from) + f(to);
    let interior = strategy.sum(pool, 1, n, |i| two * f(from + T::from(i).unwrap() * h));
    Ok(h * (ends + interior) / two)
}
