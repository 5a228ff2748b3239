use crate::result::QuadratureResult;
use crate::simpson::simpson;
use crate::strategy::SummationStrategy;
use crate::trapezoid::trapezoid;
use num::Float;
use rayon::ThreadPool;

/// One-dimensional composite quadrature integrator.
///
/// Owns a fixed-size worker pool and a [`SummationStrategy`]; the pool
/// size is fixed when the integrator is built and every call runs to
/// completion synchronously on it.
pub struct QuadratureIntegrator {
    /// Accumulation strategy used by both rules.
    pub strategy: SummationStrategy,
    /// Number of workers in the pool.
    pub threads: usize,
    /// Worker pool shared by all calls on this integrator.
    pool: ThreadPool,
}

impl QuadratureIntegrator {
    /// Integrate `f` from `from` to `to` with the composite trapezoidal
    /// rule over `n` subintervals.
    ///
    /// # Examples
    ///
    /// The trapezoidal rule is exact for linear integrands:
    /// ```
    /// use parquad::prelude::*;
    ///
    /// let integrator = QuadratureIntegratorBuilder::default()
    ///     .strategy(SummationStrategy::Reduction)
    ///     .threads(4)
    ///     .build()
    ///     .unwrap();
    /// let val = integrator.trapezoid(|x: f64| x, 0.0, 1.0, 1).unwrap();
    /// assert!((val - 0.5).abs() < 1e-15);
    /// ```
    pub fn trapezoid<T, F>(&self, f: F, from: T, to: T, n: usize) -> QuadratureResult<T>
    where
        T: Float + Send + Sync,
        F: Fn(T) -> T + Send + Sync,
    {
        trapezoid(f, from, to, n, self.strategy, &self.pool)
    }

    /// Integrate `f` from `from` to `to` with composite Simpson's rule
    /// over `n` subintervals.
    ///
    /// # Examples
    ///
    /// Simpson's rule integrates cubics exactly for any `n`:
    /// ```
    /// use parquad::prelude::*;
    ///
    /// let integrator = QuadratureIntegratorBuilder::default()
    ///     .strategy(SummationStrategy::ManualPartition)
    ///     .threads(4)
    ///     .build()
    ///     .unwrap();
    /// let val = integrator.simpson(|x: f64| x * x * x, 0.0, 1.0, 100).unwrap();
    /// assert!((val - 0.25).abs() < 1e-12);
    /// ```
    pub fn simpson<T, F>(&self, f: F, from: T, to: T, n: usize) -> QuadratureResult<T>
    where
        T: Float + Send + Sync,
        F: Fn(T) -> T + Send + Sync,
    {
        simpson(f, from, to, n, self.strategy, &self.pool)
    }
}

/// Builder struct used to construct an integrator with wanted parameters.
pub struct QuadratureIntegratorBuilder {
    /// Accumulation strategy.
    strategy: Option<SummationStrategy>,
    /// Number of workers in the pool.
    threads: Option<usize>,
}

impl QuadratureIntegratorBuilder {
    pub fn default() -> Self {
        QuadratureIntegratorBuilder {
            strategy: None,
            threads: None,
        }
    }
    /// Set the summation strategy. Defaults to `Serial`.
    pub fn strategy(mut self, strategy: SummationStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
    /// Set the number of workers in the pool. Defaults to one worker per
    /// available core.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
    /// Build the integrator, spawning its worker pool.
    pub fn build(self) -> QuadratureResult<QuadratureIntegrator> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads.unwrap_or(0))
            .build()?;
        let threads = pool.current_num_threads();
        Ok(QuadratureIntegrator {
            strategy: self.strategy.unwrap_or(SummationStrategy::Serial),
            threads,
            pool,
        })
    }
}
