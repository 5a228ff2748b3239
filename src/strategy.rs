use crate::partition::partition_range;
use num::Float;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::sync::Mutex;

/// How the indexed sum at the heart of a quadrature rule is accumulated.
///
/// All four strategies compute the identical mathematical quantity and
/// agree to within floating-point rounding; they differ only in how the
/// work is split across the pool and where synchronization happens.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SummationStrategy {
    /// Single-pass reference implementation, no worker pool involved.
    Serial,
    /// Parallel loop; every term is added to a mutex-guarded accumulator.
    /// Correct but serializes on the lock once per term.
    CriticalSection,
    /// Parallel loop with per-task partial sums combined by an associative
    /// `+` reduction. Summation order is not fixed, so results agree with
    /// the other strategies only up to reassociation.
    Reduction,
    /// Each worker derives its own contiguous index range, accumulates a
    /// private partial sum, and merges it into the shared slot table
    /// exactly once. One lock acquisition per worker rather than per term.
    ManualPartition,
}

impl SummationStrategy {
    /// Accumulate `term(i)` over the half-open index range `lo..n`.
    ///
    /// A panic in `term` propagates to the caller; partial sums computed by
    /// other workers are discarded.
    pub(crate) fn sum<T, F>(self, pool: &ThreadPool, lo: usize, n: usize, term: F) -> T
    where
        T: Float + Send + Sync,
        F: Fn(usize) -> T + Send + Sync,
    {
        match self {
            SummationStrategy::Serial => (lo..n).fold(T::zero(), |acc, i| acc + term(i)),
            SummationStrategy::CriticalSection => pool.install(|| {
                let sum = Mutex::new(T::zero());
                (lo..n).into_par_iter().for_each(|i| {
                    let t = term(i);
                    let mut guard = sum.lock().unwrap();
                    *guard = *guard + t;
                });
                sum.into_inner().unwrap()
            }),
            SummationStrategy::Reduction => pool.install(|| {
                (lo..n)
                    .into_par_iter()
                    .map(&term)
                    .reduce(T::zero, |a, b| a + b)
            }),
            SummationStrategy::ManualPartition => {
                let partials = Mutex::new(vec![T::zero(); pool.current_num_threads()]);
                pool.broadcast(|ctx| {
                    let tid = ctx.index();
                    let mut psum = T::zero();
                    for i in partition_range(n, ctx.num_threads(), tid, lo) {
                        psum = psum + term(i);
                    }
                    let mut slots = partials.lock().unwrap();
                    slots[tid] = psum;
                });
                // Folding the slots in worker order keeps repeated runs at a
                // fixed pool size bit-identical.
                partials
                    .into_inner()
                    .unwrap()
                    .into_iter()
                    .fold(T::zero(), |acc, p| acc + p)
            }
        }
    }

    /// Accumulate two independent sums, `mid(i)` over `0..n` and
    /// `boundary(i)` over `1..n`.
    ///
    /// For `ManualPartition` both partial sums are computed inside a single
    /// parallel region, one partition per worker per sum, and merged once
    /// per worker. The other strategies run two independent passes.
    pub(crate) fn sum_pair<T, F1, F2>(
        self,
        pool: &ThreadPool,
        n: usize,
        mid: F1,
        boundary: F2,
    ) -> (T, T)
    where
        T: Float + Send + Sync,
        F1: Fn(usize) -> T + Send + Sync,
        F2: Fn(usize) -> T + Send + Sync,
    {
        match self {
            SummationStrategy::ManualPartition => {
                let nworkers = pool.current_num_threads();
                let partials = Mutex::new(vec![(T::zero(), T::zero()); nworkers]);
                pool.broadcast(|ctx| {
                    let tid = ctx.index();
                    let mut psum1 = T::zero();
                    for i in partition_range(n, ctx.num_threads(), tid, 0) {
                        psum1 = psum1 + mid(i);
                    }
                    // The boundary sum starts at index 1, so its partition
                    // gets its own low bound rather than reusing the
                    // midpoint partition.
                    let mut psum2 = T::zero();
                    for i in partition_range(n, ctx.num_threads(), tid, 1) {
                        psum2 = psum2 + boundary(i);
                    }
                    let mut slots = partials.lock().unwrap();
                    slots[tid] = (psum1, psum2);
                });
                partials.into_inner().unwrap().into_iter().fold(
                    (T::zero(), T::zero()),
                    |(a1, a2), (p1, p2)| (a1 + p1, a2 + p2),
                )
            }
            _ => (self.sum(pool, 0, n, mid), self.sum(pool, 1, n, boundary)),
        }
    }
}
