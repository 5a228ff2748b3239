use std::ops::Range;

/// Compute the half-open index range `[start, end)` owned by one worker.
///
/// The full index space `lo..n` is split into `nworkers` contiguous chunks
/// of `ceil(n / nworkers)` indices. The chunk belonging to `worker` is then
/// clamped against the edges: its low end is raised to `lo` and its high
/// end is lowered to `n`. Workers past the end of the index space receive
/// an empty range. Over all workers the returned ranges cover `lo..n`
/// exactly once, with no overlap, for every worker count from 1 upward.
pub(crate) fn partition_range(n: usize, nworkers: usize, worker: usize, lo: usize) -> Range<usize> {
    debug_assert!(nworkers >= 1);
    let chunk = (n + nworkers - 1) / nworkers;
    let start = (worker * chunk).max(lo);
    let end = ((worker + 1) * chunk).min(n);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every index in `lo..n` must be assigned to exactly one worker.
    fn assert_covers_exactly_once(n: usize, nworkers: usize, lo: usize) {
        let mut counts = vec![0usize; n];
        for worker in 0..nworkers {
            for i in partition_range(n, nworkers, worker, lo) {
                counts[i] += 1;
            }
        }
        for (i, &c) in counts.iter().enumerate() {
            let expected = if i >= lo { 1 } else { 0 };
            assert_eq!(
                c, expected,
                "index {} counted {} times (n={}, nworkers={}, lo={})",
                i, c, n, nworkers, lo
            );
        }
    }

    #[test]
    fn test_completeness() {
        for &n in &[1, 2, 3, 5, 8, 17, 100, 1001] {
            for nworkers in 1..=9 {
                assert_covers_exactly_once(n, nworkers, 0);
                assert_covers_exactly_once(n, nworkers, 1);
            }
        }
    }

    #[test]
    fn test_single_worker_covers_whole_range() {
        assert_eq!(partition_range(10, 1, 0, 0), 0..10);
        assert_eq!(partition_range(10, 1, 0, 1), 1..10);
    }

    #[test]
    fn test_low_end_clamped() {
        // First worker's chunk starts at 0 but the boundary sum starts at 1.
        let r = partition_range(8, 4, 0, 1);
        assert_eq!(r, 1..2);
    }

    #[test]
    fn test_high_end_clamped() {
        // Last chunk of ceil(7/2) = 4 indices would run past n = 7.
        let r = partition_range(7, 2, 1, 0);
        assert_eq!(r, 4..7);
    }

    #[test]
    fn test_worker_past_end_is_empty() {
        // n = 2 with 8 workers leaves most workers with nothing to do.
        for worker in 2..8 {
            assert!(partition_range(2, 8, worker, 0).is_empty());
        }
    }

    #[test]
    fn test_n_one_boundary_range_is_vacuous() {
        for worker in 0..4 {
            assert!(partition_range(1, 4, worker, 1).is_empty());
        }
    }
}
