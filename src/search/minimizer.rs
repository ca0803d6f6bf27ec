// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimum distinct-distance count over all k-subsets.
//!
//! The minimizer walks the k-combinations of the points in lexicographic
//! order and keeps the first combination with the smallest count. A later
//! combination replaces the witness only if its count is strictly smaller,
//! so ties always go to the lexicographically first subset.
//!
//! # Parallel Search
//!
//! Every combination starting at point p comes before every combination
//! starting at p + 1. The parallel minimizer therefore searches each first
//! point independently and reduces the partial results by
//! `(count, first point)`, which reproduces the sequential witness exactly.

use crate::combinations::advance;
use crate::context::{MemoizedData, SearchContext};
use crate::errors::SearchError;
use crate::geometry::{Point, Subset};
use crate::search::SearchOptions;
use crate::state::{Counters, Statistics};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// The smallest distinct-distance count for some k, and its first witness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minimum {
    pub count: usize,
    pub witness: Subset,
}

/// Result of one minimization.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// `None` when there are fewer than k points.
    pub minimum: Option<Minimum>,
    pub statistics: Statistics,
}

/// Runs minimizations over one configuration.
pub struct Minimizer<'a> {
    memo: &'a MemoizedData,
    parallel: bool,
    /// Dedicated pool when a thread count was requested.
    pool: Option<ThreadPool>,
}

impl<'a> Minimizer<'a> {
    pub fn new(memo: &'a MemoizedData, options: &SearchOptions) -> Result<Self, SearchError> {
        let pool = match (options.is_parallel(), options.thread_count()) {
            (true, Some(threads)) => Some(ThreadPoolBuilder::new().num_threads(threads).build()?),
            _ => None,
        };
        Ok(Self {
            memo,
            parallel: options.is_parallel(),
            pool,
        })
    }

    /// Minimize over all k-subsets.
    pub fn minimize(&self, k: usize) -> Outcome {
        if !self.parallel {
            return minimize_sequential(self.memo, k);
        }
        match &self.pool {
            Some(pool) => pool.install(|| minimize_parallel(self.memo, k)),
            None => minimize_parallel(self.memo, k),
        }
    }
}

/// Minimize on the calling thread.
pub fn minimize_sequential(memo: &MemoizedData, k: usize) -> Outcome {
    let mut ctx = SearchContext::new(memo);
    let minimum = search_partition(&mut ctx, k, None);
    Outcome {
        minimum,
        statistics: ctx.into_statistics(),
    }
}

/// Minimize on the current rayon pool, one task per first point.
pub fn minimize_parallel(memo: &MemoizedData, k: usize) -> Outcome {
    let n = memo.num_points();
    if k == 0 || k > n {
        return minimize_sequential(memo, k);
    }

    let (best, statistics) = (0..=n - k)
        .into_par_iter()
        .map(|first| {
            let mut ctx = SearchContext::new(memo);
            let best = search_partition(&mut ctx, k, Some(first));
            (best.map(|minimum| (first, minimum)), ctx.into_statistics())
        })
        .reduce(
            || (None, Statistics::new()),
            |(a, mut statistics), (b, other)| {
                statistics.merge(&other);
                (earliest_minimum(a, b), statistics)
            },
        );

    Outcome {
        minimum: best.map(|(_, minimum)| minimum),
        statistics,
    }
}

/// Keep the smaller count; on a tie keep the smaller first point.
fn earliest_minimum(
    a: Option<(Point, Minimum)>,
    b: Option<(Point, Minimum)>,
) -> Option<(Point, Minimum)> {
    match (a, b) {
        (Some(a), Some(b)) => {
            if (b.1.count, b.0) < (a.1.count, a.0) {
                Some(b)
            } else {
                Some(a)
            }
        }
        (a, None) => a,
        (None, b) => b,
    }
}

/// Fold over the k-combinations in lexicographic order, restricted to those
/// starting at `first` when given.
fn search_partition(ctx: &mut SearchContext, k: usize, first: Option<Point>) -> Option<Minimum> {
    let n = ctx.memo.num_points();
    let start = first.unwrap_or(0);
    if start + k > n {
        return None;
    }

    // Distances from the leftmost point to the others all have different
    // lengths, so no k-subset determines fewer than k - 1 distances.
    let floor = k.saturating_sub(1);

    let mut points: Vec<Point> = (start..start + k).collect();
    let mut best: Option<Minimum> = None;
    loop {
        let bound = best.as_ref().map_or(usize::MAX, |minimum| minimum.count);
        if let Some(count) = ctx.count_below(&points, bound) {
            ctx.statistics.increment_counter(Counters::Improvements);
            best = Some(Minimum {
                count,
                witness: Subset::new(points.clone()),
            });
            if count <= floor {
                break;
            }
        }
        if !advance(&mut points, n) || first.is_some_and(|p| points.first() != Some(&p)) {
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinations::Combinations;
    use crate::search::counter::count_distances;

    fn memo(s: &str) -> MemoizedData {
        MemoizedData::new(s.parse().unwrap())
    }

    /// Straightforward fold over the iterator, no pruning.
    fn reference(memo: &MemoizedData, k: usize) -> Option<Minimum> {
        Combinations::new(memo.num_points(), k).fold(None, |best: Option<Minimum>, subset| {
            let count = count_distances(&memo.configuration, subset.points());
            match best {
                Some(best) if best.count <= count => Some(best),
                _ => Some(Minimum {
                    count,
                    witness: subset,
                }),
            }
        })
    }

    #[test]
    fn test_three_symbols() {
        let memo = memo("123");
        let outcome = minimize_sequential(&memo, 3);
        let minimum = outcome.minimum.unwrap();
        assert_eq!(minimum.count, 3);
        assert_eq!(minimum.witness, Subset::new(vec![0, 1, 2]));
        assert_eq!(outcome.statistics.get(Counters::SubsetsEvaluated), 4);
        assert_eq!(outcome.statistics.get(Counters::SubsetsPruned), 3);
        assert_eq!(outcome.statistics.get(Counters::Improvements), 1);
    }

    #[test]
    fn test_floor_stops_search() {
        // (0, 1, 2) already reaches k - 1 = 2 distances.
        let memo = memo("1111");
        let outcome = minimize_sequential(&memo, 3);
        assert_eq!(outcome.statistics.get(Counters::SubsetsEvaluated), 1);
    }

    #[test]
    fn test_first_witness_wins_ties() {
        // (0, 1, 2), (0, 2, 4) and (1, 2, 3) all determine 2 distances.
        let memo = memo("1111");
        let minimum = minimize_sequential(&memo, 3).minimum.unwrap();
        assert_eq!(minimum.count, 2);
        assert_eq!(minimum.witness, Subset::new(vec![0, 1, 2]));
    }

    #[test]
    fn test_later_strict_improvement() {
        let memo = memo("1212");
        let minimum = minimize_sequential(&memo, 3).minimum.unwrap();
        assert_eq!(minimum.count, 2);
        assert_eq!(minimum.witness, Subset::new(vec![0, 2, 4]));
    }

    #[test]
    fn test_all_points() {
        let memo = memo("1214");
        let minimum = minimize_sequential(&memo, 5).minimum.unwrap();
        assert_eq!(minimum.witness, Subset::new(vec![0, 1, 2, 3, 4]));
        assert_eq!(minimum.count, count_distances(&memo.configuration, &[0, 1, 2, 3, 4]));
    }

    #[test]
    fn test_too_many_points() {
        let memo = memo("12");
        assert!(minimize_sequential(&memo, 4).minimum.is_none());
        assert!(minimize_parallel(&memo, 4).minimum.is_none());
    }

    #[test]
    fn test_matches_reference_fold() {
        for config in ["12141218", "1213121", "abcab", "11211"] {
            let memo = memo(config);
            for k in 3..=memo.num_points() {
                let expected = reference(&memo, k);
                assert_eq!(minimize_sequential(&memo, k).minimum, expected, "{} k={}", config, k);
                assert_eq!(minimize_parallel(&memo, k).minimum, expected, "{} k={}", config, k);
            }
        }
    }

    #[test]
    fn test_parallel_statistics_cover_all_partitions() {
        let memo = memo("abcdef");
        let outcome = minimize_parallel(&memo, 3);
        // Distinct symbols: every triple determines 3 distances. Each of the
        // 5 partitions keeps its first triple and prunes the rest.
        assert_eq!(outcome.minimum.unwrap().witness, Subset::new(vec![0, 1, 2]));
        assert_eq!(outcome.statistics.get(Counters::SubsetsEvaluated), 35);
        assert_eq!(outcome.statistics.get(Counters::Improvements), 5);
        assert_eq!(outcome.statistics.get(Counters::SubsetsPruned), 30);
    }

    #[test]
    fn test_minimizer_with_pool() {
        let memo = memo("12141218");
        let options = SearchOptions::default().threads(2);
        let minimizer = Minimizer::new(&memo, &options).unwrap();
        let minimum = minimizer.minimize(4).minimum.unwrap();
        assert_eq!(minimum.count, 4);
        assert_eq!(minimum.witness, Subset::new(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_earliest_minimum() {
        let at = |first: Point, count: usize| {
            Some((
                first,
                Minimum {
                    count,
                    witness: Subset::new(vec![first]),
                },
            ))
        };
        assert_eq!(earliest_minimum(at(2, 3), at(0, 3)), at(0, 3));
        assert_eq!(earliest_minimum(at(0, 3), at(2, 2)), at(2, 2));
        assert_eq!(earliest_minimum(None, at(1, 5)), at(1, 5));
        assert_eq!(earliest_minimum(at(1, 5), None), at(1, 5));
    }
}
