// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure that combines:
//! - Tier 1 (MEMO): Immutable precomputed data, shared by reference
//! - Tier 2 (DYNAMIC): Scratch space and statistics owned by one worker
//!
//! This design enables parallelization by allowing multiple independent
//! SearchContext instances to operate on the same MEMO data.
//!
//! # Example
//!
//! ```
//! use local_properties::context::{MemoizedData, SearchContext};
//!
//! let memo = MemoizedData::new("12141218".parse().unwrap());
//! let mut ctx = SearchContext::new(&memo);
//! assert_eq!(ctx.count(&[0, 2, 5, 7]), 4);
//! ```

use crate::geometry::{Configuration, Point};
use crate::memo::DistanceTable;
use crate::search::counter::DistanceCounter;
use crate::state::{Counters, Statistics};

/// Immutable precomputed data (Tier 1: MEMO).
///
/// Computed once per configuration and never changed during search.
#[derive(Debug, Clone)]
pub struct MemoizedData {
    /// The configuration being searched.
    pub configuration: Configuration,

    /// Interned distance of every point pair.
    pub distances: DistanceTable,
}

impl MemoizedData {
    /// Initialize all MEMO data structures for `configuration`.
    pub fn new(configuration: Configuration) -> Self {
        let distances = DistanceTable::initialize(&configuration);
        Self {
            configuration,
            distances,
        }
    }

    /// Number of points (n).
    pub fn num_points(&self) -> usize {
        self.configuration.num_points()
    }
}

/// Per-worker search state over shared MEMO data.
#[derive(Debug)]
pub struct SearchContext<'a> {
    /// Immutable precomputed data (Tier 1)
    pub memo: &'a MemoizedData,
    /// Scratch space for distinct-distance counting (Tier 2)
    counter: DistanceCounter,
    /// Counters for this worker (Tier 2)
    pub statistics: Statistics,
}

impl<'a> SearchContext<'a> {
    pub fn new(memo: &'a MemoizedData) -> Self {
        Self {
            memo,
            counter: DistanceCounter::new(&memo.distances),
            statistics: Statistics::new(),
        }
    }

    /// Number of distinct distances determined by `points`.
    pub fn count(&mut self, points: &[Point]) -> usize {
        self.count_below(points, usize::MAX).unwrap_or(usize::MAX)
    }

    /// Like [`count`](Self::count), but returns `None` as soon as the count
    /// reaches `bound`.
    pub fn count_below(&mut self, points: &[Point], bound: usize) -> Option<usize> {
        self.statistics.increment_counter(Counters::SubsetsEvaluated);
        match self.counter.count_below(&self.memo.distances, points, bound) {
            Some((count, examined)) => {
                self.statistics.add(Counters::PairsExamined, examined);
                Some(count)
            }
            None => {
                self.statistics.increment_counter(Counters::SubsetsPruned);
                None
            }
        }
    }

    /// Consume the context, keeping its statistics.
    pub fn into_statistics(self) -> Statistics {
        self.statistics
    }
}
