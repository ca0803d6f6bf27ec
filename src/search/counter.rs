// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counting the distinct distances determined by a subset.
//!
//! [`count_distances`] works directly on the configuration and hashes one
//! [`Distance`](crate::geometry::Distance) per pair. [`DistanceCounter`]
//! gives the same answer from the interned ids of a [`DistanceTable`], with
//! a scratch array that is reused across calls, and is what the minimizer
//! runs in its inner loop.

use crate::geometry::subset::pairs;
use crate::geometry::{Configuration, Point};
use crate::memo::DistanceTable;
use std::collections::HashSet;

/// Number of distinct canonical distances among all pairs of `points`.
///
/// `points` must be strictly increasing. The result lies between 0 and
/// C(points.len(), 2).
pub fn count_distances(config: &Configuration, points: &[Point]) -> usize {
    pairs(points)
        .map(|(p1, p2)| config.distance(p1, p2))
        .collect::<HashSet<_>>()
        .len()
}

/// Reusable distinct-distance counter over a [`DistanceTable`].
///
/// `seen[id] == epoch` marks an id as already counted for the current
/// subset; bumping the epoch clears every mark at once.
#[derive(Debug, Clone)]
pub struct DistanceCounter {
    seen: Vec<u32>,
    epoch: u32,
}

impl DistanceCounter {
    /// Create a counter sized for `table`.
    pub fn new(table: &DistanceTable) -> Self {
        Self {
            seen: vec![0; table.len()],
            epoch: 0,
        }
    }

    /// Number of distinct distances among all pairs of `points`.
    pub fn count(&mut self, table: &DistanceTable, points: &[Point]) -> usize {
        self.count_below(table, points, usize::MAX)
            .map_or(usize::MAX, |(count, _)| count)
    }

    /// Count distinct distances, giving up as soon as `bound` is reached.
    ///
    /// Returns `Some((count, pairs_examined))` when `count < bound`, and
    /// `None` otherwise.
    pub fn count_below(
        &mut self,
        table: &DistanceTable,
        points: &[Point],
        bound: usize,
    ) -> Option<(usize, u64)> {
        self.next_epoch();
        let mut distinct = 0;
        let mut examined = 0u64;
        for (i, &p1) in points.iter().enumerate() {
            for &p2 in &points[i + 1..] {
                examined += 1;
                let id = table.id(p1, p2) as usize;
                if self.seen[id] != self.epoch {
                    self.seen[id] = self.epoch;
                    distinct += 1;
                    if distinct >= bound {
                        return None;
                    }
                }
            }
        }
        if distinct >= bound {
            return None;
        }
        Some((distinct, examined))
    }

    fn next_epoch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        if self.epoch == 0 {
            self.seen.fill(0);
            self.epoch = 1;
        }
    }
}
