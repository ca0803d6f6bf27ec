// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Distance-related MEMO data structures.
//!
//! Every subset evaluation looks at C(k, 2) point pairs, and the same pair
//! is looked at by a large share of the C(n, k) subsets. This module
//! computes the canonical distance of every pair once and interns it, so
//! that the search compares small integer ids instead of multisets.
//!
//! # Prefix Counts
//!
//! `prefix[i][s]` is the number of occurrences of alphabet symbol `s` in the
//! first `i` configuration symbols. The distance between points p1 < p2 is
//! then `prefix[p2] - prefix[p1]`, so each pair costs O(alphabet).

use crate::geometry::{Configuration, Distance, Point};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// Dense identifier of an interned distance.
///
/// Two point pairs share an id exactly when their spans are the same
/// multiset of symbols.
pub type DistanceId = u32;

/// MEMO table of the interned distance of every point pair.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    /// Number of points (n).
    points: usize,

    /// `ids[p1 * points + p2]` for p1 < p2. Entries with p1 >= p2 are unused.
    ids: Vec<DistanceId>,

    /// Distinct distances, indexed by id, in order of first appearance.
    distances: Vec<Distance>,
}

impl DistanceTable {
    /// Compute the table for a configuration.
    pub fn initialize(config: &Configuration) -> Self {
        let points = config.num_points();
        let alphabet = config.alphabet();
        let width = alphabet.len();

        let mut prefix = vec![0usize; points * width];
        for (i, &symbol) in config.symbols().iter().enumerate() {
            let (done, rest) = prefix.split_at_mut((i + 1) * width);
            rest[..width].copy_from_slice(&done[i * width..]);
            rest[alphabet.partition_point(|&s| s < symbol)] += 1;
        }

        let mut interned: HashMap<Distance, DistanceId> = HashMap::new();
        let mut distances = Vec::new();
        let mut ids = vec![0; points * points];

        for p1 in 0..points {
            for p2 in p1 + 1..points {
                let distance = Distance::from_counts(alphabet.iter().enumerate().map(|(s, &symbol)| {
                    (symbol, prefix[p2 * width + s] - prefix[p1 * width + s])
                }));
                let next = distances.len() as DistanceId;
                let id = match interned.entry(distance) {
                    Entry::Occupied(entry) => *entry.get(),
                    Entry::Vacant(entry) => {
                        distances.push(entry.key().clone());
                        *entry.insert(next)
                    }
                };
                ids[p1 * points + p2] = id;
            }
        }

        debug!(
            points,
            alphabet = width,
            pairs = points * points.saturating_sub(1) / 2,
            distinct = distances.len(),
            "distance table initialized"
        );

        Self {
            points,
            ids,
            distances,
        }
    }

    /// Interned distance between points `p1 < p2`.
    #[inline]
    pub fn id(&self, p1: Point, p2: Point) -> DistanceId {
        debug_assert!(p1 < p2 && p2 < self.points, "Invalid pair ({}, {})", p1, p2);
        self.ids[p1 * self.points + p2]
    }

    /// The distance behind an id.
    pub fn distance(&self, id: DistanceId) -> &Distance {
        &self.distances[id as usize]
    }

    /// Number of distinct distances determined by the whole configuration.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// True only for a configuration with a single point, which cannot be built.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Number of points (n).
    pub fn num_points(&self) -> usize {
        self.points
    }
}
