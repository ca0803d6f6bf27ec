// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lexicographic k-combinations of `0..n`.
//!
//! Combinations are produced lazily, one at a time, in increasing
//! lexicographic order: `(0, 1, 2)`, `(0, 1, 3)`, ..., `(n-3, n-2, n-1)`.
//! The order matters because the minimizer reports the first subset that
//! reaches the minimum.
//!
//! The generator is restartable: [`advance`] steps any combination to its
//! successor in place, and [`Combinations::resume_from`] continues an
//! enumeration from an arbitrary combination.
//!
//! # Examples
//!
//! ```
//! use local_properties::combinations::Combinations;
//!
//! let all: Vec<String> = Combinations::new(4, 3).map(|s| s.to_string()).collect();
//! assert_eq!(all, vec!["(0, 1, 2)", "(0, 1, 3)", "(0, 2, 3)", "(1, 2, 3)"]);
//! ```

use crate::geometry::{Point, Subset};
use std::iter::FusedIterator;

/// Binomial coefficient C(n, k), saturating at `u64::MAX`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // Exact at every step: result * (n - i) is divisible by (i + 1).
        result = result * (n - i) as u128 / (i + 1) as u128;
        if result > u64::MAX as u128 {
            return u64::MAX;
        }
    }
    result as u64
}

/// Step `points` to the next k-combination of `0..n` in lexicographic order.
///
/// Returns false, leaving `points` untouched, when `points` is already the
/// last combination `(n-k, ..., n-1)`.
pub fn advance(points: &mut [Point], n: usize) -> bool {
    let k = points.len();
    // Rightmost position that has not reached its maximum value n - k + i.
    let Some(i) = (0..k).rev().find(|&i| points[i] + k < n + i) else {
        return false;
    };
    points[i] += 1;
    for j in i + 1..k {
        points[j] = points[j - 1] + 1;
    }
    true
}

/// Lazy iterator over the k-combinations of `0..n`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    /// The combination the next call to `next` yields.
    pending: Option<Vec<Point>>,
}

impl Combinations {
    /// All k-combinations of `0..n`. Empty when k > n.
    pub fn new(n: usize, k: usize) -> Self {
        let pending = if k <= n { Some((0..k).collect()) } else { None };
        Self { n, pending }
    }

    /// Continue an enumeration of combinations of `0..n` from `start`
    /// (inclusive).
    ///
    /// # Panics
    ///
    /// Panics if `start` is not strictly increasing or mentions a point >= n.
    pub fn resume_from(n: usize, start: &Subset) -> Self {
        assert!(
            start.points().iter().all(|&p| p < n),
            "Combination {} out of range for {} points",
            start,
            n
        );
        Self {
            n,
            pending: Some(start.points().to_vec()),
        }
    }
}

impl Iterator for Combinations {
    type Item = Subset;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.pending.take()?;
        let mut successor = current.clone();
        if advance(&mut successor, self.n) {
            self.pending = Some(successor);
        }
        Some(Subset::new(current))
    }
}

impl FusedIterator for Combinations {}
