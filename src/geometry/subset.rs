// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Subsets of points.

use crate::geometry::Point;
use std::fmt;

/// A strictly increasing tuple of point indices.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Subset(Vec<Point>);

impl Subset {
    /// Create a subset, panicking if the points are not strictly increasing.
    pub fn new(points: Vec<Point>) -> Self {
        assert!(
            points.windows(2).all(|w| w[0] < w[1]),
            "Subset points must be strictly increasing: {:?}",
            points
        );
        Self(points)
    }

    /// The points, in increasing order.
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All unordered pairs `(p1, p2)` with `p1 < p2`, in lexicographic order.
    pub fn pairs(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        pairs(&self.0)
    }
}

/// All pairs `(points[i], points[j])` with `i < j`.
pub(crate) fn pairs(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    points
        .iter()
        .enumerate()
        .flat_map(move |(i, &p1)| points[i + 1..].iter().map(move |&p2| (p1, p2)))
}

impl fmt::Display for Subset {
    /// Format a subset as a tuple: "(0, 2, 5, 7)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, point) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", point)?;
        }
        write!(f, ")")
    }
}
