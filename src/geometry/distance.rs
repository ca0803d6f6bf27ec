// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical distance values.
//!
//! The symbols of a configuration stand for lengths that are linearly
//! independent over the integers, so the distance covered by a span depends
//! only on how many times each symbol occurs in it. A [`Distance`] is that
//! multiset: the spans `12` and `21` are the same distance `{1:1, 2:1}`.
//!
//! # Examples
//!
//! ```
//! use local_properties::geometry::{encode, Symbol};
//!
//! let forward = [Symbol::new('1'), Symbol::new('2')];
//! let backward = [Symbol::new('2'), Symbol::new('1')];
//!
//! assert_eq!(encode(&forward), encode(&backward));
//! assert_eq!(format!("{}", encode(&forward)), "{1:1, 2:1}");
//! ```

use crate::geometry::Symbol;
use std::collections::BTreeMap;
use std::fmt;

/// Multiset of symbols covered by a span.
///
/// Equality and hashing are multiset equality: the order of symbols in the
/// originating span never matters. Symbols with multiplicity zero are never
/// stored, so equal multisets have identical representations.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(BTreeMap<Symbol, usize>);

impl Distance {
    /// The distance of a zero-length span.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a distance from `(symbol, multiplicity)` pairs.
    ///
    /// Pairs with multiplicity zero are skipped; repeated symbols accumulate.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (Symbol, usize)>,
    {
        let mut map = BTreeMap::new();
        for (symbol, count) in counts {
            if count > 0 {
                *map.entry(symbol).or_insert(0) += count;
            }
        }
        Self(map)
    }

    /// Number of times `symbol` occurs.
    pub fn multiplicity(&self, symbol: Symbol) -> usize {
        self.0.get(&symbol).copied().unwrap_or(0)
    }

    /// Total number of unit segments (the span length).
    pub fn len(&self) -> usize {
        self.0.values().sum()
    }

    /// True for the distance of a zero-length span.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(symbol, multiplicity)` in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, usize)> + '_ {
        self.0.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

/// Encode a span as its canonical distance value.
pub fn encode(span: &[Symbol]) -> Distance {
    let mut map = BTreeMap::new();
    for &symbol in span {
        *map.entry(symbol).or_insert(0) += 1;
    }
    Distance(map)
}

impl fmt::Display for Distance {
    /// Format a distance as "{1:2, 4:1}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (symbol, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}:{}", symbol, count)?;
        }
        write!(f, "}}")
    }
}
