// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Point configurations.
//!
//! A configuration of m symbols describes n = m + 1 points on a line. Point
//! i sits just before symbol i, and the last point sits after the last
//! symbol:
//!
//! ```text
//! |1|2|1|4|1|2|1|8|
//! 0 1 2 3 4 5 6 7 8
//! ```
//!
//! The span between points p1 < p2 is `symbols[p1..p2]`.

use crate::errors::InputError;
use crate::geometry::{encode, Distance, Symbol};
use std::fmt;
use std::str::FromStr;

/// Index of a point in a configuration, in `0..num_points()`.
pub type Point = usize;

/// An immutable, non-empty sequence of alphanumeric symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Configuration {
    symbols: Vec<Symbol>,
}

impl Configuration {
    /// Create a configuration from already validated symbols.
    ///
    /// # Panics
    ///
    /// Panics if `symbols` is empty.
    pub fn new(symbols: Vec<Symbol>) -> Self {
        assert!(!symbols.is_empty(), "Configuration must not be empty");
        Self { symbols }
    }

    /// Number of symbols (m).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: empty configurations are rejected on construction.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of points (n = m + 1).
    pub fn num_points(&self) -> usize {
        self.symbols.len() + 1
    }

    /// All symbols in order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Distinct symbols in ascending order.
    pub fn alphabet(&self) -> Vec<Symbol> {
        let mut alphabet = self.symbols.clone();
        alphabet.sort_unstable();
        alphabet.dedup();
        alphabet
    }

    /// The symbols between points `p1` and `p2`.
    ///
    /// # Panics
    ///
    /// Panics unless `p1 <= p2 < num_points()`.
    pub fn span(&self, p1: Point, p2: Point) -> &[Symbol] {
        assert!(
            p1 <= p2 && p2 < self.num_points(),
            "Span ({}, {}) out of range for {} points",
            p1,
            p2,
            self.num_points()
        );
        &self.symbols[p1..p2]
    }

    /// The canonical distance between points `p1` and `p2`.
    pub fn distance(&self, p1: Point, p2: Point) -> Distance {
        encode(self.span(p1, p2))
    }
}

impl FromStr for Configuration {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InputError::EmptyConfiguration);
        }
        let symbols = s
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Symbol::try_new(symbol)
                    .ok_or(InputError::MalformedConfiguration { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { symbols })
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
