// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Running the minimizer for one k or for every valid k.
//!
//! # Example
//!
//! ```
//! use local_properties::search::{driver, KSelection, SearchOptions};
//!
//! let config = "12141218".parse().unwrap();
//! let mut out = Vec::new();
//! driver::run(&config, KSelection::Single(4), &SearchOptions::sequential(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "(4,4) condition with (0, 1, 2, 3)\n");
//! ```

use crate::combinations::binomial;
use crate::context::MemoizedData;
use crate::errors::SearchError;
use crate::geometry::{Configuration, Subset};
use crate::search::{Minimizer, SearchOptions};
use std::fmt;
use std::io::Write;
use std::ops::RangeInclusive;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Smallest subset size with a meaningful distance count.
pub const MIN_K: usize = 3;

/// Which subset sizes to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KSelection {
    /// A single subset size.
    Single(usize),
    /// Every k in `3..=n`.
    All,
}

impl KSelection {
    /// The subset sizes to run for a configuration with `points` points.
    pub fn values(self, points: usize) -> RangeInclusive<usize> {
        match self {
            KSelection::Single(k) => k..=k,
            KSelection::All => MIN_K..=points,
        }
    }
}

/// The (k, l) condition found for one k, with its witness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub k: usize,
    /// The minimum distinct-distance count l.
    pub count: usize,
    pub witness: Subset,
}

impl fmt::Display for ResultRecord {
    /// Format as "(4,4) condition with (0, 1, 2, 3)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{}) condition with {}", self.k, self.count, self.witness)
    }
}

/// Compute every selected k in increasing order.
///
/// Each record is written to `out` as one line as soon as its k is done, and
/// all records are returned.
pub fn run<W: Write>(
    config: &Configuration,
    selection: KSelection,
    options: &SearchOptions,
    out: &mut W,
) -> Result<Vec<ResultRecord>, SearchError> {
    let memo = MemoizedData::new(config.clone());
    let minimizer = Minimizer::new(&memo, options)?;
    let points = memo.num_points();

    let mut records = Vec::new();
    for k in selection.values(points) {
        info!(k, points, subsets = binomial(points, k), "searching");
        let started = Instant::now();
        let outcome = minimizer.minimize(k);

        for (name, value) in outcome.statistics.iter() {
            debug!(k, counter = name, value, "statistics");
        }

        let Some(minimum) = outcome.minimum else {
            warn!(k, points, "no subsets of this size");
            continue;
        };
        let record = ResultRecord {
            k,
            count: minimum.count,
            witness: minimum.witness,
        };
        info!(
            k,
            count = record.count,
            witness = %record.witness,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "minimum found"
        );

        writeln!(out, "{}", record)?;
        out.flush()?;
        records.push(record);
    }
    Ok(records)
}
