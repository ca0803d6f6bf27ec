// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive search for the smallest number of distinct distances.
//!
//! # Organization
//!
//! - `counter`: distinct distances determined by one subset
//! - `minimizer`: minimum over all k-subsets, sequential or parallel
//! - `driver`: one k or every valid k, one result line per k
//! - `options`: how the minimizer distributes work

pub mod counter;
pub mod driver;
pub mod minimizer;
pub mod options;

pub use counter::{count_distances, DistanceCounter};
pub use driver::{KSelection, ResultRecord};
pub use minimizer::{Minimizer, Minimum, Outcome};
pub use options::SearchOptions;
