// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Local properties of one-dimensional point configurations.
//!
//! A configuration such as `12141218` describes 9 points, one at each `|`:
//!
//! ```text
//! |1|2|1|4|1|2|1|8|
//! ```
//!
//! The symbols stand for lengths that are linearly independent over the
//! integers, so two spans are the same distance exactly when they contain
//! the same symbols the same number of times: `12` and `21` are equal.
//!
//! A configuration satisfies the **(k,l) condition** if every k of its
//! points determine at least l distinct distances. This crate computes the
//! largest such l for a given k, by exhaustive enumeration, together with a
//! witness: the lexicographically first k-subset that determines exactly l
//! distances.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed once per configuration:
//! - Interned canonical distance of every point pair
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Owned by each search worker:
//! - Scratch marks for counting distinct distances
//! - Statistics counters
//!
//! # Search Algorithm
//!
//! 1. **Encode**: every span becomes a multiset of symbols ([`geometry::Distance`])
//! 2. **Count**: a subset's distinct distances via interned ids ([`search::counter`])
//! 3. **Minimize**: fold over all k-combinations in lexicographic order ([`search::minimizer`])
//! 4. **Drive**: one k, or every k from 3 to n ([`search::driver`])
//!
//! # Parallelization
//!
//! The minimizer can split the combinations by their first point. Each part
//! is searched by its own [`SearchContext`] on a rayon worker, sharing the
//! MEMO data, and the partial minima are reduced so that the reported
//! witness is the same as in a sequential run.
//!
//! # Example
//!
//! ```
//! use local_properties::context::MemoizedData;
//! use local_properties::search::minimizer::minimize_sequential;
//!
//! let memo = MemoizedData::new("12141218".parse().unwrap());
//! let minimum = minimize_sequential(&memo, 4).minimum.unwrap();
//! assert_eq!(minimum.count, 4);
//! assert_eq!(minimum.witness.to_string(), "(0, 1, 2, 3)");
//! ```

pub mod cli;
pub mod combinations;
pub mod context;
pub mod errors;
pub mod geometry;
pub mod memo;
pub mod search;
pub mod state;

// Re-export commonly used types
pub use context::{MemoizedData, SearchContext};
pub use errors::{InputError, SearchError};
pub use geometry::{Configuration, Distance, Subset};
pub use search::{KSelection, ResultRecord, SearchOptions};
