// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, owned by one worker).
//!
//! - Statistics counters for a search
//! - Scratch space for counting distinct distances lives with the counter
//!   in [`crate::search::counter`].

pub mod statistics;

pub use statistics::{Counters, Statistics};
