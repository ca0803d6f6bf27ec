// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! This module contains the immutable precomputed data structures:
//! - Interned canonical distance of every point pair

pub mod distances;

pub use distances::{DistanceId, DistanceTable};
