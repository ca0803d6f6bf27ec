// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for one-dimensional configurations.
//!
//! This module contains type-safe representations of the problem's primitives:
//! - Symbol: a unit length label
//! - Configuration: the symbol sequence defining the points
//! - Distance: the multiset of symbols covered by a span
//! - Subset: strictly increasing tuple of points

pub mod configuration;
pub mod distance;
pub mod subset;
pub mod symbol;

// Re-export for convenience
pub use configuration::{Configuration, Point};
pub use distance::{encode, Distance};
pub use subset::Subset;
pub use symbol::Symbol;
