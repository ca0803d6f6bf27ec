// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symbol type for configuration segments.
//!
//! Each symbol names one linearly independent unit length. A configuration
//! such as `12141218` uses the four symbols `1`, `2`, `4` and `8`.

use std::fmt;

/// A single alphanumeric configuration symbol.
///
/// This is a newtype wrapper to provide type safety and prevent mixing
/// symbols with arbitrary characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(char);

impl Symbol {
    /// Create a new symbol, panicking if the character is not alphanumeric.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not alphanumeric.
    pub fn new(value: char) -> Self {
        assert!(value.is_alphanumeric(), "Symbol not alphanumeric: {:?}", value);
        Self(value)
    }

    /// Try to create a new symbol, returning None if not alphanumeric.
    pub fn try_new(value: char) -> Option<Self> {
        if value.is_alphanumeric() {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the underlying character.
    pub fn to_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
