// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for input validation and search.
//!
//! Every `InputError` is detected before enumeration starts and leads the
//! command line to print its usage text. `SearchError` covers the few ways a
//! validated run can still fail.

use thiserror::Error;

/// Errors in the command-line inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// No configuration argument was supplied.
    #[error("missing configuration argument")]
    MissingConfiguration,

    /// The configuration argument is the empty string.
    #[error("configuration is empty")]
    EmptyConfiguration,

    /// The configuration contains a character that is not a letter or digit.
    #[error("configuration symbol {symbol:?} at position {position} is not alphanumeric")]
    MalformedConfiguration { symbol: char, position: usize },

    /// The k argument is not an integer.
    #[error("k must be an integer, got {0:?}")]
    MalformedK(String),

    /// k is neither 0 nor within `3..=points`.
    #[error("k = {k} is out of range: expected 0 or 3 <= k <= {points}")]
    KOutOfRange { k: i64, points: usize },
}

/// Errors raised while running a validated search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The worker pool for the parallel minimizer could not be built.
    #[error("could not build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Writing a result line failed.
    #[error("could not write result: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_display() {
        assert_eq!(
            InputError::MalformedConfiguration {
                symbol: ' ',
                position: 3
            }
            .to_string(),
            "configuration symbol ' ' at position 3 is not alphanumeric"
        );
        assert_eq!(
            InputError::KOutOfRange { k: 2, points: 9 }.to_string(),
            "k = 2 is out of range: expected 0 or 3 <= k <= 9"
        );
        assert_eq!(
            InputError::MalformedK("x".into()).to_string(),
            "k must be an integer, got \"x\""
        );
    }
}
