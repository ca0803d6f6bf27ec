// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line arguments, validation and logging setup.
//!
//! Validation happens before any enumeration. Every [`InputError`] sends the
//! binary down the usage path.

use crate::errors::InputError;
use crate::geometry::Configuration;
use crate::search::driver::MIN_K;
use crate::search::{KSelection, SearchOptions};
use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Usage text printed on invalid input.
pub const USAGE: &str = "\
local-properties <config> <k (optional)>
-- <config>: e.g. 12141218
\tone point before each symbol and one after the last
\tsymbols must be single alphanumeric characters
-- <k>: size of the point subsets to minimize over
\tk should satisfy 3 <= k <= len(config) + 1
\tomit k, or pass 0, to compute every such k
";

/// Smallest number of distinct distances determined by k points of a
/// one-dimensional configuration.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Point configuration, e.g. 12141218
    pub config: Option<String>,

    /// Subset size (0 or omitted: every k from 3 to len(config) + 1)
    #[arg(allow_negative_numbers = true)]
    pub k: Option<String>,

    /// Trailing positional arguments, accepted and ignored
    #[arg(hide = true, allow_negative_numbers = true)]
    pub ignored: Vec<String>,

    /// Worker threads for the parallel search
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Evaluate all subsets on a single thread
    #[arg(long, default_value_t = false)]
    pub sequential: bool,

    /// Log progress to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// A validated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub configuration: Configuration,
    pub selection: KSelection,
}

impl Args {
    /// Validate the positional arguments.
    pub fn validate(&self) -> Result<Invocation, InputError> {
        validate(self.config.as_deref(), self.k.as_deref())
    }

    pub fn search_options(&self) -> SearchOptions {
        let options = SearchOptions::default().parallel(!self.sequential);
        match self.threads {
            Some(n) => options.threads(n),
            None => options,
        }
    }
}

/// Validate a configuration and an optional k.
///
/// A missing k means k = 0, which selects every k in `3..=n`.
pub fn validate(config: Option<&str>, k: Option<&str>) -> Result<Invocation, InputError> {
    let configuration: Configuration = config.ok_or(InputError::MissingConfiguration)?.parse()?;

    let k = match k {
        None => 0,
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| InputError::MalformedK(raw.to_string()))?,
    };

    let points = configuration.num_points();
    let selection = match usize::try_from(k) {
        Ok(0) => KSelection::All,
        Ok(k) if (MIN_K..=points).contains(&k) => KSelection::Single(k),
        _ => return Err(InputError::KOutOfRange { k, points }),
    };

    Ok(Invocation {
        configuration,
        selection,
    })
}

/// Log filter directive for a `-v` count.
pub fn log_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,local_properties={}", level)
}

/// Install the stderr logger. Safe to call more than once.
///
/// Colour codes are only emitted when stderr is a terminal.
pub fn init_logging(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_directive(verbosity)))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
