// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.

/// How the minimizer distributes work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    parallel: bool,
    threads: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }
}

impl SearchOptions {
    /// Single-threaded search on the calling thread.
    pub fn sequential() -> Self {
        Self::default().parallel(false)
    }

    /// Enable/disable the parallel minimizer (default: true).
    pub fn parallel(mut self, yes: bool) -> Self {
        self.parallel = yes;
        self
    }

    /// Fix the number of worker threads (default: rayon's choice).
    pub fn threads(mut self, n: usize) -> Self {
        self.threads = Some(n.max(1));
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn thread_count(&self) -> Option<usize> {
        self.threads
    }
}
