// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.
//!
//! The helpers here use no crate code: distances are plain symbol-count
//! maps compared by equality scans over a list.

#![allow(dead_code)]

use std::collections::BTreeMap;

/// Symbol counts of the span between points `p1 < p2`.
pub fn naive_distance(config: &str, p1: usize, p2: usize) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for symbol in config.chars().skip(p1).take(p2 - p1) {
        *counts.entry(symbol).or_insert(0) += 1;
    }
    counts
}

/// Distinct distances among `subset`.
pub fn naive_count(config: &str, subset: &[usize]) -> usize {
    let mut seen: Vec<BTreeMap<char, usize>> = Vec::new();
    for (i, &p1) in subset.iter().enumerate() {
        for &p2 in &subset[i + 1..] {
            let distance = naive_distance(config, p1, p2);
            if !seen.contains(&distance) {
                seen.push(distance);
            }
        }
    }
    seen.len()
}

/// All k-subsets of `0..n` in lexicographic order, by recursion.
pub fn naive_subsets(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn extend(n: usize, k: usize, from: usize, prefix: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if prefix.len() == k {
            out.push(prefix.clone());
            return;
        }
        for p in from..n {
            prefix.push(p);
            extend(n, k, p + 1, prefix, out);
            prefix.pop();
        }
    }
    let mut out = Vec::new();
    extend(n, k, 0, &mut Vec::new(), &mut out);
    out
}

/// `(minimum, first witness)` by brute force.
pub fn naive_minimum(config: &str, k: usize) -> Option<(usize, Vec<usize>)> {
    let n = config.chars().count() + 1;
    let mut best: Option<(usize, Vec<usize>)> = None;
    for subset in naive_subsets(n, k) {
        let count = naive_count(config, &subset);
        if best.as_ref().map_or(true, |(min, _)| count < *min) {
            best = Some((count, subset));
        }
    }
    best
}
