// src/sample/histogram.rs

//! Frequency histogram of a value sequence, ordered by value ascending.

use std::collections::BTreeMap;

/// Frequency counts for every distinct value of a sequence.
///
/// Iteration order is value-ascending, so a histogram built from the same
/// multiset of values always enumerates identically regardless of the
/// order the values arrived in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: BTreeMap<i32, u64>,
}

impl Histogram {
    /// Counts the values of `sequence`.
    pub fn from_sequence(sequence: &[i32]) -> Self {
        let mut counts = BTreeMap::new();
        for &value in sequence {
            *counts.entry(value).or_insert(0u64) += 1;
        }
        Self { counts }
    }

    /// `(frequency, value)` pairs, value ascending. This is the leaf list
    /// the code tree is built from.
    pub fn entries(&self) -> Vec<(u64, i32)> {
        self.counts
            .iter()
            .map(|(&value, &count)| (count, value))
            .collect()
    }

    /// `(ratio, value)` pairs with frequencies normalized to sum to 1.
    /// A reporting view; tree construction always uses the raw counts.
    pub fn normalized(&self) -> Vec<(f64, i32)> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }
        self.counts
            .iter()
            .map(|(&value, &count)| (count as f64 / total as f64, value))
            .collect()
    }

    /// Frequency of one value (zero when absent).
    pub fn count(&self, value: i32) -> u64 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Total number of counted values.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct values.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
