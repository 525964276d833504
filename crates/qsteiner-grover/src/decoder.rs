//! Decoding raw shot counts into a candidate-index histogram.

use serde::Serialize;
use std::collections::BTreeMap;

use qsteiner_sim::Counts;

use crate::encoding::BitPattern;
use crate::error::GroverResult;

/// Shot counts per valid candidate index.
///
/// Shots decoding to an index `≥ N` are dropped, not renormalized, so
/// `total() + dropped()` equals the number of shots taken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Histogram {
    counts: BTreeMap<u64, u64>,
    dropped: u64,
}

impl Histogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode raw measurement counts for a space of `n_candidates`.
    pub fn from_counts(raw: &Counts, n_candidates: u64) -> GroverResult<Self> {
        let mut histogram = Self::new();
        for (outcome, count) in raw.iter() {
            let index = BitPattern::from_outcome(outcome, raw.num_qubits())?.decode();
            histogram.record(index, n_candidates, count);
        }
        Ok(histogram)
    }

    /// Add `count` shots that decoded to `index`.
    pub fn record(&mut self, index: u64, n_candidates: u64, count: u64) {
        if index < n_candidates {
            *self.counts.entry(index).or_insert(0) += count;
        } else {
            self.dropped += count;
        }
    }

    /// Count for one index.
    pub fn get(&self, index: u64) -> u64 {
        self.counts.get(&index).copied().unwrap_or(0)
    }

    /// Iterate over `(index, count)` in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts.iter().map(|(&k, &v)| (k, v))
    }

    /// Number of distinct indices observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no valid shot was recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Valid shots.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Shots outside the candidate space.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Index with the highest count, ties broken by the smallest index.
    pub fn most_likely(&self) -> Option<(u64, u64)> {
        self.iter().fold(None, |best, (index, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((index, count)),
        })
    }
}
