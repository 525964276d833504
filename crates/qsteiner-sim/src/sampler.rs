//! Shot sampling from a marginal measurement distribution.

use rand::Rng;
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

/// Measurement distribution over the lowest `num_qubits` qubits of a state.
///
/// Higher qubits are traced out: the probability of outcome `b` is the sum
/// of `|ψ(i)|²` over every basis index `i` with `i mod 2^num_qubits == b`.
/// The distribution is read-only; sampling never collapses the state.
#[derive(Debug, Clone)]
pub struct MarginalDistribution {
    num_qubits: u32,
    probabilities: Vec<f64>,
    /// Running sum of `probabilities`.
    cdf: Vec<f64>,
    /// Highest outcome with non-zero probability.
    last_nonzero: usize,
}

impl MarginalDistribution {
    /// Marginalize `state` onto qubits `0..num_qubits`.
    pub fn from_statevector(state: &Statevector, num_qubits: u32) -> SimResult<Self> {
        if num_qubits > state.num_qubits() {
            return Err(SimError::QubitOutOfRange {
                qubit: num_qubits,
                n_qubits: state.num_qubits(),
            });
        }

        let mask = (1usize << num_qubits) - 1;
        let mut probabilities = vec![0.0; mask + 1];
        for (i, amp) in state.amplitudes().iter().enumerate() {
            probabilities[i & mask] += amp.norm_sqr();
        }
        Self::from_probabilities(num_qubits, probabilities)
    }

    fn from_probabilities(num_qubits: u32, probabilities: Vec<f64>) -> SimResult<Self> {
        let Some(last_nonzero) = probabilities.iter().rposition(|&p| p > 0.0) else {
            return Err(SimError::EmptyDistribution);
        };
        let cdf: Vec<f64> = probabilities
            .iter()
            .scan(0.0, |acc, &p| {
                *acc += p;
                Some(*acc)
            })
            .collect();
        Ok(Self {
            num_qubits,
            probabilities,
            cdf,
            last_nonzero,
        })
    }

    /// Number of measured qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Probability of every outcome.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Probability of one outcome (0 when out of range).
    pub fn probability(&self, outcome: usize) -> f64 {
        self.probabilities.get(outcome).copied().unwrap_or(0.0)
    }

    /// Draw one outcome by inverse-CDF lookup.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        // Scaling by the total absorbs rounding in the accumulated mass.
        let total = self.cdf[self.cdf.len() - 1];
        let u: f64 = rng.r#gen::<f64>() * total;
        self.locate(u)
    }

    /// Outcome whose CDF bucket contains `u`. Draws at or past the total
    /// land on the last outcome that carries probability.
    fn locate(&self, u: f64) -> usize {
        self.cdf
            .partition_point(|&c| c <= u)
            .min(self.last_nonzero)
    }

    /// Draw `shots` independent outcomes and count them.
    pub fn sample_counts<R: Rng + ?Sized>(&self, shots: u32, rng: &mut R) -> Counts {
        let mut counts = Counts::new(self.num_qubits);
        for _ in 0..shots {
            counts.insert(self.sample(rng), 1);
        }
        debug!(
            shots,
            distinct = counts.len(),
            num_qubits = self.num_qubits,
            "sampled marginal distribution"
        );
        counts
    }
}

/// Raw measurement counts keyed by outcome (basis index of the measured qubits).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    num_qubits: u32,
    counts: FxHashMap<usize, u64>,
}

impl Counts {
    /// Create empty counts for a `num_qubits`-bit register.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            counts: FxHashMap::default(),
        }
    }

    /// Add `count` observations of `outcome`.
    pub fn insert(&mut self, outcome: usize, count: u64) {
        *self.counts.entry(outcome).or_insert(0) += count;
    }

    /// Number of observations of `outcome`.
    pub fn get(&self, outcome: usize) -> u64 {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    /// Width of the measured register.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing was observed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total_shots(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate over `(outcome, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().map(|(&k, &v)| (k, v))
    }

    /// Outcomes by descending count, ties by ascending outcome.
    pub fn sorted(&self) -> Vec<(usize, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }

    /// Render an outcome as a bitstring, qubit 0 rightmost.
    pub fn bitstring(&self, outcome: usize) -> String {
        format!("{:0width$b}", outcome, width = self.num_qubits as usize)
    }
}
