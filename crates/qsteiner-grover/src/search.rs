//! End-to-end search pipeline: build → simulate → sample → decode.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use qsteiner_ir::Circuit;
use qsteiner_sim::{Counts, MarginalDistribution, Simulator, Statevector};

use crate::config::SearchConfig;
use crate::decoder::Histogram;
use crate::encoding::qubit_width;
use crate::error::{GroverError, GroverResult};
use crate::operators::GroverOperators;

/// Amplitude amplification of one target rank among `n_candidates`.
#[derive(Debug, Clone)]
pub struct GroverSearch {
    n_candidates: u64,
    target_index: u64,
    config: SearchConfig,
}

/// Result of a sampled search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    /// Candidate count N.
    pub n_candidates: u64,
    /// The marked rank.
    pub target_index: u64,
    /// Data qubits used.
    pub width: u32,
    /// Amplification rounds applied.
    pub rounds: u32,
    /// Shots taken.
    pub shots: u32,
    /// Exact marginal probability of the target after the last round.
    pub target_probability: f64,
    /// Raw outcome counts before filtering.
    pub raw: Counts,
    /// Counts per valid candidate index.
    pub histogram: Histogram,
}

impl SearchOutcome {
    /// The most frequently measured valid index.
    ///
    /// Fails with [`GroverError::NoValidMeasurement`] when every shot was
    /// dropped, which is distinct from a real result with a small count.
    pub fn most_likely(&self) -> GroverResult<u64> {
        self.histogram
            .most_likely()
            .map(|(index, _)| index)
            .ok_or(GroverError::NoValidMeasurement {
                shots: self.shots,
                dropped: self.histogram.dropped(),
            })
    }
}

impl GroverSearch {
    /// Search for `target_index` among `n_candidates` with default settings.
    pub fn new(n_candidates: u64, target_index: u64) -> Self {
        Self {
            n_candidates,
            target_index,
            config: SearchConfig::default(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Data-qubit width for the candidate count.
    pub fn width(&self) -> GroverResult<u32> {
        qubit_width(self.n_candidates)
    }

    /// Resolved number of amplification rounds.
    pub fn rounds(&self) -> GroverResult<u32> {
        Ok(self.config.iterations.resolve(self.width()?))
    }

    /// Operators for the configured target.
    pub fn operators(&self) -> GroverResult<GroverOperators> {
        let width = self.width()?;
        if self.target_index >= self.n_candidates {
            return Err(GroverError::TargetOutOfRange {
                target: self.target_index,
                n_candidates: self.n_candidates,
            });
        }
        GroverOperators::new(width, self.target_index)
    }

    /// The full search circuit (preparation plus all rounds).
    pub fn circuit(&self) -> GroverResult<Circuit> {
        let ops = self.operators()?;
        ops.search_circuit(self.rounds()?)
    }

    /// Evolve the state exactly; no sampling.
    pub fn simulate(&self) -> GroverResult<Statevector> {
        self.config.validate()?;
        let circuit = self.circuit()?;
        let simulator = Simulator::new().with_max_qubits(self.config.max_qubits);
        Ok(simulator.run(&circuit)?)
    }

    /// Exact measurement distribution over the data register.
    pub fn exact_distribution(&self) -> GroverResult<MarginalDistribution> {
        let state = self.simulate()?;
        Ok(MarginalDistribution::from_statevector(&state, self.width()?)?)
    }

    /// Run the search with the configured seed, or OS entropy if unset.
    pub fn run(&self) -> GroverResult<SearchOutcome> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(&mut rng)
    }

    /// Run the search drawing shots from `rng`.
    #[instrument(skip(self, rng), fields(n_candidates = self.n_candidates, target = self.target_index))]
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> GroverResult<SearchOutcome> {
        let width = self.width()?;
        let rounds = self.rounds()?;
        let dist = self.exact_distribution()?;
        let target_probability = dist.probability(self.target_index as usize);
        debug!(width, rounds, target_probability, "state evolved");

        let shots = self.config.shots;
        let raw = dist.sample_counts(shots, rng);
        let histogram = Histogram::from_counts(&raw, self.n_candidates)?;
        debug!(
            shots,
            valid = histogram.total(),
            dropped = histogram.dropped(),
            "decoded measurement counts"
        );
        if histogram.is_empty() {
            warn!(shots, "every shot fell outside the candidate space");
        }

        Ok(SearchOutcome {
            n_candidates: self.n_candidates,
            target_index: self.target_index,
            width,
            rounds,
            shots,
            target_probability,
            raw,
            histogram,
        })
    }
}

/// Probability of measuring the single marked state after `rounds` rounds
/// on a `width`-qubit register: `sin²((2k+1)·θ)` with `sin θ = 2^(−n/2)`.
pub fn analytic_success_probability(width: u32, rounds: u32) -> f64 {
    let theta = (2f64.powf(-f64::from(width) / 2.0)).asin();
    (f64::from(2 * rounds + 1) * theta).sin().powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Iterations;

    #[test]
    fn test_analytic_formula() {
        // n = 2: one round finds the target with certainty.
        assert!((analytic_success_probability(2, 1) - 1.0).abs() < 1e-12);
        // n = 3: 25/32.
        assert!((analytic_success_probability(3, 1) - 0.781_25).abs() < 1e-12);
        // No rounds: uniform.
        assert!((analytic_success_probability(4, 0) - 1.0 / 16.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_candidate_space() {
        let search = GroverSearch::new(0, 0);
        assert!(matches!(
            search.circuit(),
            Err(GroverError::EmptyCandidateSpace)
        ));
        assert!(matches!(search.run(), Err(GroverError::EmptyCandidateSpace)));
    }

    #[test]
    fn test_target_out_of_range() {
        let search = GroverSearch::new(5, 5);
        assert!(matches!(
            search.operators(),
            Err(GroverError::TargetOutOfRange {
                target: 5,
                n_candidates: 5
            })
        ));
    }

    #[test]
    fn test_rounds_follow_config() {
        let config = SearchConfig {
            iterations: Iterations::Optimal,
            ..SearchConfig::default()
        };
        let search = GroverSearch::new(16, 3).with_config(config);
        assert_eq!(search.width().unwrap(), 4);
        assert_eq!(search.rounds().unwrap(), 3);
    }

    #[test]
    fn test_register_limit() {
        let config = SearchConfig {
            max_qubits: 4,
            ..SearchConfig::default()
        };
        // 16 candidates need 4 data qubits + ancilla.
        let search = GroverSearch::new(16, 0).with_config(config);
        assert!(matches!(
            search.simulate(),
            Err(GroverError::Sim(qsteiner_sim::SimError::TooManyQubits {
                requested: 5,
                max: 4
            }))
        ));
    }

    #[test]
    fn test_widest_candidate_space_fails_cleanly() {
        // u64::MAX candidates need 64 data qubits + ancilla.
        let search = GroverSearch::new(u64::MAX, 0);
        assert!(matches!(
            search.simulate(),
            Err(GroverError::Sim(qsteiner_sim::SimError::TooManyQubits {
                requested: 65,
                max: 20
            }))
        ));

        let unbounded = search.with_config(SearchConfig {
            max_qubits: 100,
            ..SearchConfig::default()
        });
        assert!(matches!(
            unbounded.simulate(),
            Err(GroverError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_no_valid_measurement_is_distinct() {
        let mut histogram = Histogram::new();
        histogram.record(3, 2, 10);
        let outcome = SearchOutcome {
            n_candidates: 2,
            target_index: 0,
            width: 2,
            rounds: 1,
            shots: 10,
            target_probability: 0.0,
            raw: Counts::new(2),
            histogram,
        };
        assert!(matches!(
            outcome.most_likely(),
            Err(GroverError::NoValidMeasurement {
                shots: 10,
                dropped: 10
            })
        ));
    }
}
