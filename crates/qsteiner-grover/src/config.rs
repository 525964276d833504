//! Search configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use qsteiner_sim::MAX_QUBITS;

use crate::error::{GroverError, GroverResult};
use crate::operators::optimal_iterations;

/// How many {marking, diffusion} rounds to apply.
///
/// Serialized as a plain integer or the string `"optimal"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IterationsRepr", into = "IterationsRepr")]
pub enum Iterations {
    /// A fixed number of rounds.
    Fixed(u32),
    /// `round(π/(4θ) − 1/2)` with `sin θ = 2^(−n/2)`, at least 1.
    Optimal,
}

impl Iterations {
    /// Concrete round count for a `width`-qubit data register.
    pub fn resolve(self, width: u32) -> u32 {
        match self {
            Iterations::Fixed(k) => k,
            Iterations::Optimal => optimal_iterations(width),
        }
    }
}

impl Default for Iterations {
    fn default() -> Self {
        Iterations::Fixed(1)
    }
}

impl fmt::Display for Iterations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Iterations::Fixed(k) => write!(f, "{k}"),
            Iterations::Optimal => f.write_str("optimal"),
        }
    }
}

impl FromStr for Iterations {
    type Err = GroverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("optimal") {
            return Ok(Iterations::Optimal);
        }
        s.parse().map(Iterations::Fixed).map_err(|_| {
            GroverError::InvalidConfig(format!(
                "iterations must be a non-negative integer or 'optimal', got '{s}'"
            ))
        })
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum IterationsRepr {
    Count(u32),
    Policy(String),
}

impl TryFrom<IterationsRepr> for Iterations {
    type Error = GroverError;

    fn try_from(repr: IterationsRepr) -> Result<Self, Self::Error> {
        match repr {
            IterationsRepr::Count(k) => Ok(Iterations::Fixed(k)),
            IterationsRepr::Policy(s) => s.parse(),
        }
    }
}

impl From<Iterations> for IterationsRepr {
    fn from(it: Iterations) -> Self {
        match it {
            Iterations::Fixed(k) => IterationsRepr::Count(k),
            Iterations::Optimal => IterationsRepr::Policy("optimal".to_string()),
        }
    }
}

/// Parameters of one search run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Amplification rounds.
    pub iterations: Iterations,
    /// Number of shots sampled from the final state.
    pub shots: u32,
    /// RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Largest register (data qubits + ancilla) the simulator accepts.
    pub max_qubits: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: Iterations::default(),
            shots: 1024,
            seed: None,
            max_qubits: 20,
        }
    }
}

impl SearchConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> GroverResult<()> {
        if self.shots == 0 {
            return Err(GroverError::InvalidShots(0));
        }
        if self.max_qubits < 2 {
            return Err(GroverError::InvalidConfig(format!(
                "max_qubits must leave room for one data qubit and the ancilla, got {}",
                self.max_qubits
            )));
        }
        if self.max_qubits > MAX_QUBITS {
            return Err(GroverError::InvalidConfig(format!(
                "max_qubits must be at most {MAX_QUBITS}, got {}",
                self.max_qubits
            )));
        }
        Ok(())
    }
}
