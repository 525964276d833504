//! Error types for the simulator crate.

use thiserror::Error;

/// Errors produced by statevector simulation and sampling.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Circuit is wider than the simulator allows.
    #[error("Circuit has {requested} qubits but simulator only supports {max}")]
    TooManyQubits {
        /// Requested number of qubits.
        requested: u32,
        /// Configured maximum.
        max: u32,
    },

    /// A qubit index is beyond the statevector width.
    #[error("Qubit {qubit} is out of range for a {n_qubits}-qubit state")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: u32,
        /// Width of the state.
        n_qubits: u32,
    },

    /// Circuit and statevector disagree on width.
    #[error("Circuit has {circuit} qubits but statevector has {state}")]
    WidthMismatch {
        /// Circuit width.
        circuit: u32,
        /// Statevector width.
        state: u32,
    },

    /// Amplitude vector cannot be a valid state.
    #[error("Invalid amplitudes: {0}")]
    InvalidAmplitudes(String),

    /// Total probability left the unit sphere after a gate.
    #[error("Norm drifted to {norm} after gate #{gate_index} ({gate})")]
    NumericalDrift {
        /// Position of the gate in the circuit.
        gate_index: usize,
        /// Rendered gate.
        gate: String,
        /// Squared norm observed after the gate.
        norm: f64,
    },

    /// Marginal distribution has no probability mass to sample from.
    #[error("Marginal distribution is empty")]
    EmptyDistribution,

    /// Instruction failed validation.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] qsteiner_ir::IrError),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
