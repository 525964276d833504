//! Error types for the Grover search crate.

use thiserror::Error;

/// Errors produced while building, simulating or decoding a search.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GroverError {
    /// No candidates: the qubit width is undefined.
    #[error("Candidate space is empty, nothing to search")]
    EmptyCandidateSpace,

    /// Value does not fit the requested bit width.
    #[error("Value {value} does not fit in {width} bits")]
    EncodingOverflow {
        /// The value that was encoded.
        value: u64,
        /// Requested width.
        width: u32,
    },

    /// Width beyond what an index can hold.
    #[error("Bit width {width} exceeds the maximum of {max}")]
    WidthTooLarge {
        /// Requested width.
        width: u32,
        /// Maximum supported width.
        max: u32,
    },

    /// Target rank is not a candidate.
    #[error("Target index {target} is out of range for {n_candidates} candidates")]
    TargetOutOfRange {
        /// The requested target.
        target: u64,
        /// Number of candidates.
        n_candidates: u64,
    },

    /// Every shot decoded to an index outside the candidate space.
    #[error("No valid measurement: all {dropped} of {shots} shots fell outside the candidate space")]
    NoValidMeasurement {
        /// Shots taken.
        shots: u32,
        /// Shots dropped by the decoder.
        dropped: u64,
    },

    /// Shot count must be ≥ 1.
    #[error("shots must be at least 1, got {0}")]
    InvalidShots(u32),

    /// A configuration value is unusable.
    #[error("Invalid search configuration: {0}")]
    InvalidConfig(String),

    /// Statevector engine failure, including numerical drift.
    #[error("Simulation error: {0}")]
    Sim(#[from] qsteiner_sim::SimError),

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] qsteiner_ir::IrError),
}

/// Result type for Grover search operations.
pub type GroverResult<T> = Result<T, GroverError>;
