//! Errors raised while loading or enumerating a Steiner problem.

use thiserror::Error;

/// Result type for candidate enumeration.
pub type EnumResult<T> = Result<T, EnumError>;

/// Errors that can occur while building or enumerating a problem.
#[derive(Error, Debug)]
pub enum EnumError {
    /// The terminal set is empty.
    #[error("Problem has no terminals")]
    NoTerminals,

    /// A terminal does not appear on any edge.
    #[error("Terminal {0} is not a node of the graph")]
    UnknownTerminal(u32),

    /// Edge weight is negative, NaN or infinite.
    #[error("Invalid weight {weight} on edge ({u}, {v})")]
    InvalidWeight { u: u32, v: u32, weight: f64 },

    /// Subset enumeration is exponential in the node count.
    #[error("Graph has {nodes} nodes, enumeration is limited to {max}")]
    TooManyNodes { nodes: usize, max: usize },

    /// Problem file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML problem file is malformed.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON problem file is malformed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
