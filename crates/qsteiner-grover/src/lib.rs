//! `qsteiner-grover`: amplitude amplification over a candidate index space.
//!
//! Given a candidate count `N` and a target rank `t < N`, this crate encodes
//! `t` into the marking operator, composes it with inversion about the mean,
//! evolves the state on `n = max(1, ⌈log₂ N⌉)` data qubits plus one ancilla,
//! samples shots from the data-qubit marginal and reports the most frequent
//! valid index.
//!
//! Bit `i` of every encoded index lives on qubit `i`; qubit 0 is the least
//! significant bit both when building the oracle and when decoding shots.
//!
//! # Quick start
//!
//! ```rust
//! use qsteiner_grover::{GroverSearch, SearchConfig};
//!
//! let config = SearchConfig {
//!     shots: 2000,
//!     seed: Some(7),
//!     ..SearchConfig::default()
//! };
//! let outcome = GroverSearch::new(5, 2).with_config(config).run().unwrap();
//!
//! assert_eq!(outcome.width, 3);
//! assert_eq!(outcome.most_likely().unwrap(), 2);
//! assert!(outcome.histogram.iter().all(|(index, _)| index < 5));
//! ```

pub mod config;
pub mod decoder;
pub mod encoding;
pub mod error;
pub mod operators;
pub mod search;

pub use config::{Iterations, SearchConfig};
pub use decoder::Histogram;
pub use encoding::{BitPattern, decode, encode, qubit_width};
pub use error::{GroverError, GroverResult};
pub use operators::{GroverOperators, optimal_iterations};
pub use search::{GroverSearch, SearchOutcome, analytic_success_probability};
