//! qsteiner Statevector Engine
//!
//! Exact statevector simulation of the primitive gate set from `qsteiner-ir`
//! plus shot sampling from the marginal distribution of a qubit prefix.
//!
//! # Features
//!
//! - **Exact Simulation**: full `2^n` complex amplitude vector
//! - **Norm Checking**: [`Simulator`] verifies `‖ψ‖² = 1` after every gate
//! - **Marginal Sampling**: [`MarginalDistribution`] traces out high qubits
//!   (e.g. an ancilla) and draws i.i.d. shots from an injected RNG
//!
//! # Memory
//!
//! | Qubits | Memory |
//! |--------|--------|
//! | 10 | ~16 KB |
//! | 15 | ~512 KB |
//! | 20 | ~16 MB |
//! | 30 | ~16 GB (hard limit) |
//!
//! # Example
//!
//! ```rust
//! use qsteiner_ir::{Circuit, QubitId};
//! use qsteiner_sim::{MarginalDistribution, Simulator};
//! use rand::SeedableRng;
//!
//! let mut circuit = Circuit::new("bell", 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.mcx([QubitId(0)], QubitId(1)).unwrap();
//!
//! let state = Simulator::new().run(&circuit).unwrap();
//! let dist = MarginalDistribution::from_statevector(&state, 2).unwrap();
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let counts = dist.sample_counts(1000, &mut rng);
//! assert_eq!(counts.get(0b00) + counts.get(0b11), 1000);
//! ```

pub mod error;
pub mod sampler;
pub mod simulator;
pub mod statevector;

pub use error::{SimError, SimResult};
pub use sampler::{Counts, MarginalDistribution};
pub use simulator::{DEFAULT_NORM_TOLERANCE, MAX_QUBITS, Simulator};
pub use statevector::Statevector;
