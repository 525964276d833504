//! qsteiner Circuit Representation
//!
//! This crate provides the gate-level data structures that the Grover operator
//! builder emits and the statevector engine consumes. The gate set is
//! deliberately small: amplitude amplification over an index register only
//! needs Hadamard, bit-flip and a multi-controlled bit-flip.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] addresses a qubit; qubit `i` is bit `i` of a
//!   statevector basis index.
//! - **Gates**: [`Gate`] is the primitive gate kind (H, X, MCX).
//! - **Instructions**: [`Instruction`] combines a gate with its operands.
//! - **Circuit**: [`Circuit`] is an ordered, validated instruction list.
//!
//! # Example: Phase Kickback Ancilla
//!
//! ```rust
//! use qsteiner_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new("kickback", 3);
//!
//! // Prepare the ancilla in |−⟩ = HX|0⟩
//! circuit.x(QubitId(2)).unwrap();
//! circuit.h(QubitId(2)).unwrap();
//!
//! // Flip the ancilla when both data qubits are |1⟩
//! circuit.mcx([QubitId(0), QubitId(1)], QubitId(2)).unwrap();
//!
//! assert_eq!(circuit.len(), 3);
//! assert_eq!(circuit.depth(), 3);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X` | 1 | Pauli-X (bit-flip) gate |
//! | `MCX` | ≥ 2 | Multi-controlled X onto the last operand |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::Gate;
pub use instruction::Instruction;
pub use qubit::QubitId;
