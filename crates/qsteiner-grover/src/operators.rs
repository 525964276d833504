//! Marking and diffusion operator construction.
//!
//! The register layout is `n` data qubits `q0..q(n-1)` followed by one
//! ancilla `qn`. Preparation puts the data register into uniform
//! superposition and the ancilla into |−⟩, the −1 eigenstate of X. With the
//! ancilla there, every multi-controlled X onto it acts as a phase flip on
//! the controlling basis state (phase kickback):
//!
//! ```text
//! marking:   X(zeros(t)) · MCX(data → anc) · X(zeros(t))      |t⟩ → −|t⟩
//! diffusion: H(data) · X(data) · MCX(data → anc) · X(data) · H(data)
//! ```
//!
//! Diffusion flips the sign of |s⟩ = H|0…0⟩, i.e. it equals −(2|s⟩⟨s| − I);
//! the global sign leaves measurement probabilities unchanged.

use std::f64::consts::PI;

use qsteiner_ir::{Circuit, QubitId};

use crate::encoding::BitPattern;
use crate::error::GroverResult;

/// Builder for the operators of a single-target Grover search.
#[derive(Debug, Clone)]
pub struct GroverOperators {
    width: u32,
    target: BitPattern,
}

impl GroverOperators {
    /// Operators marking `target_index` on a `width`-qubit data register.
    ///
    /// Fails with `EncodingOverflow` if `target_index ≥ 2^width`.
    pub fn new(width: u32, target_index: u64) -> GroverResult<Self> {
        let target = BitPattern::encode(target_index, width)?;
        Ok(Self { width, target })
    }

    /// Number of data qubits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Data qubits plus the ancilla.
    pub fn num_qubits(&self) -> u32 {
        self.width + 1
    }

    /// The ancilla qubit.
    pub fn ancilla(&self) -> QubitId {
        QubitId(self.width)
    }

    /// Data qubits in ascending order.
    pub fn data_qubits(&self) -> impl Iterator<Item = QubitId> + Clone + use<> {
        (0..self.width).map(QubitId)
    }

    /// The encoded target.
    pub fn target(&self) -> &BitPattern {
        &self.target
    }

    /// Uniform superposition on the data register, ancilla to |−⟩.
    pub fn append_preparation(&self, circuit: &mut Circuit) -> GroverResult<()> {
        circuit.h_all(self.data_qubits())?;
        circuit.x(self.ancilla())?;
        circuit.h(self.ancilla())?;
        Ok(())
    }

    /// Phase-flip the target basis state.
    ///
    /// Requires the ancilla to already be in |−⟩.
    pub fn append_marking(&self, circuit: &mut Circuit) -> GroverResult<()> {
        let zeros: Vec<QubitId> = self.target.zero_qubits().collect();
        circuit.x_all(zeros.iter().copied())?;
        circuit.mcx(self.data_qubits(), self.ancilla())?;
        circuit.x_all(zeros)?;
        Ok(())
    }

    /// Inversion about the mean of the data-register amplitudes.
    ///
    /// Requires the ancilla to already be in |−⟩.
    pub fn append_diffusion(&self, circuit: &mut Circuit) -> GroverResult<()> {
        circuit.h_all(self.data_qubits())?;
        circuit.x_all(self.data_qubits())?;
        circuit.mcx(self.data_qubits(), self.ancilla())?;
        circuit.x_all(self.data_qubits())?;
        circuit.h_all(self.data_qubits())?;
        Ok(())
    }

    /// Standalone preparation circuit.
    pub fn preparation(&self) -> GroverResult<Circuit> {
        let mut circuit = Circuit::new("prepare", self.num_qubits());
        self.append_preparation(&mut circuit)?;
        Ok(circuit)
    }

    /// Standalone marking circuit.
    pub fn marking(&self) -> GroverResult<Circuit> {
        let mut circuit = Circuit::new("mark", self.num_qubits());
        self.append_marking(&mut circuit)?;
        Ok(circuit)
    }

    /// Standalone diffusion circuit.
    pub fn diffusion(&self) -> GroverResult<Circuit> {
        let mut circuit = Circuit::new("diffuse", self.num_qubits());
        self.append_diffusion(&mut circuit)?;
        Ok(circuit)
    }

    /// Preparation followed by `rounds` × {marking, diffusion}.
    pub fn search_circuit(&self, rounds: u32) -> GroverResult<Circuit> {
        let mut circuit = Circuit::new("grover", self.num_qubits());
        self.append_preparation(&mut circuit)?;
        for _ in 0..rounds {
            self.append_marking(&mut circuit)?;
            self.append_diffusion(&mut circuit)?;
        }
        Ok(circuit)
    }
}

/// Calculate the optimal number of rounds for one marked state.
///
/// Each round rotates by `2θ` with `sin θ = 2^(−n/2)`, starting from `θ`,
/// so the target peaks after `k = round(π/(4θ) − 1/2)` rounds. For large
/// `n` this approaches `π/4 · √(2^n)`; for `n = 2` it is exactly 1.
pub fn optimal_iterations(width: u32) -> u32 {
    let theta = (2f64.powf(-f64::from(width) / 2.0)).asin();
    let optimal = (PI / (4.0 * theta) - 0.5).round() as u32;
    optimal.max(1)
}
