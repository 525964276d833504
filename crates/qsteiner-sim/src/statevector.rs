//! Statevector simulation engine.

use num_complex::Complex64;

use qsteiner_ir::{Gate, Instruction, QubitId};

use crate::error::{SimError, SimResult};

/// A statevector representing a quantum state.
///
/// Basis index bit `q` holds the value of qubit `q`.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: u32,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    ///
    /// Allocates `2^num_qubits` amplitudes without a width check;
    /// [`Simulator::run`](crate::Simulator::run) enforces the register limit.
    pub fn new(num_qubits: u32) -> Self {
        let size = 1usize << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Create a statevector from explicit amplitudes.
    ///
    /// The length must be a non-zero power of two. Normalization is not
    /// enforced here; the simulator checks it after each gate.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> SimResult<Self> {
        let len = amplitudes.len();
        if !len.is_power_of_two() {
            return Err(SimError::InvalidAmplitudes(format!(
                "length {len} is not a power of two"
            )));
        }
        Ok(Self {
            num_qubits: len.trailing_zeros(),
            amplitudes,
        })
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Dimension of the state space (2^n).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Get all amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Get the amplitude of one basis state.
    pub fn amplitude(&self, index: usize) -> Option<Complex64> {
        self.amplitudes.get(index).copied()
    }

    /// Sum of squared magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Probability of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Apply an instruction to the statevector.
    pub fn apply(&mut self, instruction: &Instruction) -> SimResult<()> {
        instruction.validate(self.num_qubits)?;
        let Some(target) = instruction.target() else {
            return Ok(());
        };
        match instruction.gate {
            Gate::H => self.apply_h(target),
            Gate::X => self.apply_x(target),
            Gate::Mcx => self.apply_mcx(instruction.controls(), target),
        }
        Ok(())
    }

    // =========================================================================
    // Gate kernels (operands already validated by `apply`)
    // =========================================================================

    /// Hadamard on `qubit`: each pair (a, b) becomes ((a+b)/√2, (a−b)/√2).
    pub(crate) fn apply_h(&mut self, qubit: QubitId) {
        let mask = qubit.mask();
        let sqrt2_inv = std::f64::consts::FRAC_1_SQRT_2;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    /// Bit-flip on `qubit`.
    pub(crate) fn apply_x(&mut self, qubit: QubitId) {
        let mask = qubit.mask();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    /// Bit-flip on `target` for every basis state where all `controls` are 1.
    ///
    /// With no controls this is a plain [`Statevector::apply_x`].
    pub(crate) fn apply_mcx(&mut self, controls: &[QubitId], target: QubitId) {
        let ctrl_mask = controls.iter().fold(0usize, |m, q| m | q.mask());
        let tgt_mask = target.mask();
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask == ctrl_mask) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }

    /// Convert a basis index to a bitstring, qubit 0 rightmost.
    pub fn outcome_to_bitstring(&self, outcome: usize) -> String {
        format!("{:0width$b}", outcome, width = self.num_qubits as usize)
    }
}
