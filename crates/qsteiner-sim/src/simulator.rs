//! Circuit execution with norm checking.

use std::time::Instant;
use tracing::{debug, instrument};

use qsteiner_ir::Circuit;

use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

/// Maximum deviation of `‖ψ‖²` from 1 tolerated after a gate.
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Hard ceiling on register width (2^30 amplitudes ≈ 16 GiB).
pub const MAX_QUBITS: u32 = 30;

/// Local statevector simulator.
///
/// Runs circuits gate by gate and treats any loss of normalization as a
/// fatal [`SimError::NumericalDrift`].
#[derive(Debug, Clone)]
pub struct Simulator {
    /// Maximum number of qubits supported.
    max_qubits: u32,
    /// Allowed `|‖ψ‖² − 1|` after each gate.
    tolerance: f64,
}

impl Simulator {
    /// Create a new simulator with default settings.
    pub fn new() -> Self {
        Self {
            max_qubits: 20,
            tolerance: DEFAULT_NORM_TOLERANCE,
        }
    }

    /// Create a simulator with custom max qubits, capped at [`MAX_QUBITS`].
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.max_qubits = max_qubits.min(MAX_QUBITS);
        self
    }

    /// Override the norm tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Maximum number of qubits.
    pub fn max_qubits(&self) -> u32 {
        self.max_qubits
    }

    /// Run a circuit from |0...0⟩ and return the final state.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    pub fn run(&self, circuit: &Circuit) -> SimResult<Statevector> {
        if circuit.num_qubits() > self.max_qubits {
            return Err(SimError::TooManyQubits {
                requested: circuit.num_qubits(),
                max: self.max_qubits,
            });
        }

        let mut state = Statevector::new(circuit.num_qubits());
        self.evolve(&mut state, circuit)?;
        Ok(state)
    }

    /// Apply every instruction of `circuit` to an existing state.
    pub fn evolve(&self, state: &mut Statevector, circuit: &Circuit) -> SimResult<()> {
        if circuit.num_qubits() != state.num_qubits() {
            return Err(SimError::WidthMismatch {
                circuit: circuit.num_qubits(),
                state: state.num_qubits(),
            });
        }

        let start = Instant::now();
        debug!(
            num_qubits = state.num_qubits(),
            gates = circuit.len(),
            "starting statevector evolution"
        );

        for (gate_index, inst) in circuit.instructions().iter().enumerate() {
            state.apply(inst)?;
            let norm = state.norm_sqr();
            if (norm - 1.0).abs() > self.tolerance {
                return Err(SimError::NumericalDrift {
                    gate_index,
                    gate: inst.to_string(),
                    norm,
                });
            }
        }

        debug!(elapsed = ?start.elapsed(), "statevector evolution completed");
        Ok(())
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;
    use qsteiner_ir::QubitId;

    #[test]
    fn test_simulator_defaults() {
        let sim = Simulator::new();
        assert_eq!(sim.max_qubits(), 20);
    }

    #[test]
    fn test_simulator_ghz_state() {
        let mut circuit = Circuit::new("ghz", 3);
        circuit.h(QubitId(0)).unwrap();
        circuit.mcx([QubitId(0)], QubitId(1)).unwrap();
        circuit.mcx([QubitId(1)], QubitId(2)).unwrap();

        let state = Simulator::new().run(&circuit).unwrap();
        let probs = state.probabilities();
        assert!((probs[0b000] - 0.5).abs() < 1e-12);
        assert!((probs[0b111] - 0.5).abs() < 1e-12);
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_simulator_too_many_qubits() {
        let sim = Simulator::new().with_max_qubits(5);
        let circuit = Circuit::new("test", 10);
        assert!(matches!(
            sim.run(&circuit),
            Err(SimError::TooManyQubits {
                requested: 10,
                max: 5
            })
        ));
    }

    #[test]
    fn test_limit_capped_before_allocation() {
        let sim = Simulator::new().with_max_qubits(200);
        assert_eq!(sim.max_qubits(), MAX_QUBITS);

        // Wide enough to overflow the amplitude index; rejected up front.
        let circuit = Circuit::new("wide", 65);
        assert!(matches!(
            sim.run(&circuit),
            Err(SimError::TooManyQubits {
                requested: 65,
                max: MAX_QUBITS
            })
        ));
    }

    #[test]
    fn test_evolve_width_mismatch() {
        let mut state = Statevector::new(2);
        let circuit = Circuit::new("test", 3);
        assert!(matches!(
            Simulator::new().evolve(&mut state, &circuit),
            Err(SimError::WidthMismatch { circuit: 3, state: 2 })
        ));
    }

    #[test]
    fn test_unnormalized_state_reports_drift() {
        let amps = vec![Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)];
        let mut state = Statevector::from_amplitudes(amps).unwrap();
        let mut circuit = Circuit::new("drift", 1);
        circuit.x(QubitId(0)).unwrap();

        let err = Simulator::new().evolve(&mut state, &circuit).unwrap_err();
        match err {
            SimError::NumericalDrift {
                gate_index, norm, ..
            } => {
                assert_eq!(gate_index, 0);
                assert!((norm - 2.0).abs() < 1e-12);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
