//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::qubit::QubitId;

/// A gate together with the qubits it acts on.
///
/// For [`Gate::Mcx`] the operands are the controls followed by the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate to apply.
    pub gate: Gate,
    /// Qubits this instruction operates on.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create a Hadamard instruction.
    pub fn h(qubit: QubitId) -> Self {
        Self {
            gate: Gate::H,
            qubits: vec![qubit],
        }
    }

    /// Create a bit-flip instruction.
    pub fn x(qubit: QubitId) -> Self {
        Self {
            gate: Gate::X,
            qubits: vec![qubit],
        }
    }

    /// Create a multi-controlled X instruction.
    pub fn mcx(controls: impl IntoIterator<Item = QubitId>, target: QubitId) -> Self {
        let mut qubits: Vec<_> = controls.into_iter().collect();
        qubits.push(target);
        Self {
            gate: Gate::Mcx,
            qubits,
        }
    }

    /// The qubit whose amplitude pairs are transformed.
    pub fn target(&self) -> Option<QubitId> {
        self.qubits.last().copied()
    }

    /// Control qubits (empty for single-qubit gates).
    pub fn controls(&self) -> &[QubitId] {
        match self.gate {
            Gate::Mcx => &self.qubits[..self.qubits.len().saturating_sub(1)],
            Gate::H | Gate::X => &[],
        }
    }

    /// Check operand count, range and uniqueness against a circuit width.
    pub fn validate(&self, num_qubits: u32) -> IrResult<()> {
        let got = self.qubits.len() as u32;
        let expected = self.gate.min_qubits();
        if self.gate.is_fixed_arity() && got != expected {
            return Err(IrError::QubitCountMismatch {
                gate_name: self.gate.name().to_string(),
                expected,
                got,
            });
        }
        if got < expected {
            return match self.target() {
                Some(target) if got == 1 => Err(IrError::EmptyControls { target }),
                _ => Err(IrError::QubitCountMismatch {
                    gate_name: self.gate.name().to_string(),
                    expected,
                    got,
                }),
            };
        }

        for (i, &qubit) in self.qubits.iter().enumerate() {
            if qubit.0 >= num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit,
                    num_qubits,
                    gate_name: Some(self.gate.name().to_string()),
                });
            }
            if self.qubits[..i].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: Some(self.gate.name().to_string()),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.gate {
            Gate::H | Gate::X => match self.target() {
                Some(q) => write!(f, "{} {q}", self.gate.name()),
                None => write!(f, "{}", self.gate.name()),
            },
            Gate::Mcx => {
                let controls: Vec<String> =
                    self.controls().iter().map(ToString::to_string).collect();
                match self.target() {
                    Some(t) => write!(f, "mcx [{}] -> {t}", controls.join(", ")),
                    None => write!(f, "mcx"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mcx_operands() {
        let inst = Instruction::mcx([QubitId(0), QubitId(1)], QubitId(3));
        assert_eq!(inst.controls(), &[QubitId(0), QubitId(1)]);
        assert_eq!(inst.target(), Some(QubitId(3)));
        assert!(inst.validate(4).is_ok());
    }

    #[test]
    fn test_single_qubit_has_no_controls() {
        let inst = Instruction::h(QubitId(2));
        assert!(inst.controls().is_empty());
        assert_eq!(inst.target(), Some(QubitId(2)));
    }

    #[test]
    fn test_validate_out_of_range() {
        let inst = Instruction::x(QubitId(5));
        assert!(matches!(
            inst.validate(3),
            Err(IrError::QubitNotFound { num_qubits: 3, .. })
        ));
    }

    #[test]
    fn test_validate_duplicate() {
        let inst = Instruction::mcx([QubitId(1), QubitId(1)], QubitId(2));
        assert!(matches!(
            inst.validate(3),
            Err(IrError::DuplicateQubit { qubit: QubitId(1), .. })
        ));
    }

    #[test]
    fn test_validate_empty_controls() {
        let inst = Instruction::mcx(Vec::new(), QubitId(0));
        assert!(matches!(
            inst.validate(1),
            Err(IrError::EmptyControls { target: QubitId(0) })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Instruction::h(QubitId(0)).to_string(), "h q0");
        assert_eq!(
            Instruction::mcx([QubitId(0), QubitId(1)], QubitId(2)).to_string(),
            "mcx [q0, q1] -> q2"
        );
    }
}
