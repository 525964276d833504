//! Primitive gate kinds.

use serde::{Deserialize, Serialize};

/// Gates understood by the statevector engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gate {
    /// Hadamard gate.
    H,
    /// Pauli-X (bit-flip) gate.
    X,
    /// Multi-controlled X. The last operand is the target.
    Mcx,
}

impl Gate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::H => "h",
            Gate::X => "x",
            Gate::Mcx => "mcx",
        }
    }

    /// Minimum number of operands.
    #[inline]
    pub fn min_qubits(&self) -> u32 {
        match self {
            Gate::H | Gate::X => 1,
            Gate::Mcx => 2,
        }
    }

    /// Whether the gate takes exactly [`Gate::min_qubits`] operands.
    #[inline]
    pub fn is_fixed_arity(&self) -> bool {
        !matches!(self, Gate::Mcx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_names() {
        assert_eq!(Gate::H.name(), "h");
        assert_eq!(Gate::X.name(), "x");
        assert_eq!(Gate::Mcx.name(), "mcx");
    }

    #[test]
    fn test_gate_arity() {
        assert_eq!(Gate::H.min_qubits(), 1);
        assert!(Gate::X.is_fixed_arity());
        assert_eq!(Gate::Mcx.min_qubits(), 2);
        assert!(!Gate::Mcx.is_fixed_arity());
    }

    #[test]
    fn test_gate_serde_name() {
        let json = serde_json::to_string(&Gate::Mcx).unwrap();
        assert_eq!(json, "\"mcx\"");
    }
}
