//! Ordered circuit builder API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::instruction::Instruction;
use crate::qubit::QubitId;

/// A quantum circuit over a fixed number of qubits.
///
/// Instructions are kept in application order. Every instruction added
/// through the builder methods is validated against the circuit width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits.
    num_qubits: u32,
    /// Instructions in application order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            instructions: vec![],
        }
    }

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the instructions in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the circuit has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Iterate over all qubit ids.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> {
        (0..self.num_qubits).map(QubitId)
    }

    /// Append a validated instruction.
    pub fn push(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        instruction.validate(self.num_qubits)?;
        self.instructions.push(instruction);
        Ok(self)
    }

    // =========================================================================
    // Gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::h(qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::x(qubit))
    }

    /// Apply a multi-controlled X gate.
    pub fn mcx(
        &mut self,
        controls: impl IntoIterator<Item = QubitId>,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::mcx(controls, target))
    }

    /// Apply Hadamard to each of the given qubits.
    pub fn h_all(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        for q in qubits {
            self.h(q)?;
        }
        Ok(self)
    }

    /// Apply Pauli-X to each of the given qubits.
    pub fn x_all(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        for q in qubits {
            self.x(q)?;
        }
        Ok(self)
    }

    /// Append every instruction of `other`.
    ///
    /// `other` may be narrower than `self`; its qubit ids are kept as-is.
    pub fn append(&mut self, other: &Circuit) -> IrResult<&mut Self> {
        if other.num_qubits > self.num_qubits {
            return Err(IrError::WidthMismatch {
                expected: self.num_qubits,
                got: other.num_qubits,
            });
        }
        self.instructions.extend(other.instructions.iter().cloned());
        Ok(self)
    }

    /// Re-validate every instruction, e.g. after deserialization.
    pub fn validate(&self) -> IrResult<()> {
        self.instructions
            .iter()
            .try_for_each(|inst| inst.validate(self.num_qubits))
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Circuit depth: the longest chain of instructions sharing qubits.
    pub fn depth(&self) -> usize {
        let mut layer = vec![0usize; self.num_qubits as usize];
        let mut depth = 0;
        for inst in &self.instructions {
            let level = inst
                .qubits
                .iter()
                .filter_map(|q| layer.get(q.index()))
                .max()
                .copied()
                .unwrap_or(0)
                + 1;
            for q in &inst.qubits {
                if let Some(slot) = layer.get_mut(q.index()) {
                    *slot = level;
                }
            }
            depth = depth.max(level);
        }
        depth
    }

    /// Count instructions per gate name.
    pub fn count_ops(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for inst in &self.instructions {
            *counts.entry(inst.gate.name()).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "circuit {} ({} qubits)", self.name, self.num_qubits)?;
        for inst in &self.instructions {
            writeln!(f, "  {inst}")?;
        }
        Ok(())
    }
}
