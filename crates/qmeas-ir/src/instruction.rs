//! Circuit instructions combining gates with target qubits.

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::operator::QuantumOperator;
use crate::qubit::{QubitId, collect_targets};

/// A gate applied to specific qubits.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    gate: Gate,
    targets: Vec<QubitId>,
}

impl Instruction {
    /// Create a gate instruction.
    ///
    /// Returns an error if the number of targets differs from the gate's
    /// qubit count or a target repeats.
    pub fn new<T: Into<QubitId>>(
        gate: impl Into<Gate>,
        targets: impl IntoIterator<Item = T>,
    ) -> IrResult<Self> {
        let gate = gate.into();
        let targets = collect_targets(gate.name(), targets)?;
        if targets.len() != gate.qubit_count() {
            return Err(IrError::QubitCountMismatch {
                name: gate.name().to_string(),
                expected: gate.qubit_count(),
                got: targets.len(),
            });
        }
        Ok(Self { gate, targets })
    }

    /// Pair a gate with targets already known to match its width.
    pub(crate) fn from_parts(gate: Gate, targets: Vec<QubitId>) -> Self {
        debug_assert_eq!(gate.qubit_count(), targets.len());
        Self { gate, targets }
    }

    /// The gate.
    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    /// The target qubits, in gate operand order.
    pub fn targets(&self) -> &[QubitId] {
        &self.targets
    }
}
