//! Circuit container: gate instructions followed by requested result types.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{IrError, IrResult};
use crate::gate::{Gate, StandardGate};
use crate::instruction::Instruction;
use crate::observable::Observable;
use crate::operator::QuantumOperator;
use crate::qubit::QubitId;
use crate::result_type::ResultType;

/// A non-identity observable factor recorded against the qubits it spans.
#[derive(Debug, Clone)]
struct MeasuredFactor {
    observable: Observable,
    targets: Vec<QubitId>,
}

/// A quantum circuit with result types.
///
/// Every qubit can be measured in only one basis, so result types whose
/// observables disagree on a qubit are rejected. Identity factors place no
/// constraint on their qubit.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    instructions: Vec<Instruction>,
    result_types: Vec<ResultType>,
    qubits: BTreeSet<QubitId>,
    measured: BTreeMap<QubitId, MeasuredFactor>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a gate on `targets`.
    pub fn add_gate<T: Into<QubitId>>(
        &mut self,
        gate: impl Into<Gate>,
        targets: impl IntoIterator<Item = T>,
    ) -> IrResult<&mut Self> {
        let instruction = Instruction::new(gate, targets)?;
        self.add_instruction(instruction);
        Ok(self)
    }

    /// Append an already validated instruction.
    pub fn add_instruction(&mut self, instruction: Instruction) -> &mut Self {
        self.qubits.extend(instruction.targets().iter().copied());
        self.instructions.push(instruction);
        self
    }

    // =========================================================================
    // Gate shorthands
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: impl Into<QubitId>) -> IrResult<&mut Self> {
        self.add_gate(StandardGate::H, [qubit])
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: impl Into<QubitId>) -> IrResult<&mut Self> {
        self.add_gate(StandardGate::X, [qubit])
    }

    /// Apply CNOT gate.
    pub fn cx(&mut self, control: impl Into<QubitId>, target: impl Into<QubitId>) -> IrResult<&mut Self> {
        let targets: [QubitId; 2] = [control.into(), target.into()];
        self.add_gate(StandardGate::CX, targets)
    }

    // =========================================================================
    // Result types
    // =========================================================================

    /// Request a result type.
    ///
    /// # Errors
    ///
    /// [`IrError::IncompatibleObservable`] when a non-identity factor of the
    /// observable differs from one already recorded on the same qubit.
    pub fn add_result_type(&mut self, result_type: ResultType) -> IrResult<&mut Self> {
        let mut staged = Vec::new();
        let mut offset = 0;
        for factor in result_type.observable().factors() {
            let width = factor.qubit_count();
            let targets = result_type.targets()[offset..offset + width].to_vec();
            offset += width;
            if factor.is_identity() {
                continue;
            }
            for qubit in &targets {
                if let Some(existing) = self.measured.get(qubit) {
                    if existing.observable != *factor || existing.targets != targets {
                        return Err(IrError::IncompatibleObservable {
                            qubit: *qubit,
                            existing: existing.observable.label(),
                            new: factor.label(),
                        });
                    }
                }
            }
            staged.push(MeasuredFactor {
                observable: factor.clone(),
                targets,
            });
        }

        for factor in staged {
            for qubit in &factor.targets {
                self.measured.insert(*qubit, factor.clone());
            }
        }
        tracing::debug!(
            kind = %result_type.kind(),
            observable = %result_type.observable(),
            "added result type"
        );
        self.qubits.extend(result_type.targets().iter().copied());
        self.result_types.push(result_type);
        Ok(self)
    }

    /// Shorthand for [`ResultType::expectation`] followed by [`add_result_type`](Self::add_result_type).
    pub fn expectation<T: Into<QubitId>>(
        &mut self,
        observable: Observable,
        targets: impl IntoIterator<Item = T>,
    ) -> IrResult<&mut Self> {
        self.add_result_type(ResultType::expectation(observable, targets)?)
    }

    /// Shorthand for [`ResultType::sample`] followed by [`add_result_type`](Self::add_result_type).
    pub fn sample<T: Into<QubitId>>(
        &mut self,
        observable: Observable,
        targets: impl IntoIterator<Item = T>,
    ) -> IrResult<&mut Self> {
        self.add_result_type(ResultType::sample(observable, targets)?)
    }

    /// Shorthand for [`ResultType::variance`] followed by [`add_result_type`](Self::add_result_type).
    pub fn variance<T: Into<QubitId>>(
        &mut self,
        observable: Observable,
        targets: impl IntoIterator<Item = T>,
    ) -> IrResult<&mut Self> {
        self.add_result_type(ResultType::variance(observable, targets)?)
    }

    /// Instructions that rotate every measured qubit into the eigenbasis of
    /// its recorded observable, ordered by each factor's first target.
    pub fn basis_rotation_instructions(&self) -> Vec<Instruction> {
        let mut instructions = Vec::new();
        for (qubit, factor) in &self.measured {
            if factor.targets.first() != Some(qubit) {
                continue;
            }
            for gate in factor.observable.basis_rotation_gates() {
                let width = gate.qubit_count();
                let targets = factor.targets[..width].to_vec();
                instructions.push(Instruction::from_parts(gate, targets));
            }
        }
        instructions
    }

    /// Gate instructions, in order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Result types, in order.
    pub fn result_types(&self) -> &[ResultType] {
        &self.result_types
    }

    /// Qubits used by any instruction or result type, ascending.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.qubits.iter().copied()
    }

    /// Number of distinct qubits used.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Whether the circuit has no instructions and no result types.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty() && self.result_types.is_empty()
    }
}
