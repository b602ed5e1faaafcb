//! Result types: what a circuit reports about an observable after execution.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::ir::ObservableIr;
use crate::observable::Observable;
use crate::operator::QuantumOperator;
use crate::qubit::{QubitId, collect_targets};

/// Statistic requested for an observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    /// Expectation value.
    Expectation,
    /// Individual measured eigenvalues.
    Sample,
    /// Variance.
    Variance,
}

impl ResultKind {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ResultKind::Expectation => "Expectation",
            ResultKind::Sample => "Sample",
            ResultKind::Variance => "Variance",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An observable statistic measured on specific qubits.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultType {
    kind: ResultKind,
    observable: Observable,
    targets: Vec<QubitId>,
}

/// Serialized form of a [`ResultType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTypeIr {
    /// Requested statistic.
    #[serde(rename = "type")]
    pub kind: ResultKind,
    /// Observable IR.
    pub observable: ObservableIr,
    /// Target qubits.
    pub targets: Vec<QubitId>,
}

impl ResultType {
    /// Create a result type.
    ///
    /// The number of targets must equal the observable's qubit count, and
    /// targets must be distinct.
    pub fn new<T: Into<QubitId>>(
        kind: ResultKind,
        observable: Observable,
        targets: impl IntoIterator<Item = T>,
    ) -> IrResult<Self> {
        let targets = collect_targets(kind.name(), targets)?;
        if targets.len() != observable.qubit_count() {
            return Err(IrError::QubitCountMismatch {
                name: kind.name().to_string(),
                expected: observable.qubit_count(),
                got: targets.len(),
            });
        }
        Ok(Self {
            kind,
            observable,
            targets,
        })
    }

    /// Expectation value of `observable` on `targets`.
    pub fn expectation<T: Into<QubitId>>(
        observable: Observable,
        targets: impl IntoIterator<Item = T>,
    ) -> IrResult<Self> {
        Self::new(ResultKind::Expectation, observable, targets)
    }

    /// Samples of `observable` on `targets`.
    pub fn sample<T: Into<QubitId>>(
        observable: Observable,
        targets: impl IntoIterator<Item = T>,
    ) -> IrResult<Self> {
        Self::new(ResultKind::Sample, observable, targets)
    }

    /// Variance of `observable` on `targets`.
    pub fn variance<T: Into<QubitId>>(
        observable: Observable,
        targets: impl IntoIterator<Item = T>,
    ) -> IrResult<Self> {
        Self::new(ResultKind::Variance, observable, targets)
    }

    /// The requested statistic.
    pub fn kind(&self) -> ResultKind {
        self.kind
    }

    /// The measured observable.
    pub fn observable(&self) -> &Observable {
        &self.observable
    }

    /// Target qubits, aligned with the observable's qubits.
    pub fn targets(&self) -> &[QubitId] {
        &self.targets
    }

    /// Display label per target, e.g. `Expectation(Z@X)`.
    pub fn ascii_symbols(&self) -> Vec<String> {
        vec![format!("{}({})", self.kind, self.observable.label()); self.targets.len()]
    }

    /// Serializable form.
    pub fn to_ir(&self) -> ResultTypeIr {
        ResultTypeIr {
            kind: self.kind,
            observable: self.observable.to_ir(),
            targets: self.targets.clone(),
        }
    }
}
