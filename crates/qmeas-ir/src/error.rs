//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Structural or mathematical precondition violated by caller-supplied input.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum InvalidInput {
    /// Matrix input does not have exactly two axes.
    #[error("Matrix must be 2-dimensional, got {ndim} dimension(s)")]
    NotTwoDimensional {
        /// Number of axes found.
        ndim: usize,
    },

    /// Matrix rows and columns differ, or rows have different lengths.
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Length of the offending row (or column count).
        cols: usize,
    },

    /// Matrix dimension is not a power of two, or is smaller than 2.
    #[error("Matrix dimension {dim} is not a power of two >= 2")]
    InvalidDimension {
        /// The dimension found.
        dim: usize,
    },

    /// Matrix entry is neither a number nor a `[re, im]` pair.
    #[error("Matrix entry at ({row}, {col}) is not numeric: {found}")]
    NonNumeric {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
        /// Rendering of the offending value.
        found: String,
    },

    /// Matrix differs from its conjugate transpose.
    #[error("Matrix is not Hermitian")]
    NotHermitian,

    /// Tensor product built from zero operands.
    #[error("Tensor product requires at least one observable")]
    EmptyTensorProduct,

    /// IR symbol that names no known observable.
    #[error("Unknown observable symbol '{0}'")]
    UnknownSymbol(String),

    /// Value offered as an observable operand is not one.
    #[error("Operand is not an observable: {0}")]
    NotAnObservable(String),
}

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// Operation requires a different number of qubits.
    #[error("'{name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate or result type.
        name: String,
        /// Expected number of qubits.
        expected: usize,
        /// Actual number of qubits provided.
        got: usize,
    },

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit} in '{name}'")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Name of the gate or result type.
        name: String,
    },

    /// A qubit is already measured in an incompatible basis.
    #[error("Observable '{new}' on {qubit} conflicts with existing observable '{existing}'")]
    IncompatibleObservable {
        /// The qubit on which the conflict occurs.
        qubit: QubitId,
        /// Label of the observable already recorded.
        existing: String,
        /// Label of the observable being added.
        new: String,
    },
}

impl IrError {
    /// Whether this error belongs to the invalid-input category.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, IrError::InvalidInput(_))
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
