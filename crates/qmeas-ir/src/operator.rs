//! Behaviour shared by gates and observables.

use ndarray::Array2;
use num_complex::Complex64;

use crate::matrix::Tolerance;

/// An operator acting on a fixed number of qubits with a dense matrix form.
pub trait QuantumOperator {
    /// Number of qubits the operator acts on.
    fn qubit_count(&self) -> usize;

    /// Display label per qubit; length equals [`qubit_count`](Self::qubit_count).
    fn ascii_symbols(&self) -> Vec<String>;

    /// Dense `2^n x 2^n` matrix.
    fn to_matrix(&self) -> Array2<Complex64>;

    /// Whether both operators have the same matrix, regardless of how they
    /// are represented.
    fn matrix_equivalence<O: QuantumOperator + ?Sized>(&self, other: &O) -> bool
    where
        Self: Sized,
    {
        self.matrix_equivalence_within(other, Tolerance::default())
    }

    /// [`matrix_equivalence`](Self::matrix_equivalence) with explicit thresholds.
    fn matrix_equivalence_within<O: QuantumOperator + ?Sized>(&self, other: &O, tol: Tolerance) -> bool
    where
        Self: Sized,
    {
        let (a, b) = (self.to_matrix(), other.to_matrix());
        tol.all_close(a.view(), b.view())
    }
}
