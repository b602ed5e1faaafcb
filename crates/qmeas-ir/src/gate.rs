//! Quantum gate types.

use ndarray::{Array2, array};
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

use crate::matrix::c;
use crate::operator::QuantumOperator;

/// Standard gates with known semantics.
#[derive(Debug, Clone, PartialEq)]
pub enum StandardGate {
    // Single-qubit Pauli gates
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,

    // Single-qubit Clifford gates
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,

    // Single-qubit rotation gates
    /// Rotation around X axis.
    Rx(f64),
    /// Rotation around Y axis.
    Ry(f64),
    /// Rotation around Z axis.
    Rz(f64),

    // Two-qubit gates
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
    /// SWAP gate.
    Swap,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "i",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::Rx(_) => "rx",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::CX => "cx",
            StandardGate::CZ => "cz",
            StandardGate::Swap => "swap",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        match self {
            StandardGate::CX | StandardGate::CZ | StandardGate::Swap => 2,
            _ => 1,
        }
    }

    fn symbols(&self) -> Vec<String> {
        let single = |s: &str| vec![s.to_string()];
        match self {
            StandardGate::I => single("I"),
            StandardGate::X => single("X"),
            StandardGate::Y => single("Y"),
            StandardGate::Z => single("Z"),
            StandardGate::H => single("H"),
            StandardGate::S => single("S"),
            StandardGate::Sdg => single("Si"),
            StandardGate::T => single("T"),
            StandardGate::Tdg => single("Ti"),
            StandardGate::Rx(theta) => vec![format!("Rx({theta:.2})")],
            StandardGate::Ry(theta) => vec![format!("Ry({theta:.2})")],
            StandardGate::Rz(theta) => vec![format!("Rz({theta:.2})")],
            StandardGate::CX => vec!["C".into(), "X".into()],
            StandardGate::CZ => vec!["C".into(), "Z".into()],
            StandardGate::Swap => vec!["SWAP".into(), "SWAP".into()],
        }
    }

    fn matrix(&self) -> Array2<Complex64> {
        let zero = c(0.0, 0.0);
        let one = c(1.0, 0.0);
        let h = c(FRAC_1_SQRT_2, 0.0);
        match self {
            StandardGate::I => array![[one, zero], [zero, one]],
            StandardGate::X => array![[zero, one], [one, zero]],
            StandardGate::Y => array![[zero, c(0.0, -1.0)], [c(0.0, 1.0), zero]],
            StandardGate::Z => array![[one, zero], [zero, -one]],
            StandardGate::H => array![[h, h], [h, -h]],
            StandardGate::S => array![[one, zero], [zero, c(0.0, 1.0)]],
            StandardGate::Sdg => array![[one, zero], [zero, c(0.0, -1.0)]],
            StandardGate::T => array![[one, zero], [zero, Complex64::from_polar(1.0, std::f64::consts::FRAC_PI_4)]],
            StandardGate::Tdg => array![[one, zero], [zero, Complex64::from_polar(1.0, -std::f64::consts::FRAC_PI_4)]],
            StandardGate::Rx(theta) => {
                let (s, co) = (theta / 2.0).sin_cos();
                array![[c(co, 0.0), c(0.0, -s)], [c(0.0, -s), c(co, 0.0)]]
            }
            StandardGate::Ry(theta) => {
                let (s, co) = (theta / 2.0).sin_cos();
                array![[c(co, 0.0), c(-s, 0.0)], [c(s, 0.0), c(co, 0.0)]]
            }
            StandardGate::Rz(theta) => array![
                [Complex64::from_polar(1.0, -theta / 2.0), zero],
                [zero, Complex64::from_polar(1.0, theta / 2.0)]
            ],
            StandardGate::CX => array![
                [one, zero, zero, zero],
                [zero, one, zero, zero],
                [zero, zero, zero, one],
                [zero, zero, one, zero]
            ],
            StandardGate::CZ => array![
                [one, zero, zero, zero],
                [zero, one, zero, zero],
                [zero, zero, one, zero],
                [zero, zero, zero, -one]
            ],
            StandardGate::Swap => array![
                [one, zero, zero, zero],
                [zero, zero, one, zero],
                [zero, one, zero, zero],
                [zero, zero, zero, one]
            ],
        }
    }
}

/// A gate defined by an arbitrary unitary matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitaryGate {
    /// Unitary matrix, `2^n x 2^n`.
    matrix: Array2<Complex64>,
    /// Number of qubits the matrix acts on.
    num_qubits: usize,
    /// Display label.
    label: String,
}

impl UnitaryGate {
    /// Create a unitary gate from a `2^n x 2^n` matrix.
    ///
    /// The matrix is trusted to be unitary; callers derive it from
    /// eigen-decompositions or other unitary constructions.
    pub(crate) fn new(matrix: Array2<Complex64>, label: impl Into<String>) -> Self {
        let num_qubits = matrix.nrows().trailing_zeros() as usize;
        Self {
            matrix,
            num_qubits,
            label: label.into(),
        }
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A quantum gate, either standard or a unitary matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    /// A standard gate with known semantics.
    Standard(StandardGate),
    /// A gate given by its unitary matrix.
    Unitary(UnitaryGate),
}

impl Gate {
    /// Get the name of this gate.
    pub fn name(&self) -> &str {
        match self {
            Gate::Standard(g) => g.name(),
            Gate::Unitary(_) => "unitary",
        }
    }
}

impl From<StandardGate> for Gate {
    fn from(gate: StandardGate) -> Self {
        Gate::Standard(gate)
    }
}

impl QuantumOperator for Gate {
    fn qubit_count(&self) -> usize {
        match self {
            Gate::Standard(g) => g.num_qubits(),
            Gate::Unitary(g) => g.num_qubits,
        }
    }

    fn ascii_symbols(&self) -> Vec<String> {
        match self {
            Gate::Standard(g) => g.symbols(),
            Gate::Unitary(g) => vec![g.label.clone(); g.num_qubits],
        }
    }

    fn to_matrix(&self) -> Array2<Complex64> {
        match self {
            Gate::Standard(g) => g.matrix(),
            Gate::Unitary(g) => g.matrix.clone(),
        }
    }
}

impl QuantumOperator for StandardGate {
    fn qubit_count(&self) -> usize {
        self.num_qubits()
    }

    fn ascii_symbols(&self) -> Vec<String> {
        self.symbols()
    }

    fn to_matrix(&self) -> Array2<Complex64> {
        self.matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{Tolerance, dagger};
    use std::f64::consts::PI;

    fn all_gates() -> Vec<StandardGate> {
        vec![
            StandardGate::I,
            StandardGate::X,
            StandardGate::Y,
            StandardGate::Z,
            StandardGate::H,
            StandardGate::S,
            StandardGate::Sdg,
            StandardGate::T,
            StandardGate::Tdg,
            StandardGate::Rx(0.3),
            StandardGate::Ry(-PI / 4.0),
            StandardGate::Rz(1.1),
            StandardGate::CX,
            StandardGate::CZ,
            StandardGate::Swap,
        ]
    }

    #[test]
    fn test_standard_gate_properties() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::CX.num_qubits(), 2);
        assert_eq!(StandardGate::H.name(), "h");
        assert_eq!(StandardGate::CX.ascii_symbols(), vec!["C", "X"]);
        assert_eq!(StandardGate::Ry(-PI / 4.0).ascii_symbols(), vec!["Ry(-0.79)"]);
    }

    #[test]
    fn test_gate_matrices_are_unitary() {
        let tol = Tolerance::default();
        for gate in all_gates() {
            let m = gate.to_matrix();
            let dim = 1 << gate.qubit_count();
            assert_eq!(m.dim(), (dim, dim), "{}", gate.name());
            assert_eq!(gate.ascii_symbols().len(), gate.qubit_count());
            let product = dagger(m.view()).dot(&m);
            assert!(
                tol.all_close(product.view(), Array2::eye(dim).view()),
                "{} is not unitary",
                gate.name()
            );
        }
    }

    #[test]
    fn test_s_squared_is_z() {
        let s = StandardGate::S.to_matrix();
        let z = StandardGate::Z.to_matrix();
        assert!(Tolerance::default().all_close(s.dot(&s).view(), z.view()));
    }

    #[test]
    fn test_unitary_gate() {
        let gate = Gate::Unitary(UnitaryGate::new(StandardGate::CX.to_matrix(), "U"));
        assert_eq!(gate.name(), "unitary");
        assert_eq!(gate.qubit_count(), 2);
        assert_eq!(gate.ascii_symbols(), vec!["U", "U"]);
        assert!(gate.matrix_equivalence(&StandardGate::CX));
    }
}
