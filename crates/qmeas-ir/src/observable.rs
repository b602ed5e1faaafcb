//! Observables: measurable operators used to define measurement bases.
//!
//! Three shapes are supported:
//!
//! - [`StandardObservable`]: the fixed single-qubit operators `I`, `X`, `Y`, `Z`, `H`
//! - [`Hermitian`]: an arbitrary Hermitian matrix on one or more qubits
//! - [`TensorProduct`]: an ordered product of other observables
//!
//! Observables are immutable. Composing two observables with
//! [`Observable::tensor`] (or `^`) returns a new flat tensor product.

use std::f64::consts::FRAC_PI_4;
use std::fmt;
use std::ops::BitXor;
use std::sync::OnceLock;

use ndarray::{Array2, ArrayD, ArrayView2, Ix2};
use num_complex::Complex64;

use crate::error::{InvalidInput, IrError, IrResult};
use crate::gate::{Gate, StandardGate, UnitaryGate};
use crate::ir::{IrTerm, ObservableIr};
use crate::matrix::{self, Eigen, Tolerance};
use crate::operator::QuantumOperator;

/// Separator between factor labels of a tensor product.
const TENSOR_SEPARATOR: &str = "@";

/// Display label of every qubit of a [`Hermitian`] observable.
pub const HERMITIAN_LABEL: &str = "Hermitian";

/// Fixed single-qubit observables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardObservable {
    /// Identity.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
    /// Hadamard.
    H,
}

impl StandardObservable {
    /// All standard observables.
    pub const ALL: [StandardObservable; 5] = [Self::I, Self::X, Self::Y, Self::Z, Self::H];

    /// Lowercase IR symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::I => "i",
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::H => "h",
        }
    }

    /// Uppercase display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::H => "H",
        }
    }

    /// Look up an observable by IR symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.symbol() == symbol)
    }

    /// The gate with the same matrix.
    pub fn gate(self) -> StandardGate {
        match self {
            Self::I => StandardGate::I,
            Self::X => StandardGate::X,
            Self::Y => StandardGate::Y,
            Self::Z => StandardGate::Z,
            Self::H => StandardGate::H,
        }
    }

    fn eigenvalues(self) -> Vec<f64> {
        match self {
            Self::I => vec![1.0, 1.0],
            _ => vec![1.0, -1.0],
        }
    }

    fn basis_rotation_gates(self) -> Vec<Gate> {
        let gates = match self {
            Self::I | Self::Z => vec![],
            Self::X => vec![StandardGate::H],
            Self::Y => vec![StandardGate::Z, StandardGate::S, StandardGate::H],
            Self::H => vec![StandardGate::Ry(-FRAC_PI_4)],
        };
        gates.into_iter().map(Gate::from).collect()
    }
}

/// An observable defined by a Hermitian matrix.
#[derive(Debug, Clone)]
pub struct Hermitian {
    matrix: Array2<Complex64>,
    qubit_count: usize,
    eigen: OnceLock<Eigen>,
}

impl Hermitian {
    /// Wrap a Hermitian matrix, checked with the default [`Tolerance`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if the matrix is not square, its dimension is
    /// not a power of two >= 2, or it differs from its conjugate transpose.
    pub fn new(matrix: Array2<Complex64>) -> IrResult<Self> {
        Self::with_tolerance(matrix, Tolerance::default())
    }

    /// Wrap a Hermitian matrix, checking hermiticity within `tol`.
    ///
    /// # Errors
    ///
    /// Same as [`Hermitian::new`], with `tol` deciding how far the matrix may
    /// drift from its conjugate transpose.
    pub fn with_tolerance(matrix: Array2<Complex64>, tol: Tolerance) -> IrResult<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(reject(InvalidInput::NotSquare { rows, cols }));
        }
        let qubit_count = matrix::qubits_for_dimension(rows)
            .ok_or_else(|| reject(InvalidInput::InvalidDimension { dim: rows }))?;
        if !matrix::is_hermitian(matrix.view(), tol) {
            return Err(reject(InvalidInput::NotHermitian));
        }
        Ok(Self {
            matrix,
            qubit_count,
            eigen: OnceLock::new(),
        })
    }

    /// Wrap an array of any dimensionality; only 2-D arrays are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NotTwoDimensional`] for arrays without exactly
    /// two axes, otherwise fails like [`Hermitian::new`].
    pub fn from_dyn(array: ArrayD<Complex64>) -> IrResult<Self> {
        let ndim = array.ndim();
        let matrix = array
            .into_dimensionality::<Ix2>()
            .map_err(|_| reject(InvalidInput::NotTwoDimensional { ndim }))?;
        Self::new(matrix)
    }

    /// Build from row vectors.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NotSquare`] when a row's length differs from
    /// the number of rows (ragged input included), otherwise fails like
    /// [`Hermitian::new`].
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> IrResult<Self> {
        let n = rows.len();
        if let Some(row) = rows.iter().find(|r| r.len() != n) {
            return Err(reject(InvalidInput::NotSquare {
                rows: n,
                cols: row.len(),
            }));
        }
        let matrix = Array2::from_shape_vec((n, n), rows.into_iter().flatten().collect())
            .map_err(|_| reject(InvalidInput::NotSquare { rows: n, cols: n }))?;
        Self::new(matrix)
    }

    /// The wrapped matrix.
    pub fn matrix(&self) -> ArrayView2<'_, Complex64> {
        self.matrix.view()
    }

    fn eigen(&self) -> &Eigen {
        self.eigen.get_or_init(|| matrix::hermitian_eigh(self.matrix.view()))
    }

    fn matrix_rows(&self) -> Vec<Vec<Complex64>> {
        self.matrix.rows().into_iter().map(|r| r.to_vec()).collect()
    }
}

fn reject(reason: InvalidInput) -> IrError {
    tracing::debug!(%reason, "rejected hermitian matrix");
    reason.into()
}

/// An ordered tensor product of observables.
#[derive(Debug, Clone)]
pub struct TensorProduct {
    factors: Vec<Observable>,
    qubit_count: usize,
}

impl TensorProduct {
    /// Create a tensor product of one or more observables, kept in order.
    pub fn new(factors: Vec<Observable>) -> IrResult<Self> {
        if factors.is_empty() {
            return Err(InvalidInput::EmptyTensorProduct.into());
        }
        let qubit_count = factors.iter().map(Observable::qubit_count).sum();
        Ok(Self {
            factors,
            qubit_count,
        })
    }

    /// Operands as given at construction.
    pub fn operands(&self) -> &[Observable] {
        &self.factors
    }
}

/// A measurable operator on one or more qubits.
///
/// Two observables are equal iff their IR is equal.
#[derive(Debug, Clone)]
pub enum Observable {
    /// A fixed single-qubit observable.
    Standard(StandardObservable),
    /// An arbitrary Hermitian matrix.
    Hermitian(Hermitian),
    /// A tensor product of observables.
    TensorProduct(TensorProduct),
}

impl Observable {
    /// Identity observable.
    pub fn i() -> Self {
        Observable::Standard(StandardObservable::I)
    }

    /// Pauli-X observable.
    pub fn x() -> Self {
        Observable::Standard(StandardObservable::X)
    }

    /// Pauli-Y observable.
    pub fn y() -> Self {
        Observable::Standard(StandardObservable::Y)
    }

    /// Pauli-Z observable.
    pub fn z() -> Self {
        Observable::Standard(StandardObservable::Z)
    }

    /// Hadamard observable.
    pub fn h() -> Self {
        Observable::Standard(StandardObservable::H)
    }

    /// Hermitian observable; see [`Hermitian::new`].
    pub fn hermitian(matrix: Array2<Complex64>) -> IrResult<Self> {
        Hermitian::new(matrix).map(Observable::Hermitian)
    }

    /// Tensor product observable; see [`TensorProduct::new`].
    pub fn tensor_product(factors: Vec<Observable>) -> IrResult<Self> {
        TensorProduct::new(factors).map(Observable::TensorProduct)
    }

    /// Display label: the standard label, `Hermitian`, or factor labels
    /// joined by `@`.
    pub fn label(&self) -> String {
        match self {
            Observable::Standard(o) => o.label().to_string(),
            Observable::Hermitian(_) => HERMITIAN_LABEL.to_string(),
            Observable::TensorProduct(t) => t
                .factors
                .iter()
                .map(Observable::label)
                .collect::<Vec<_>>()
                .join(TENSOR_SEPARATOR),
        }
    }

    /// Standard and Hermitian observables in left-to-right order, with all
    /// tensor-product nesting removed.
    pub fn factors(&self) -> Vec<&Observable> {
        match self {
            Observable::TensorProduct(t) => t.factors.iter().flat_map(Observable::factors).collect(),
            _ => vec![self],
        }
    }

    /// Whether this is the identity observable.
    pub fn is_identity(&self) -> bool {
        matches!(self, Observable::Standard(StandardObservable::I))
    }

    /// Serializable form: one entry per factor, in order.
    pub fn to_ir(&self) -> ObservableIr {
        let mut terms = Vec::new();
        self.collect_ir(&mut terms);
        ObservableIr(terms)
    }

    fn collect_ir(&self, terms: &mut Vec<IrTerm>) {
        match self {
            Observable::Standard(o) => terms.push(IrTerm::Symbol(o.symbol().to_string())),
            Observable::Hermitian(h) => terms.push(IrTerm::Matrix(h.matrix_rows())),
            Observable::TensorProduct(t) => t.factors.iter().for_each(|f| f.collect_ir(terms)),
        }
    }

    /// Compose into a flat tensor product `self ⊗ other`.
    ///
    /// Tensor-product operands contribute their factors rather than nesting.
    #[must_use]
    pub fn tensor(&self, other: &Observable) -> Observable {
        let factors: Vec<Observable> = self
            .factors()
            .into_iter()
            .chain(other.factors())
            .cloned()
            .collect();
        let qubit_count = self.qubit_count() + other.qubit_count();
        tracing::trace!(lhs = %self, rhs = %other, qubit_count, "composed observables");
        Observable::TensorProduct(TensorProduct {
            factors,
            qubit_count,
        })
    }

    /// Eigenvalues of the observable.
    ///
    /// Standard observables use the fixed order `[1, -1]` (`[1, 1]` for `I`),
    /// Hermitian eigenvalues are ascending, and tensor products take the
    /// Kronecker product of their factors' eigenvalues.
    pub fn eigenvalues(&self) -> Vec<f64> {
        match self {
            Observable::Standard(o) => o.eigenvalues(),
            Observable::Hermitian(h) => h.eigen().values.clone(),
            Observable::TensorProduct(_) => self
                .factors()
                .into_iter()
                .fold(vec![1.0], |acc, f| matrix::kron_values(&acc, &f.eigenvalues())),
        }
    }

    /// Gates that rotate this observable's eigenbasis onto the computational basis.
    ///
    /// For a tensor product the gates of every factor are concatenated in order.
    pub fn basis_rotation_gates(&self) -> Vec<Gate> {
        match self {
            Observable::Standard(o) => o.basis_rotation_gates(),
            Observable::Hermitian(h) => {
                let rotation = matrix::dagger(h.eigen().vectors.view());
                vec![Gate::Unitary(UnitaryGate::new(rotation, "U"))]
            }
            Observable::TensorProduct(_) => self
                .factors()
                .into_iter()
                .flat_map(Observable::basis_rotation_gates)
                .collect(),
        }
    }
}

impl QuantumOperator for Observable {
    fn qubit_count(&self) -> usize {
        match self {
            Observable::Standard(_) => 1,
            Observable::Hermitian(h) => h.qubit_count,
            Observable::TensorProduct(t) => t.qubit_count,
        }
    }

    fn ascii_symbols(&self) -> Vec<String> {
        vec![self.label(); self.qubit_count()]
    }

    fn to_matrix(&self) -> Array2<Complex64> {
        match self {
            Observable::Standard(o) => o.gate().to_matrix(),
            Observable::Hermitian(h) => h.matrix.clone(),
            Observable::TensorProduct(_) => {
                let matrices: Vec<_> = self.factors().into_iter().map(|f| f.to_matrix()).collect();
                matrix::kron_all(matrices.iter().map(|m| m.view()))
            }
        }
    }
}

impl PartialEq for Observable {
    fn eq(&self, other: &Self) -> bool {
        self.to_ir() == other.to_ir()
    }
}

impl fmt::Display for Observable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<StandardObservable> for Observable {
    fn from(o: StandardObservable) -> Self {
        Observable::Standard(o)
    }
}

impl From<Hermitian> for Observable {
    fn from(h: Hermitian) -> Self {
        Observable::Hermitian(h)
    }
}

impl From<TensorProduct> for Observable {
    fn from(t: TensorProduct) -> Self {
        Observable::TensorProduct(t)
    }
}

impl BitXor for Observable {
    type Output = Observable;

    fn bitxor(self, rhs: Observable) -> Observable {
        self.tensor(&rhs)
    }
}

impl BitXor<&Observable> for &Observable {
    type Output = Observable;

    fn bitxor(self, rhs: &Observable) -> Observable {
        self.tensor(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::c;
    use ndarray::{IxDyn, array};

    fn matrix_of(o: StandardObservable) -> Array2<Complex64> {
        o.gate().to_matrix()
    }

    #[test]
    fn test_standard_symbols_roundtrip() {
        for o in StandardObservable::ALL {
            assert_eq!(StandardObservable::from_symbol(o.symbol()), Some(o));
        }
        assert_eq!(StandardObservable::from_symbol("q"), None);
    }

    #[test]
    fn test_hermitian_rejects_bad_shapes() {
        let non_square = Array2::from_elem((3, 2), c(0.0, 0.0));
        assert!(matches!(
            Hermitian::new(non_square),
            Err(IrError::InvalidInput(InvalidInput::NotSquare { rows: 3, cols: 2 }))
        ));

        let one_by_one = array![[c(1.0, 0.0)]];
        assert!(matches!(
            Hermitian::new(one_by_one),
            Err(IrError::InvalidInput(InvalidInput::InvalidDimension { dim: 1 }))
        ));

        let three = Array2::from_shape_fn((3, 3), |(i, j)| c((i * 3 + j) as f64, 0.0));
        assert!(matches!(
            Hermitian::new(three),
            Err(IrError::InvalidInput(InvalidInput::InvalidDimension { dim: 3 }))
        ));

        let one_d = ArrayD::from_elem(IxDyn(&[3]), c(0.0, 0.0));
        assert!(matches!(
            Hermitian::from_dyn(one_d),
            Err(IrError::InvalidInput(InvalidInput::NotTwoDimensional { ndim: 1 }))
        ));

        let ragged = vec![
            vec![c(0.0, 0.0), c(1.0, 0.0), c(2.0, 0.0)],
            vec![c(2.0, 0.0), c(3.0, 0.0)],
        ];
        assert!(matches!(
            Hermitian::from_rows(ragged),
            Err(IrError::InvalidInput(InvalidInput::NotSquare { .. }))
        ));
    }

    #[test]
    fn test_hermitian_rejects_non_hermitian() {
        let t = StandardGate::T.to_matrix();
        assert!(matches!(
            Hermitian::new(t),
            Err(IrError::InvalidInput(InvalidInput::NotHermitian))
        ));
    }

    #[test]
    fn test_hermitian_with_tolerance() {
        let mut m = matrix_of(StandardObservable::X);
        m[[0, 1]] += c(1e-4, 0.0);
        assert!(Hermitian::new(m.clone()).is_err());
        assert!(Hermitian::with_tolerance(m, Tolerance::new(0.0, 1e-3)).is_ok());
    }

    #[test]
    fn test_hermitian_from_dyn_accepts_matrix() {
        let m = matrix_of(StandardObservable::Y).into_dyn();
        let h = Hermitian::from_dyn(m).unwrap();
        assert_eq!(h.matrix().dim(), (2, 2));
    }

    #[test]
    fn test_label_and_factors() {
        let inner = Observable::tensor_product(vec![Observable::x(), Observable::y()]).unwrap();
        let outer = Observable::tensor_product(vec![Observable::z(), inner]).unwrap();
        assert_eq!(outer.label(), "Z@X@Y");
        assert_eq!(outer.factors().len(), 3);
        assert_eq!(outer.qubit_count(), 3);
        assert_eq!(outer.to_string(), "Z@X@Y");
    }

    #[test]
    fn test_empty_tensor_product() {
        assert!(matches!(
            Observable::tensor_product(vec![]),
            Err(IrError::InvalidInput(InvalidInput::EmptyTensorProduct))
        ));
    }

    #[test]
    fn test_eigenvalues() {
        assert_eq!(Observable::i().eigenvalues(), vec![1.0, 1.0]);
        assert_eq!(Observable::h().eigenvalues(), vec![1.0, -1.0]);

        let zz = Observable::z() ^ Observable::z();
        assert_eq!(zz.eigenvalues(), vec![1.0, -1.0, -1.0, 1.0]);

        let herm = Observable::hermitian(array![
            [c(2.0, 0.0), c(0.0, 0.0)],
            [c(0.0, 0.0), c(-3.0, 0.0)]
        ])
        .unwrap();
        let values = herm.eigenvalues();
        assert!((values[0] + 3.0).abs() < 1e-12);
        assert!((values[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_basis_rotation_gates() {
        assert!(Observable::z().basis_rotation_gates().is_empty());
        assert_eq!(
            Observable::x().basis_rotation_gates(),
            vec![Gate::Standard(StandardGate::H)]
        );
        assert_eq!(
            Observable::y().basis_rotation_gates(),
            vec![
                Gate::Standard(StandardGate::Z),
                Gate::Standard(StandardGate::S),
                Gate::Standard(StandardGate::H),
            ]
        );
        let tp = Observable::x() ^ Observable::y();
        assert_eq!(tp.basis_rotation_gates().len(), 4);
    }

    #[test]
    fn test_hermitian_basis_rotation_diagonalizes() {
        let herm = Observable::hermitian(matrix_of(StandardObservable::Y)).unwrap();
        let gates = herm.basis_rotation_gates();
        assert_eq!(gates.len(), 1);
        let u = gates[0].to_matrix();
        let m = herm.to_matrix();
        let d = u.dot(&m).dot(&matrix::dagger(u.view()));
        let expected = array![[c(-1.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(1.0, 0.0)]];
        assert!(Tolerance::default().all_close(d.view(), expected.view()));
    }

    #[test]
    fn test_tensor_matrix() {
        let zx = Observable::z() ^ Observable::x();
        let m = zx.to_matrix();
        assert_eq!(m.dim(), (4, 4));
        assert_eq!(m[[0, 1]], c(1.0, 0.0));
        assert_eq!(m[[2, 3]], c(-1.0, 0.0));
    }
}
