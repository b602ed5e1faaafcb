//! Dense complex matrix utilities.
//!
//! Matrices are `ndarray::Array2<Complex64>` in big-endian qubit order: the
//! first qubit of an operator is the most significant bit of the row index.

use ndarray::linalg::kron;
use ndarray::{Array2, ArrayView2};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Upper bound on Jacobi sweeps; well-conditioned inputs converge in < 10.
const MAX_SWEEPS: usize = 100;

/// Relative off-diagonal norm at which the eigen-solver stops.
const CONVERGENCE_EPSILON: f64 = 1e-14;

/// Shorthand for a complex number.
#[inline]
pub fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// Element-wise closeness thresholds.
///
/// Two values are close when `|a - b| <= atol + rtol * |b|`, the same rule
/// `numpy.allclose` applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Relative tolerance.
    pub rtol: f64,
    /// Absolute tolerance.
    pub atol: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rtol: 1e-5,
            atol: 1e-8,
        }
    }
}

impl Tolerance {
    /// Create a tolerance with explicit thresholds.
    pub const fn new(rtol: f64, atol: f64) -> Self {
        Self { rtol, atol }
    }

    /// Whether `a` is close to `b`.
    #[inline]
    pub fn is_close(&self, a: Complex64, b: Complex64) -> bool {
        (a - b).norm() <= self.atol + self.rtol * b.norm()
    }

    /// Whether two matrices share a shape and are element-wise close.
    pub fn all_close(&self, a: ArrayView2<'_, Complex64>, b: ArrayView2<'_, Complex64>) -> bool {
        a.dim() == b.dim() && a.iter().zip(b.iter()).all(|(x, y)| self.is_close(*x, *y))
    }
}

/// Conjugate transpose.
pub fn dagger(m: ArrayView2<'_, Complex64>) -> Array2<Complex64> {
    m.t().mapv(|z| z.conj())
}

/// Whether `m` equals its own conjugate transpose within `tol`.
pub fn is_hermitian(m: ArrayView2<'_, Complex64>, tol: Tolerance) -> bool {
    m.is_square() && tol.all_close(m, dagger(m).view())
}

/// Number of qubits a `dim x dim` operator acts on, if `dim` is a power of two >= 2.
pub fn qubits_for_dimension(dim: usize) -> Option<usize> {
    (dim >= 2 && dim.is_power_of_two()).then(|| dim.trailing_zeros() as usize)
}

/// Kronecker product of a sequence of matrices, left to right.
///
/// An empty sequence yields the 1x1 identity.
pub fn kron_all<'a>(matrices: impl IntoIterator<Item = ArrayView2<'a, Complex64>>) -> Array2<Complex64> {
    matrices
        .into_iter()
        .fold(Array2::from_elem((1, 1), c(1.0, 0.0)), |acc, m| kron(&acc, &m))
}

/// Kronecker product of two eigenvalue vectors.
pub fn kron_values(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter()
        .flat_map(|x| b.iter().map(move |y| x * y))
        .collect()
}

/// Eigen-decomposition of a Hermitian matrix.
#[derive(Debug, Clone)]
pub struct Eigen {
    /// Eigenvalues in ascending order.
    pub values: Vec<f64>,
    /// Unitary whose column `k` is the eigenvector of `values[k]`.
    pub vectors: Array2<Complex64>,
}

/// Diagonalize a Hermitian matrix with cyclic complex Jacobi rotations.
///
/// Each rotation first removes the phase of the pivot `a[p][q]` and then
/// applies the real symmetric Jacobi rotation, so `A <- U^H A U` with
/// `U = diag-phase * rotation`. The input is assumed Hermitian; only the
/// real part of the diagonal is read back.
pub fn hermitian_eigh(m: ArrayView2<'_, Complex64>) -> Eigen {
    let (a, v, converged) = jacobi_sweeps(m, MAX_SWEEPS);
    if !converged {
        tracing::warn!(
            max_sweeps = MAX_SWEEPS,
            off = off_diagonal_norm(a.view()),
            "jacobi eigen-solver did not converge; eigenvalues are approximate"
        );
    }

    let n = a.nrows();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| a[[i, i]].re.total_cmp(&a[[j, j]].re));

    let values = order.iter().map(|&i| a[[i, i]].re).collect();
    let mut vectors = Array2::<Complex64>::zeros((n, n));
    for (dst, &src) in order.iter().enumerate() {
        vectors.column_mut(dst).assign(&v.column(src));
    }
    Eigen { values, vectors }
}

/// Run up to `max_sweeps` Jacobi sweeps, returning the rotated matrix, the
/// accumulated rotation and whether the off-diagonal norm reached threshold.
fn jacobi_sweeps(
    m: ArrayView2<'_, Complex64>,
    max_sweeps: usize,
) -> (Array2<Complex64>, Array2<Complex64>, bool) {
    let n = m.nrows();
    let mut a = m.to_owned();
    let mut v = Array2::<Complex64>::eye(n);
    let scale = a.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt().max(f64::MIN_POSITIVE);
    let is_converged = |a: &Array2<Complex64>| off_diagonal_norm(a.view()) <= CONVERGENCE_EPSILON * scale;

    for sweep in 0..max_sweeps {
        if is_converged(&a) {
            tracing::trace!(sweep, "jacobi eigen-solver converged");
            return (a, v, true);
        }
        for p in 0..n {
            for q in (p + 1)..n {
                let apq = a[[p, q]];
                let magnitude = apq.norm();
                if magnitude == 0.0 {
                    continue;
                }
                let phase = apq / magnitude;
                let theta = (a[[q, q]].re - a[[p, p]].re) / (2.0 * magnitude);
                let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
                let cos = 1.0 / (t * t + 1.0).sqrt();
                let sin = t * cos;
                rotate_columns(&mut a, p, q, cos, sin, phase.conj());
                rotate_rows(&mut a, p, q, cos, sin, phase);
                rotate_columns(&mut v, p, q, cos, sin, phase.conj());
            }
        }
    }

    let converged = is_converged(&a);
    (a, v, converged)
}

fn off_diagonal_norm(a: ArrayView2<'_, Complex64>) -> f64 {
    a.indexed_iter()
        .filter(|((i, j), _)| i != j)
        .map(|(_, z)| z.norm_sqr())
        .sum::<f64>()
        .sqrt()
}

/// `M <- M U` restricted to columns `p`, `q`.
fn rotate_columns(m: &mut Array2<Complex64>, p: usize, q: usize, cos: f64, sin: f64, phase: Complex64) {
    for r in 0..m.nrows() {
        let mp = m[[r, p]];
        let mq = m[[r, q]] * phase;
        m[[r, p]] = mp * cos - mq * sin;
        m[[r, q]] = mp * sin + mq * cos;
    }
}

/// `M <- U^H M` restricted to rows `p`, `q`.
fn rotate_rows(m: &mut Array2<Complex64>, p: usize, q: usize, cos: f64, sin: f64, phase: Complex64) {
    for r in 0..m.ncols() {
        let mp = m[[p, r]];
        let mq = m[[q, r]] * phase;
        m[[p, r]] = mp * cos - mq * sin;
        m[[q, r]] = mp * sin + mq * cos;
    }
}
