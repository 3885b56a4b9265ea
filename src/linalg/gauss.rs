use num_traits::Zero;

use crate::error::{LinalgError, Result};
use crate::matrix::vector::Vector;
use crate::traits::LinalgScalar;
use crate::Matrix;

/// Augmented system `[A | B]` with `P` right-hand-side columns.
///
/// Row swaps and row operations act on both halves together, exactly as on
/// a single `N × (N + P)` matrix.
struct Augmented<T, const N: usize, const P: usize> {
    lhs: Matrix<T, N, N>,
    rhs: Matrix<T, N, P>,
}

impl<T: LinalgScalar, const N: usize, const P: usize> Augmented<T, N, P> {
    fn swap_rows(&mut self, a: usize, b: usize) {
        self.lhs.swap_rows(a, b);
        self.rhs.swap_rows(a, b);
    }

    /// Reduce `lhs` to upper-triangular form with partial pivoting.
    fn forward_eliminate(&mut self) -> Result<()> {
        for i in 0..N {
            // Partial pivoting: find row with largest modulus in this column
            let mut pivot_row = i;
            let mut max_val = self.lhs[(i, i)].modulus();
            for row in (i + 1)..N {
                let val = self.lhs[(row, i)].modulus();
                if val > max_val {
                    max_val = val;
                    pivot_row = row;
                }
            }

            if max_val.is_zero() {
                return Err(LinalgError::SingularSystem);
            }

            self.swap_rows(i, pivot_row);

            let pivot = self.lhs[(i, i)];
            for j in (i + 1)..N {
                let factor = self.lhs[(j, i)] / pivot;
                for k in i..N {
                    let v = self.lhs[(i, k)];
                    self.lhs[(j, k)] = self.lhs[(j, k)] - factor * v;
                }
                for k in 0..P {
                    let v = self.rhs[(i, k)];
                    self.rhs[(j, k)] = self.rhs[(j, k)] - factor * v;
                }
            }
        }
        Ok(())
    }

    /// Solve the upper-triangular system left by `forward_eliminate`.
    fn back_substitute(&self) -> Matrix<T, N, P> {
        let mut x = Matrix::<T, N, P>::zeros();
        for p in 0..P {
            for i in (0..N).rev() {
                let mut sum = self.rhs[(i, p)];
                for j in (i + 1)..N {
                    sum = sum - self.lhs[(i, j)] * x[(j, p)];
                }
                x[(i, p)] = sum / self.lhs[(i, i)];
            }
        }
        x
    }
}

/// Solve `A·X = B` for `X` by Gaussian elimination with partial pivoting.
///
/// Each column of `B` is an independent right-hand side.
///
/// # Errors
///
/// Returns [`LinalgError::SingularSystem`] when a pivot column has no
/// nonzero candidate.
pub fn solve_linear_multi<T: LinalgScalar, const N: usize, const P: usize>(
    a: &Matrix<T, N, N>,
    b: &Matrix<T, N, P>,
) -> Result<Matrix<T, N, P>> {
    let mut aug = Augmented { lhs: *a, rhs: *b };
    aug.forward_eliminate()?;
    Ok(aug.back_substitute())
}

/// Solve `A·x = b` for `x` by Gaussian elimination with partial pivoting.
///
/// Works on a copy of the augmented matrix `[A | b]`; the inputs are not
/// modified. Pivots are chosen by largest modulus in each column.
///
/// # Errors
///
/// Returns [`LinalgError::SingularSystem`] when every pivot candidate in
/// some column is exactly zero. Tiny but nonzero pivots are used as-is.
///
/// ```
/// use linal::{Matrix, Vector};
/// use linal::linalg::solve_linear;
///
/// let a = Matrix::new([[3.0_f64, 2.0], [1.0, 4.0]]);
/// let b = Vector::from_array([7.0, 9.0]);
/// let x = solve_linear(&a, &b).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
/// ```
pub fn solve_linear<T: LinalgScalar, const N: usize>(
    a: &Matrix<T, N, N>,
    b: &Vector<T, N>,
) -> Result<Vector<T, N>> {
    Ok(solve_linear_multi(a, &b.to_column())?.col(0))
}

/// Convenience methods on square matrices.
impl<T: LinalgScalar, const N: usize> Matrix<T, N, N> {
    /// Solve `Ax = b` for `x` via Gaussian elimination.
    ///
    /// ```
    /// use linal::{Matrix, Vector};
    /// let a = Matrix::new([
    ///     [2.0_f64, 1.0, -1.0],
    ///     [-3.0, -1.0, 2.0],
    ///     [-2.0, 1.0, 2.0],
    /// ]);
    /// let b = Vector::from_array([8.0, -11.0, -3.0]);
    /// let x = a.solve(&b).unwrap();
    /// assert!((x[0] - 2.0).abs() < 1e-12);
    /// assert!((x[1] - 3.0).abs() < 1e-12);
    /// assert!((x[2] - (-1.0)).abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &Vector<T, N>) -> Result<Vector<T, N>> {
        solve_linear(self, b)
    }

    /// Solve `AX = B` for several right-hand sides at once.
    pub fn solve_matrix<const P: usize>(&self, b: &Matrix<T, N, P>) -> Result<Matrix<T, N, P>> {
        solve_linear_multi(self, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_2x2() {
        // 3x + 2y = 7
        // x + 4y = 9
        let a = Matrix::new([[3.0_f64, 2.0], [1.0, 4.0]]);
        let b = Vector::from_array([7.0, 9.0]);

        let x = a.solve(&b).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn solve_3x3() {
        let a = Matrix::new([
            [2.0_f64, 1.0, -1.0],
            [-3.0, -1.0, 2.0],
            [-2.0, 1.0, 2.0],
        ]);
        let b = Vector::from_array([8.0, -11.0, -3.0]);

        let x = solve_linear(&a, &b).unwrap();
        assert!((x[0] - 2.0).abs() < 1e-12);
        assert!((x[1] - 3.0).abs() < 1e-12);
        assert!((x[2] - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn solve_needs_pivoting() {
        // Zero in the (0, 0) position forces a row swap
        let a = Matrix::new([[0.0_f64, 1.0], [1.0, 1.0]]);
        let b = Vector::from_array([2.0, 3.0]);
        let x = a.solve(&b).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn solve_does_not_modify_inputs() {
        let a = Matrix::new([[0.0_f64, 2.0], [4.0, 1.0]]);
        let b = Vector::from_array([2.0, 5.0]);
        let (a0, b0) = (a, b);
        let _ = a.solve(&b).unwrap();
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn solve_verify_residual() {
        let a = Matrix::new([
            [1.0_f64, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [2.0, 6.0, 4.0, 1.0],
            [3.0, 1.0, 9.0, 2.0],
        ]);
        let b = Vector::from_array([10.0, 26.0, 13.0, 15.0]);

        let x = a.solve(&b).unwrap();
        let r = a * x - b;
        for i in 0..4 {
            assert!(r[i].abs() < 1e-10, "residual[{}] = {}", i, r[i]);
        }
    }

    #[test]
    fn solve_singular_duplicate_rows() {
        let a = Matrix::new([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0], [1.0, 2.0, 3.0]]);
        let b = Vector::from_array([1.0, 2.0, 3.0]);
        assert_eq!(a.solve(&b).unwrap_err(), LinalgError::SingularSystem);
    }

    #[test]
    fn solve_zero_matrix() {
        let a: Matrix<f64, 3, 3> = Matrix::zeros();
        let b = Vector::fill(1.0);
        assert_eq!(a.solve(&b).unwrap_err(), LinalgError::SingularSystem);
    }

    #[test]
    fn solve_matrix_recovers_inverse() {
        let a = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
        let x = a.solve_matrix(&Matrix::eye()).unwrap();
        let inv = a.inverse().unwrap();
        assert!((x - inv).frobenius_norm() < 1e-12);
    }

    #[test]
    fn solve_matrix_columns_independent() {
        let a = Matrix::new([[2.0_f64, 0.0], [0.0, 4.0]]);
        let b = Matrix::new([[2.0, 4.0, 6.0], [4.0, 8.0, 12.0]]);
        let x = a.solve_matrix(&b).unwrap();
        assert_eq!(x, Matrix::new([[1.0, 2.0, 3.0], [1.0, 2.0, 3.0]]));
    }
}
