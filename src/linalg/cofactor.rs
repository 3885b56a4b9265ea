use crate::error::{LinalgError, Result};
use crate::traits::{LinalgScalar, Scalar};
use crate::Matrix;

/// Determinant of the submatrix of `m` selected by `rows` × `cols`.
///
/// Laplace expansion along the first selected row. The selections always
/// have equal length. Cost is O(n!) in the selection size.
fn expand<T: Scalar, const N: usize>(m: &Matrix<T, N, N>, rows: &[usize], cols: &[usize]) -> T {
    debug_assert_eq!(rows.len(), cols.len());
    match cols.len() {
        0 => T::one(),
        1 => m.data[rows[0]][cols[0]],
        2 => {
            let (r0, r1) = (rows[0], rows[1]);
            let (c0, c1) = (cols[0], cols[1]);
            m.data[r0][c0] * m.data[r1][c1] - m.data[r0][c1] * m.data[r1][c0]
        }
        n => {
            let mut det = T::zero();
            let mut sub = [0usize; N];
            for (j, &col) in cols.iter().enumerate() {
                let a = m.data[rows[0]][col];
                // cols without position j
                sub[..j].copy_from_slice(&cols[..j]);
                sub[j..n - 1].copy_from_slice(&cols[j + 1..]);
                let term = a * expand(m, &rows[1..], &sub[..n - 1]);
                det = if j % 2 == 0 { det + term } else { det - term };
            }
            det
        }
    }
}

/// Row or column selection `0..N` with `skip` removed, plus its length.
fn without<const N: usize>(skip: usize) -> ([usize; N], usize) {
    let mut idx = [0usize; N];
    let mut len = 0;
    for k in 0..N {
        if k != skip {
            idx[len] = k;
            len += 1;
        }
    }
    (idx, len)
}

#[inline]
fn all<const N: usize>() -> [usize; N] {
    core::array::from_fn(|k| k)
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Determinant by recursive cofactor (Laplace) expansion along the first row.
    ///
    /// Exact for integer element types. The expansion visits every
    /// permutation, so cost grows as O(N!); this is intended for the small
    /// fixed sizes this crate targets.
    ///
    /// ```
    /// use linal::Matrix;
    /// let m = Matrix::new([[6, 1, 1], [4, -2, 5], [2, 8, 7]]);
    /// assert_eq!(m.determinant(), -306);
    /// ```
    pub fn determinant(&self) -> T {
        let idx = all::<N>();
        expand(self, &idx, &idx)
    }

    /// Determinant of the minor obtained by deleting `row` and `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn minor(&self, row: usize, col: usize) -> T {
        assert!(row < N && col < N, "minor index ({}, {}) out of bounds for {}x{}", row, col, N, N);
        let (rows, n) = without::<N>(row);
        let (cols, _) = without::<N>(col);
        expand(self, &rows[..n], &cols[..n])
    }

    /// Signed minor: `(-1)^(row + col) · minor(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        let m = self.minor(row, col);
        if (row + col) % 2 == 0 {
            m
        } else {
            T::zero() - m
        }
    }

    /// Matrix of all cofactors.
    pub fn cofactor_matrix(&self) -> Self {
        let mut out = Self::zeros();
        for i in 0..N {
            for j in 0..N {
                out.data[i][j] = self.cofactor(i, j);
            }
        }
        out
    }

    /// Adjugate: transpose of the cofactor matrix.
    ///
    /// Satisfies `A · adj(A) = det(A) · I` for every square `A`.
    pub fn adjugate(&self) -> Self {
        self.cofactor_matrix().transpose()
    }
}

impl<T: LinalgScalar, const N: usize> Matrix<T, N, N> {
    /// Inverse by the adjugate method: `adj(A) / det(A)`.
    ///
    /// Fails with [`LinalgError::SingularMatrix`] when the determinant is
    /// exactly zero. Nearly singular inputs are inverted as-is.
    ///
    /// ```
    /// use linal::Matrix;
    /// let a = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
    /// let a_inv = a.inverse().unwrap();
    /// let id = a * a_inv;
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!((id[(0, 1)]).abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == T::zero() {
            return Err(LinalgError::SingularMatrix);
        }
        self.adjugate().div_scalar(det)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near_identity<const N: usize>(m: &Matrix<f64, N, N>, tol: f64) {
        for i in 0..N {
            for j in 0..N {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (m[(i, j)] - expected).abs() < tol,
                    "m[({},{})] = {}, expected {}",
                    i,
                    j,
                    m[(i, j)],
                    expected
                );
            }
        }
    }

    #[test]
    fn det_base_cases() {
        assert_eq!(Matrix::<f64, 0, 0>::zeros().determinant(), 1.0);
        assert_eq!(Matrix::new([[7.0]]).determinant(), 7.0);
        assert_eq!(Matrix::new([[3.0, 8.0], [4.0, 6.0]]).determinant(), -14.0);
    }

    #[test]
    fn det_3x3() {
        let m = Matrix::new([[6.0_f64, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        assert!((m.determinant() - (-306.0)).abs() < 1e-10);
    }

    #[test]
    fn det_4x4_integer() {
        let m = Matrix::new([[1, 0, 2, -1], [3, 0, 0, 5], [2, 1, 4, -3], [1, 0, 5, 0]]);
        assert_eq!(m.determinant(), 30);
    }

    #[test]
    fn det_identity_and_triangular() {
        let id: Matrix<f64, 5, 5> = Matrix::eye();
        assert_eq!(id.determinant(), 1.0);

        let upper = Matrix::new([[2, 5, 1], [0, 3, 7], [0, 0, 4]]);
        assert_eq!(upper.determinant(), 24);
    }

    #[test]
    fn det_transpose_invariant() {
        let m = Matrix::new([[2, -1, 0, 3], [1, 4, 2, 0], [0, 5, -2, 1], [3, 0, 1, 1]]);
        assert_eq!(m.transpose().determinant(), m.determinant());
    }

    #[test]
    fn det_propagates_nan_behind_zero_entry() {
        // The NaN only reaches the expansion through zero first-row entries
        let m = Matrix::new([
            [1.0_f64, 0.0, 0.0],
            [f64::NAN, 2.0, 0.0],
            [1.0, 0.0, 1.0],
        ]);
        assert!(m.determinant().is_nan());
    }

    #[test]
    fn det_singular_is_zero() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6], [1, 2, 3]]);
        assert_eq!(m.determinant(), 0);
    }

    #[test]
    fn minors_and_cofactors() {
        let m = Matrix::new([[1, 2, 3], [0, 4, 5], [1, 0, 6]]);
        assert_eq!(m.minor(0, 0), 24);
        assert_eq!(m.minor(0, 1), -5);
        assert_eq!(m.cofactor(0, 1), 5);
        assert_eq!(m.cofactor(1, 1), 3);
    }

    #[test]
    #[should_panic]
    fn minor_out_of_bounds() {
        let m = Matrix::new([[1, 2], [3, 4]]);
        let _ = m.minor(2, 0);
    }

    #[test]
    fn adjugate_identity() {
        let m = Matrix::new([[2, 1, 0], [1, 3, 1], [0, 1, 4]]);
        let det = m.determinant();
        assert_eq!(m * m.adjugate(), Matrix::<i32, 3, 3>::eye() * det);
        assert_eq!(m.adjugate() * m, Matrix::<i32, 3, 3>::eye() * det);
    }

    #[test]
    fn inverse_2x2() {
        let a = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
        let a_inv = a.inverse().unwrap();
        assert_near_identity(&(a * a_inv), 1e-12);
        assert_near_identity(&(a_inv * a), 1e-12);
    }

    #[test]
    fn inverse_3x3() {
        let a = Matrix::new([[1.0_f64, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let a_inv = a.inverse().unwrap();
        let expected = Matrix::new([[-24.0, 18.0, 5.0], [20.0, -15.0, -4.0], [-5.0, 4.0, 1.0]]);
        assert!((a_inv - expected).frobenius_norm() < 1e-10);
    }

    #[test]
    fn inverse_5x5() {
        let a: Matrix<f64, 5, 5> =
            Matrix::from_fn(|i, j| if i == j { 6.0 } else { 1.0 / (1.0 + (i + j) as f64) });
        let a_inv = a.inverse().unwrap();
        assert_near_identity(&(a_inv * a), 1e-10);
    }

    #[test]
    fn inverse_singular() {
        let a = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
        assert_eq!(a.inverse().unwrap_err(), LinalgError::SingularMatrix);

        let dup = Matrix::new([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0], [1.0, 2.0, 3.0]]);
        assert_eq!(dup.inverse().unwrap_err(), LinalgError::SingularMatrix);
    }
}
