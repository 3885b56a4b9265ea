mod norm;
mod ops;
mod stats;
mod util;
pub mod vector;

use core::ops::{Index, IndexMut};

use crate::error::{LinalgError, Result};
use crate::matrix::vector::Vector;
use crate::traits::Scalar;

/// Fixed-size matrix with `R` rows and `C` columns.
///
/// Storage is row-major: `data[row][col]`.
/// Stack-allocated, no-std compatible, `Copy` value semantics.
///
/// # Examples
///
/// ```
/// use linal::Matrix;
///
/// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b: Matrix<f64, 3, 3> = Matrix::eye();
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize> {
    pub(crate) data: [[T; C]; R],
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix from a row-major 2D array.
    ///
    /// The input is `[[row0], [row1], ...]` (R arrays of C elements each).
    #[inline]
    pub const fn new(rows: [[T; C]; R]) -> Self {
        Self { data: rows }
    }

    /// Number of rows.
    #[inline]
    pub const fn nrows(&self) -> usize {
        R
    }

    /// Number of columns.
    #[inline]
    pub const fn ncols(&self) -> usize {
        C
    }

    /// Borrow the rows as nested arrays.
    #[inline]
    pub fn as_rows(&self) -> &[[T; C]; R] {
        &self.data
    }

    /// Iterate over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter().flat_map(|row| row.iter())
    }
}

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix with every element set to `value`.
    #[inline]
    pub fn fill(value: T) -> Self {
        Self {
            data: [[value; C]; R],
        }
    }

    /// Checked read of the element at `(row, col)`.
    ///
    /// ```
    /// use linal::{LinalgError, Matrix};
    /// let m = Matrix::new([[1, 2], [3, 4]]);
    /// assert_eq!(m.get(1, 0), Ok(3));
    /// assert_eq!(m.get(2, 0), Err(LinalgError::OutOfRange { index: 2, bound: 2 }));
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        check_index(row, col, R, C)?;
        Ok(self.data[row][col])
    }

    /// Checked write of the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        check_index(row, col, R, C)?;
        self.data[row][col] = value;
        Ok(())
    }

    /// Build a matrix from a nested list of rows.
    ///
    /// Fails with [`LinalgError::DimensionMismatch`] when there are not
    /// exactly `R` rows or any row does not hold exactly `C` elements.
    ///
    /// ```
    /// use linal::{LinalgError, Matrix};
    /// let m = Matrix::<i32, 2, 2>::from_rows(&[&[1, 2], &[3, 4]]).unwrap();
    /// assert_eq!(m[(1, 1)], 4);
    ///
    /// let bad = Matrix::<i32, 2, 2>::from_rows(&[&[1, 2], &[3]]);
    /// assert_eq!(bad.unwrap_err(), LinalgError::DimensionMismatch { expected: 2, found: 1 });
    /// ```
    pub fn from_rows(rows: &[&[T]]) -> Result<Self> {
        if rows.len() != R {
            return Err(LinalgError::DimensionMismatch {
                expected: R,
                found: rows.len(),
            });
        }
        for row in rows {
            if row.len() != C {
                return Err(LinalgError::DimensionMismatch {
                    expected: C,
                    found: row.len(),
                });
            }
        }
        Ok(Self {
            data: core::array::from_fn(|i| core::array::from_fn(|j| rows[i][j])),
        })
    }

    /// Build a matrix from a flat row-major list of exactly `R * C` elements.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        if values.len() != R * C {
            return Err(LinalgError::DimensionMismatch {
                expected: R * C,
                found: values.len(),
            });
        }
        Ok(Self {
            data: core::array::from_fn(|i| core::array::from_fn(|j| values[i * C + j])),
        })
    }

    /// Reinterpret as an `N x N` matrix.
    ///
    /// For generic code that holds a `Matrix<T, R, C>` but needs one of the
    /// square-only operations. Fails with [`LinalgError::NotSquare`] unless
    /// `R == C == N`.
    ///
    /// ```
    /// use linal::{LinalgError, Matrix};
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// let sq: Matrix<f64, 2, 2> = m.into_square().unwrap();
    /// assert_eq!(sq.determinant(), -2.0);
    ///
    /// let wide = Matrix::new([[1.0, 2.0, 3.0]]);
    /// let err = wide.into_square::<1>().unwrap_err();
    /// assert_eq!(err, LinalgError::NotSquare { rows: 1, cols: 3 });
    /// ```
    pub fn into_square<const N: usize>(self) -> Result<Matrix<T, N, N>> {
        if R != C || R != N {
            return Err(LinalgError::NotSquare { rows: R, cols: C });
        }
        Ok(Matrix {
            data: core::array::from_fn(|i| core::array::from_fn(|j| self.data[i][j])),
        })
    }

    /// Row `i` as a vector.
    pub fn row(&self, i: usize) -> Vector<T, C> {
        Vector::from_array(self.data[i])
    }

    /// Column `j` as a vector.
    pub fn col(&self, j: usize) -> Vector<T, R> {
        Vector::from_array(core::array::from_fn(|i| self.data[i][j]))
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix filled with zeros.
    pub fn zeros() -> Self {
        Self::fill(T::zero())
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Create an identity matrix (square matrices only).
    pub fn eye() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }
}

#[inline]
fn check_index(row: usize, col: usize, rows: usize, cols: usize) -> Result<()> {
    if row >= rows {
        return Err(LinalgError::OutOfRange { index: row, bound: rows });
    }
    if col >= cols {
        return Err(LinalgError::OutOfRange { index: col, bound: cols });
    }
    Ok(())
}

// Index by (row, col) tuple
impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row][col]
    }
}

impl<T: Copy, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self::new(rows)
    }
}
