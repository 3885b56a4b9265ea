//! Column statistics over observation matrices.
//!
//! Rows are observations and columns are variables. These are the
//! primitives a principal-component analysis composes with
//! [`Matrix::dominant_eigenpair`](crate::Matrix::dominant_eigenpair).

use crate::error::{LinalgError, Result};
use crate::matrix::vector::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

impl<T: FloatScalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Mean of each column.
    ///
    /// Fails with [`LinalgError::DimensionMismatch`] when there are no rows.
    ///
    /// ```
    /// use linal::{Matrix, Vector};
    /// let data = Matrix::new([[1.0, 10.0], [3.0, 20.0]]);
    /// assert_eq!(data.column_means().unwrap(), Vector::from_array([2.0, 15.0]));
    /// ```
    pub fn column_means(&self) -> Result<Vector<T, C>> {
        if R == 0 {
            return Err(LinalgError::DimensionMismatch { expected: 1, found: 0 });
        }
        let rows = self.as_rows().iter().map(|r| Vector::from_array(*r));
        let total = rows.fold(Vector::zeros(), |acc, r| acc + r);
        total.div_scalar(count::<T>(R))
    }

    /// Subtract the column means from every row.
    pub fn centered(&self) -> Result<Self> {
        let mean = self.column_means()?;
        let mut out = *self;
        for i in 0..R {
            for j in 0..C {
                out[(i, j)] = out[(i, j)] - mean[j];
            }
        }
        Ok(out)
    }

    /// Sample covariance matrix `Xcᵀ Xc / (R - 1)` of the centered data.
    ///
    /// Fails with [`LinalgError::DimensionMismatch`] when fewer than two rows
    /// are available.
    ///
    /// ```
    /// use linal::Matrix;
    /// let data: Matrix<f64, 3, 2> = Matrix::new([[1.0, 2.0], [3.0, 6.0], [5.0, 10.0]]);
    /// let cov = data.covariance().unwrap();
    /// assert!((cov[(0, 0)] - 4.0).abs() < 1e-12);
    /// assert!((cov[(0, 1)] - 8.0).abs() < 1e-12);
    /// assert!((cov[(1, 1)] - 16.0).abs() < 1e-12);
    /// ```
    pub fn covariance(&self) -> Result<Matrix<T, C, C>> {
        if R < 2 {
            return Err(LinalgError::DimensionMismatch { expected: 2, found: R });
        }
        let xc = self.centered()?;
        (xc.transpose() * xc).div_scalar(count::<T>(R - 1))
    }
}

fn count<T: FloatScalar>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}
