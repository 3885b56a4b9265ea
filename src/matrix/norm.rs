use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Squared Frobenius norm (sum of all elements squared). No sqrt.
    pub fn frobenius_norm_squared(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| acc + x * x)
    }
}

impl<T: FloatScalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Frobenius norm (square root of sum of squared elements).
    ///
    /// ```
    /// use linal::Matrix;
    /// let m = Matrix::new([[3.0_f64, 0.0], [0.0, 4.0]]);
    /// assert_eq!(m.frobenius_norm(), 5.0);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        self.frobenius_norm_squared().sqrt()
    }
}
