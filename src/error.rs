use thiserror::Error;

/// Errors from container construction, element access, and linear algebra.
///
/// Every fallible operation in the crate reports one of these at the point
/// where the violation is detected. Nothing is retried internally.
///
/// ```
/// use linal::{LinalgError, Matrix, Vector};
///
/// let singular = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
/// assert_eq!(singular.inverse().unwrap_err(), LinalgError::SingularMatrix);
///
/// let v = Vector::from_array([1.0_f64, 2.0]);
/// assert_eq!(v.get(5).unwrap_err(), LinalgError::OutOfRange { index: 5, bound: 2 });
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Construction data does not match the declared size.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Element access outside the valid bounds.
    #[error("index {index} out of range for bound {bound}")]
    OutOfRange { index: usize, bound: usize },

    /// Scalar division by exact zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A square matrix was required.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Determinant is exactly zero, so the inverse does not exist.
    #[error("matrix is singular")]
    SingularMatrix,

    /// No nonzero pivot was available during elimination.
    #[error("linear system is singular")]
    SingularSystem,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, LinalgError>;

#[cfg(test)]
mod tests {
    use super::*;

    extern crate alloc;
    use alloc::string::ToString;

    #[test]
    fn display_messages() {
        let e = LinalgError::DimensionMismatch { expected: 3, found: 2 };
        assert_eq!(e.to_string(), "dimension mismatch: expected 3, found 2");

        let e = LinalgError::NotSquare { rows: 2, cols: 3 };
        assert_eq!(e.to_string(), "matrix is not square: 2x3");

        assert_eq!(LinalgError::SingularSystem.to_string(), "linear system is singular");
    }

    #[test]
    fn errors_compare() {
        assert_ne!(LinalgError::SingularMatrix, LinalgError::SingularSystem);
        assert_eq!(
            LinalgError::OutOfRange { index: 1, bound: 1 },
            LinalgError::OutOfRange { index: 1, bound: 1 }
        );
    }
}
