//! # linal
//!
//! Fixed-dimension dense linear algebra and forward-mode automatic
//! differentiation, no-std compatible. Sizes are const generics, so shape
//! errors in arithmetic are caught at compile time and nothing touches the
//! heap.
//!
//! ## Quick start
//!
//! ```
//! use linal::{Matrix, Vector};
//!
//! // Solve a linear system Ax = b
//! let a = Matrix::new([
//!     [2.0_f64, 1.0, -1.0],
//!     [-3.0, -1.0, 2.0],
//!     [-2.0, 1.0, 2.0],
//! ]);
//! let b = Vector::from_array([8.0, -11.0, -3.0]);
//! let x = a.solve(&b).unwrap(); // x = [2, 3, -1]
//! assert!((x[1] - 3.0).abs() < 1e-12);
//!
//! // Determinant and inverse by cofactor expansion
//! assert!((a.determinant() - (-1.0)).abs() < 1e-12);
//! let a_inv = a.inverse().unwrap();
//! assert!((a_inv * a - Matrix::eye()).frobenius_norm() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: `Matrix<T, R, C>` with row-major `[[T; C]; R]` storage and
//!   [`Vector<T, N>`]. Checked construction and access, arithmetic
//!   operators, norms, folds (`sum_of`, `linear_combination`), and column
//!   statistics.
//!
//! - [`linalg`]: Determinant, cofactors, adjugate and inverse by Laplace
//!   expansion; Gaussian elimination with partial pivoting
//!   ([`linalg::solve_linear`]); seeded power iteration for the dominant
//!   eigenpair ([`linalg::power_iteration`]).
//!
//! - [`autodiff`]: [`DualNumber<T>`] for forward-mode derivatives, with
//!   `exp`, `ln`, `sin`, `cos` and friends, explicit-derivative lifts, and
//!   finite-difference cross-checks in [`autodiff::finite_diff`].
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats, used by norms, power iteration and duals
//!   - [`LinalgScalar`]: real floats and complex numbers, used by inverse and solve
//!
//! ## Errors and logging
//!
//! Fallible operations return [`Result<T>`] with a [`LinalgError`]. Power
//! iteration reports progress through the [`log`](https://docs.rs/log)
//! facade at `trace`/`debug` level; nothing is printed unless the
//! application installs a logger.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm |
//! | `libm`    | baseline | Pure-Rust software float fallback |
//! | `complex` | no       | `Complex<f32>` / `Complex<f64>` support via `num-complex` |
//! | `all`     | no       | All features: `std` + `complex` |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod autodiff;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod traits;

pub use autodiff::DualNumber;
pub use error::{LinalgError, Result};
pub use matrix::vector::{Vector, Vector2, Vector3, Vector4};
pub use matrix::Matrix;
pub use traits::{FloatScalar, LinalgScalar, Scalar};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
