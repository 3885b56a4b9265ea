//! Classic dense algorithms on square matrices.
//!
//! - Determinant, cofactors, adjugate, and inverse by Laplace expansion
//!   (methods on [`Matrix`](crate::Matrix)).
//! - Linear solves by Gaussian elimination with partial pivoting
//!   ([`solve_linear`], `Matrix::solve`).
//! - Dominant eigenpair by seeded power iteration ([`power_iteration`],
//!   `Matrix::dominant_eigenpair`).

pub(crate) mod cofactor;
pub(crate) mod gauss;
pub(crate) mod power;

pub use gauss::{solve_linear, solve_linear_multi};
pub use power::{power_iteration, power_iteration_with_rng, EigenPair, PowerIteration};

pub use crate::error::LinalgError;
