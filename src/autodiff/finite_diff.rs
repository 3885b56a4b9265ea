//! Forward-difference derivative approximations.
//!
//! Each partial uses the step `h = sqrt(ε) * max(|x|, 1)`, which balances
//! truncation against round-off for smooth functions. Accuracy is roughly
//! `sqrt(ε)` relative, far below [`DualNumber`](super::DualNumber), so these
//! are mainly useful for cross-checking exact derivatives.

use crate::traits::FloatScalar;

#[inline]
fn step<T: FloatScalar>(x: T) -> T {
    T::epsilon().sqrt() * x.abs().max(T::one())
}

/// Approximate `f'(x)` with a forward difference.
///
/// Requires two evaluations of `f`.
///
/// ```
/// use linal::autodiff::finite_diff::forward_difference;
///
/// let d = forward_difference(|x: f64| x * x * x, 2.0);
/// assert!((d - 12.0).abs() < 1e-6);
/// ```
pub fn forward_difference<T: FloatScalar>(mut f: impl FnMut(T) -> T, x: T) -> T {
    let h = step(x);
    let f0 = f(x);
    (f(x + h) - f0) / h
}

/// Approximate both partial derivatives of `f(x, y)` at `(x, y)`.
///
/// Returns `(∂f/∂x, ∂f/∂y)` from three evaluations of `f`.
///
/// ```
/// use linal::autodiff::finite_diff::partial_derivatives;
///
/// // f(x, y) = x^2 y, ∇f = (2xy, x^2)
/// let (dx, dy) = partial_derivatives(|x: f64, y: f64| x * x * y, 3.0, 4.0);
/// assert!((dx - 24.0).abs() < 1e-5);
/// assert!((dy - 9.0).abs() < 1e-5);
/// ```
pub fn partial_derivatives<T: FloatScalar>(mut f: impl FnMut(T, T) -> T, x: T, y: T) -> (T, T) {
    let f0 = f(x, y);
    let hx = step(x);
    let hy = step(y);
    let dx = (f(x + hx, y) - f0) / hx;
    let dy = (f(x, y + hy) - f0) / hy;
    (dx, dy)
}
