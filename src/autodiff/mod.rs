//! Forward-mode automatic differentiation with dual numbers.
//!
//! A [`DualNumber`] carries a value together with its derivative with
//! respect to one seeded input. Arithmetic and the elementary functions
//! propagate both halves, so evaluating an expression on
//! [`DualNumber::variable(x)`](DualNumber::variable) yields `f(x)` and
//! `f'(x)` in one pass.
//!
//! ```
//! use linal::DualNumber;
//!
//! let x = DualNumber::variable(1.0_f64);
//! let y = (x * x).exp();
//! assert!((y.value - core::f64::consts::E).abs() < 1e-12);
//! assert!((y.derivative - 2.0 * core::f64::consts::E).abs() < 1e-12);
//! ```
//!
//! [`finite_diff`] holds forward-difference approximations for
//! cross-checking.

pub mod finite_diff;

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{LinalgError, Result};
use crate::traits::FloatScalar;

/// Dual number `value + derivative·ε` with `ε² = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualNumber<T> {
    pub value: T,
    pub derivative: T,
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: FloatScalar> DualNumber<T> {
    #[inline]
    pub fn new(value: T, derivative: T) -> Self {
        Self { value, derivative }
    }

    /// A constant: derivative zero.
    #[inline]
    pub fn constant(value: T) -> Self {
        Self::new(value, T::zero())
    }

    /// The independent variable: derivative one.
    #[inline]
    pub fn variable(value: T) -> Self {
        Self::new(value, T::one())
    }
}

// ── Elementary functions ─────────────────────────────────────────────

impl<T: FloatScalar> DualNumber<T> {
    /// Apply `f` with known derivative `f_prime` (chain rule).
    ///
    /// The result is `(f(v), d · f_prime(v))`.
    ///
    /// ```
    /// use linal::DualNumber;
    /// let x = DualNumber::variable(2.0_f64);
    /// let cube = x.lift(|v| v * v * v, |v| 3.0 * v * v);
    /// assert_eq!(cube.value, 8.0);
    /// assert_eq!(cube.derivative, 12.0);
    /// ```
    #[inline]
    pub fn lift(self, f: impl FnOnce(T) -> T, f_prime: impl FnOnce(T) -> T) -> Self {
        Self::new(f(self.value), self.derivative * f_prime(self.value))
    }

    #[inline]
    pub fn exp(self) -> Self {
        let e = self.value.exp();
        Self::new(e, self.derivative * e)
    }

    /// Natural logarithm.
    #[inline]
    pub fn ln(self) -> Self {
        Self::new(self.value.ln(), self.derivative / self.value)
    }

    /// Alias for [`ln`](Self::ln).
    #[inline]
    pub fn log(self) -> Self {
        self.ln()
    }

    #[inline]
    pub fn sin(self) -> Self {
        let (s, c) = self.value.sin_cos();
        Self::new(s, self.derivative * c)
    }

    #[inline]
    pub fn cos(self) -> Self {
        let (s, c) = self.value.sin_cos();
        Self::new(c, -self.derivative * s)
    }

    #[inline]
    pub fn tan(self) -> Self {
        let t = self.value.tan();
        Self::new(t, self.derivative * (T::one() + t * t))
    }

    #[inline]
    pub fn sqrt(self) -> Self {
        let r = self.value.sqrt();
        Self::new(r, self.derivative / (r + r))
    }

    /// Integer power.
    ///
    /// `x^0` is the constant one, including at `x = 0`.
    #[inline]
    pub fn powi(self, n: i32) -> Self {
        if n == 0 {
            return Self::constant(T::one());
        }
        let nf: T = T::from(n).unwrap_or_else(T::nan);
        Self::new(
            self.value.powi(n),
            self.derivative * nf * self.value.powi(n - 1),
        )
    }

    /// Real power with a constant exponent.
    ///
    /// A zero exponent gives the constant one, as for [`powi`](Self::powi).
    #[inline]
    pub fn powf(self, p: T) -> Self {
        if p == T::zero() {
            return Self::constant(T::one());
        }
        Self::new(
            self.value.powf(p),
            self.derivative * p * self.value.powf(p - T::one()),
        )
    }

    /// `1 / self`.
    #[inline]
    pub fn recip(self) -> Self {
        let inv = self.value.recip();
        Self::new(inv, -self.derivative * inv * inv)
    }

    /// Division that fails when the divisor's value is exactly zero.
    ///
    /// The `/` operator follows IEEE semantics instead.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        if rhs.value == T::zero() {
            return Err(LinalgError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    /// Sum any number of dual numbers. An empty sequence gives zero.
    ///
    /// ```
    /// use linal::DualNumber;
    /// let xs = [1.0_f64, 2.0, 3.0].map(DualNumber::variable);
    /// let s = DualNumber::sum(xs);
    /// assert_eq!(s, DualNumber::new(6.0, 3.0));
    /// ```
    pub fn sum<I: IntoIterator<Item = Self>>(terms: I) -> Self {
        terms
            .into_iter()
            .fold(Self::constant(T::zero()), |acc, x| acc + x)
    }
}

/// Evaluate `f` at `x` and return `(f(x), f'(x))`.
///
/// ```
/// use linal::autodiff::derivative;
/// let (y, dy) = derivative(|x| (x * x).sin(), 1.0_f64);
/// assert!((y - 1.0_f64.sin()).abs() < 1e-12);
/// assert!((dy - 2.0 * 1.0_f64.cos()).abs() < 1e-12);
/// ```
pub fn derivative<T: FloatScalar>(f: impl FnOnce(DualNumber<T>) -> DualNumber<T>, x: T) -> (T, T) {
    let y = f(DualNumber::variable(x));
    (y.value, y.derivative)
}

// ── Operators ────────────────────────────────────────────────────────

impl<T: FloatScalar> Add for DualNumber<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value, self.derivative + rhs.derivative)
    }
}

impl<T: FloatScalar> Sub for DualNumber<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value, self.derivative - rhs.derivative)
    }
}

// Product rule
impl<T: FloatScalar> Mul for DualNumber<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.value * rhs.value,
            self.value * rhs.derivative + self.derivative * rhs.value,
        )
    }
}

// Quotient rule; a zero divisor yields inf/NaN like plain floats
impl<T: FloatScalar> Div for DualNumber<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(
            self.value / rhs.value,
            (self.derivative * rhs.value - self.value * rhs.derivative) / (rhs.value * rhs.value),
        )
    }
}

impl<T: FloatScalar> Neg for DualNumber<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value, -self.derivative)
    }
}

// Dual ∘ plain scalar: the scalar is a constant
impl<T: FloatScalar> Add<T> for DualNumber<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: T) -> Self {
        Self::new(self.value + rhs, self.derivative)
    }
}

impl<T: FloatScalar> Sub<T> for DualNumber<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: T) -> Self {
        Self::new(self.value - rhs, self.derivative)
    }
}

impl<T: FloatScalar> Mul<T> for DualNumber<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.value * rhs, self.derivative * rhs)
    }
}

impl<T: FloatScalar> Div<T> for DualNumber<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.value / rhs, self.derivative / rhs)
    }
}

macro_rules! impl_assign_ops {
    ($($Trait:ident, $method:ident, $op:tt);+ $(;)?) => {
        $(
            impl<T: FloatScalar> $Trait for DualNumber<T> {
                #[inline]
                fn $method(&mut self, rhs: Self) {
                    *self = *self $op rhs;
                }
            }

            impl<T: FloatScalar> $Trait<T> for DualNumber<T> {
                #[inline]
                fn $method(&mut self, rhs: T) {
                    *self = *self $op rhs;
                }
            }
        )+
    };
}

impl_assign_ops!(
    AddAssign, add_assign, +;
    SubAssign, sub_assign, -;
    MulAssign, mul_assign, *;
    DivAssign, div_assign, /;
);

// Plain scalar on the left: `2.0 * x`, `1.0 / x`
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl Add<DualNumber<$t>> for $t {
                type Output = DualNumber<$t>;
                #[inline]
                fn add(self, rhs: DualNumber<$t>) -> DualNumber<$t> {
                    rhs + self
                }
            }

            impl Sub<DualNumber<$t>> for $t {
                type Output = DualNumber<$t>;
                #[inline]
                fn sub(self, rhs: DualNumber<$t>) -> DualNumber<$t> {
                    DualNumber::new(self - rhs.value, -rhs.derivative)
                }
            }

            impl Mul<DualNumber<$t>> for $t {
                type Output = DualNumber<$t>;
                #[inline]
                fn mul(self, rhs: DualNumber<$t>) -> DualNumber<$t> {
                    rhs * self
                }
            }

            impl Div<DualNumber<$t>> for $t {
                type Output = DualNumber<$t>;
                #[inline]
                fn div(self, rhs: DualNumber<$t>) -> DualNumber<$t> {
                    DualNumber::constant(self) / rhs
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64);

impl<T: FloatScalar> Sum for DualNumber<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::constant(T::zero()), |acc, x| acc + x)
    }
}

impl<'a, T: FloatScalar> Sum<&'a DualNumber<T>> for DualNumber<T> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::constant(T::zero()), |acc, x| acc + *x)
    }
}

impl<T: FloatScalar> From<T> for DualNumber<T> {
    fn from(value: T) -> Self {
        Self::constant(value)
    }
}

// ── Display ──────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for DualNumber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}ε", self.value, self.derivative)
    }
}
