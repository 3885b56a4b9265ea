use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{LinalgError, Result};
use crate::matrix::vector::Vector;
use crate::traits::Scalar;
use crate::Matrix;

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        out += rhs;
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..R {
            for j in 0..C {
                self.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        out += rhs;
        out
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.data[i] = self.data[i] + rhs.data[i];
        }
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        out -= rhs;
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..R {
            for j in 0..C {
                self.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        out -= rhs;
        out
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.data[i] = self.data[i] - rhs.data[i];
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::zeros() - self
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::zeros() - self
    }
}

// ── Matrix multiplication: (R×K) * (K×C) → (R×C) ──────────────────

impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Matrix<T, R, C> {
        let mut out = Matrix::<T, R, C>::zeros();
        for i in 0..R {
            for j in 0..C {
                let mut sum = T::zero();
                for k in 0..K {
                    sum = sum + self.data[i][k] * rhs.data[k][j];
                }
                out.data[i][j] = sum;
            }
        }
        out
    }
}

// ── Matrix-vector product: (R×C) * vec(C) → vec(R) ─────────────────

impl<T: Scalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Vector<T, R> {
        self.vecmul(&rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Matrix-vector product: `A * v`.
    ///
    /// ```
    /// use linal::{Matrix, Vector};
    /// let a = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// let v = Vector::from_array([7.0, 8.0, 9.0]);
    /// assert_eq!(a.vecmul(&v), Vector::from_array([50.0, 122.0]));
    /// ```
    pub fn vecmul(&self, v: &Vector<T, C>) -> Vector<T, R> {
        let mut out = Vector::<T, R>::zeros();
        for i in 0..R {
            let mut sum = T::zero();
            for j in 0..C {
                sum = sum + self.data[i][j] * v[j];
            }
            out[i] = sum;
        }
        out
    }
}

// ── Scalar multiplication: container * scalar ───────────────────────

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let mut out = self;
        out *= rhs;
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: T) {
        for row in self.data.iter_mut() {
            for x in row.iter_mut() {
                *x = *x * rhs;
            }
        }
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let mut out = self;
        out *= rhs;
        out
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x * rhs;
        }
    }
}

// ── Named scalar operations ─────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Multiply every element by `k`.
    #[inline]
    pub fn scale(&self, k: T) -> Self {
        *self * k
    }

    /// Divide every element by `k`.
    ///
    /// Fails with [`LinalgError::DivisionByZero`] when `k` is zero.
    ///
    /// ```
    /// use linal::{LinalgError, Matrix};
    /// let m = Matrix::new([[2.0, 4.0], [6.0, 8.0]]);
    /// assert_eq!(m.div_scalar(2.0).unwrap(), Matrix::new([[1.0, 2.0], [3.0, 4.0]]));
    /// assert_eq!(m.div_scalar(0.0).unwrap_err(), LinalgError::DivisionByZero);
    /// ```
    pub fn div_scalar(&self, k: T) -> Result<Self> {
        if k == T::zero() {
            return Err(LinalgError::DivisionByZero);
        }
        let mut out = *self;
        for row in out.data.iter_mut() {
            for x in row.iter_mut() {
                *x = *x / k;
            }
        }
        Ok(out)
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Multiply every element by `k`.
    #[inline]
    pub fn scale(&self, k: T) -> Self {
        *self * k
    }

    /// Divide every element by `k`.
    ///
    /// Fails with [`LinalgError::DivisionByZero`] when `k` is zero.
    pub fn div_scalar(&self, k: T) -> Result<Self> {
        if k == T::zero() {
            return Err(LinalgError::DivisionByZero);
        }
        Ok(Self::from_array(self.data.map(|x| x / k)))
    }
}

// ── Transpose ───────────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Transpose: (R×C) → (C×R).
    pub fn transpose(&self) -> Matrix<T, C, R> {
        let mut out = Matrix::<T, C, R>::zeros();
        for i in 0..R {
            for j in 0..C {
                out.data[j][i] = self.data[i][j];
            }
        }
        out
    }
}

// ── Reference variants ──────────────────────────────────────────────
// Both containers are Copy, so &-ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Ty:ident<$($N:ident),+>, $Op:ident, $method:ident) => {
        impl<T: Scalar, $(const $N: usize),+> $Op<$Ty<T, $($N),+>> for &$Ty<T, $($N),+> {
            type Output = $Ty<T, $($N),+>;
            fn $method(self, rhs: $Ty<T, $($N),+>) -> $Ty<T, $($N),+> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, $(const $N: usize),+> $Op<&$Ty<T, $($N),+>> for $Ty<T, $($N),+> {
            type Output = $Ty<T, $($N),+>;
            fn $method(self, rhs: &$Ty<T, $($N),+>) -> $Ty<T, $($N),+> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, $(const $N: usize),+> $Op<&$Ty<T, $($N),+>> for &$Ty<T, $($N),+> {
            type Output = $Ty<T, $($N),+>;
            fn $method(self, rhs: &$Ty<T, $($N),+>) -> $Ty<T, $($N),+> {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Matrix<R, C>, Add, add);
forward_ref_binop!(Matrix<R, C>, Sub, sub);
forward_ref_binop!(Vector<N>, Add, add);
forward_ref_binop!(Vector<N>, Sub, sub);

macro_rules! forward_ref_unop_scalar {
    ($Ty:ident<$($N:ident),+>) => {
        impl<T: Scalar, $(const $N: usize),+> Neg for &$Ty<T, $($N),+> {
            type Output = $Ty<T, $($N),+>;
            fn neg(self) -> $Ty<T, $($N),+> {
                (*self).neg()
            }
        }

        impl<T: Scalar, $(const $N: usize),+> Mul<T> for &$Ty<T, $($N),+> {
            type Output = $Ty<T, $($N),+>;
            fn mul(self, rhs: T) -> $Ty<T, $($N),+> {
                (*self).mul(rhs)
            }
        }

        impl<T: Scalar, $(const $N: usize),+> AddAssign<&$Ty<T, $($N),+>> for $Ty<T, $($N),+> {
            fn add_assign(&mut self, rhs: &$Ty<T, $($N),+>) {
                self.add_assign(*rhs);
            }
        }

        impl<T: Scalar, $(const $N: usize),+> SubAssign<&$Ty<T, $($N),+>> for $Ty<T, $($N),+> {
            fn sub_assign(&mut self, rhs: &$Ty<T, $($N),+>) {
                self.sub_assign(*rhs);
            }
        }
    };
}

forward_ref_unop_scalar!(Matrix<R, C>);
forward_ref_unop_scalar!(Vector<N>);

impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for &Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;
    fn mul(self, rhs: Matrix<T, K, C>) -> Matrix<T, R, C> {
        (*self).mul(rhs)
    }
}

impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<&Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;
    fn mul(self, rhs: &Matrix<T, K, C>) -> Matrix<T, R, C> {
        self.mul(*rhs)
    }
}

impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<&Matrix<T, K, C>>
    for &Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;
    fn mul(self, rhs: &Matrix<T, K, C>) -> Matrix<T, R, C> {
        (*self).mul(*rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<&Vector<T, C>> for &Matrix<T, R, C> {
    type Output = Vector<T, R>;
    fn mul(self, rhs: &Vector<T, C>) -> Vector<T, R> {
        self.vecmul(rhs)
    }
}

// ── scalar * container (concrete impls to avoid orphan rules) ───────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    rhs * self
                }
            }

            impl<const R: usize, const C: usize> Mul<&Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: &Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    *rhs * self
                }
            }

            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs * self
                }
            }

            impl<const N: usize> Mul<&Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn mul(self, rhs: &Vector<$t, N>) -> Vector<$t, N> {
                    *rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);

        let c = a + b;
        assert_eq!(c[(0, 0)], 6.0);
        assert_eq!(c[(1, 1)], 12.0);

        let d = b - a;
        assert_eq!(d[(0, 0)], 4.0);
        assert_eq!(d[(1, 1)], 4.0);
    }

    #[test]
    fn add_assign_sub_assign() {
        let mut a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);

        a += b;
        assert_eq!(a[(0, 0)], 6.0);

        a -= b;
        assert_eq!(a[(0, 0)], 1.0);
    }

    #[test]
    fn negation() {
        let a = Matrix::new([[1.0, -2.0], [3.0, -4.0]]);
        let b = -a;
        assert_eq!(b[(0, 0)], -1.0);
        assert_eq!(b[(0, 1)], 2.0);
        assert_eq!(-&a, b);
    }

    #[test]
    fn matrix_multiply() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);

        let c = a * b;
        assert_eq!(c[(0, 0)], 19.0); // 1*5 + 2*7
        assert_eq!(c[(0, 1)], 22.0); // 1*6 + 2*8
        assert_eq!(c[(1, 0)], 43.0); // 3*5 + 4*7
        assert_eq!(c[(1, 1)], 50.0); // 3*6 + 4*8
    }

    #[test]
    fn matrix_multiply_non_square() {
        // (2×3) * (3×2) → (2×2)
        let a = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::new([[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);

        let c = a * b;
        assert_eq!(c.nrows(), 2);
        assert_eq!(c.ncols(), 2);
        assert_eq!(c[(0, 0)], 58.0);
        assert_eq!(c[(0, 1)], 64.0);
    }

    #[test]
    fn matrix_times_vector() {
        let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let v = Vector::from_array([7.0, 8.0, 9.0]);

        let result = m * v;
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], 50.0);
        assert_eq!(result[1], 122.0);
        assert_eq!(&m * &v, result);
    }

    #[test]
    fn vecmul_identity() {
        let id: Matrix<f64, 3, 3> = Matrix::eye();
        let v = Vector::from_array([1.0, 2.0, 3.0]);
        assert_eq!(id.vecmul(&v), v);
    }

    #[test]
    fn scalar_multiply() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);

        let b = a * 3.0;
        assert_eq!(b[(0, 0)], 3.0);
        assert_eq!(b[(1, 1)], 12.0);

        assert_eq!(3.0 * a, b);
        assert_eq!(a.scale(3.0), b);
        assert_eq!(&a * 3.0, b);
        assert_eq!(3.0 * &a, b);
    }

    #[test]
    fn mul_assign_scalar() {
        let mut a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        a *= 2.0;
        assert_eq!(a[(0, 0)], 2.0);
        assert_eq!(a[(1, 1)], 8.0);
    }

    #[test]
    fn div_scalar_checks_zero() {
        let a = Matrix::new([[2, 4], [6, 8]]);
        assert_eq!(a.div_scalar(2).unwrap(), Matrix::new([[1, 2], [3, 4]]));
        assert_eq!(a.div_scalar(0), Err(LinalgError::DivisionByZero));

        let v = Vector::from_array([1.0, 2.0]);
        assert_eq!(v.div_scalar(0.5).unwrap(), Vector::from_array([2.0, 4.0]));
        assert_eq!(v.div_scalar(0.0), Err(LinalgError::DivisionByZero));
    }

    #[test]
    fn transpose() {
        let a = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let t = a.transpose();

        assert_eq!(t.nrows(), 3);
        assert_eq!(t.ncols(), 2);
        assert_eq!(t[(0, 0)], 1.0);
        assert_eq!(t[(1, 0)], 2.0);
        assert_eq!(t[(2, 1)], 6.0);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn ref_add_sub() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);

        assert_eq!(&a + b, a + b);
        assert_eq!(a + &b, a + b);
        assert_eq!(&a + &b, a + b);

        assert_eq!(&b - a, b - a);
        assert_eq!(b - &a, b - a);
        assert_eq!(&b - &a, b - a);
    }

    #[test]
    fn ref_matrix_multiply() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);
        let expected = a * b;

        assert_eq!(&a * b, expected);
        assert_eq!(a * &b, expected);
        assert_eq!(&a * &b, expected);
    }

    #[test]
    fn ref_assign_ops() {
        let mut a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);

        a += &b;
        assert_eq!(a[(0, 0)], 6.0);

        a -= &b;
        assert_eq!(a[(0, 0)], 1.0);
    }

    #[test]
    fn identity_multiply() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let id: Matrix<f64, 2, 2> = Matrix::eye();
        assert_eq!(a * id, a);
        assert_eq!(id * a, a);
    }

    #[test]
    fn vector_arithmetic() {
        let a = Vector::from_array([1.0, 2.0, 3.0]);
        let b = Vector::from_array([4.0, 5.0, 6.0]);

        let c = a + b;
        assert_eq!(c, Vector::from_array([5.0, 7.0, 9.0]));
        assert_eq!(c - b, a);
        assert_eq!(&a + &b, c);
        assert_eq!(a * 2.0, Vector::from_array([2.0, 4.0, 6.0]));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Vector::from_array([-1.0, -2.0, -3.0]));

        let mut d = a;
        d += b;
        d -= &b;
        d *= 3.0;
        assert_eq!(d, a.scale(3.0));
    }

    #[test]
    fn vector_add_commutes_integer() {
        let u = Vector::from_array([1, -4, 9]);
        let v = Vector::from_array([7, 2, -3]);
        assert_eq!(u + v, v + u);
        assert_eq!((u + v) - v, u);
    }
}
