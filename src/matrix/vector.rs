use core::ops::{Index, IndexMut};

use crate::error::{LinalgError, Result};
use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

/// Fixed-length vector of `N` elements.
///
/// Vectors support single-index access (`v[i]`), checked access
/// (`get`/`set`), dot products, norms, and cross products (3-element
/// vectors only). `Matrix * Vector` yields a vector of the matrix row count.
///
/// # Examples
///
/// ```
/// use linal::Vector;
///
/// let v = Vector::from_array([3.0_f64, 4.0]);
/// assert_eq!(v[0], 3.0);
/// assert_eq!(v.dot(&v), 25.0);
/// assert!((v.norm() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T, const N: usize> {
    pub(crate) data: [T; N],
}

impl<T, const N: usize> Vector<T, N> {
    /// Create a vector from a 1D array.
    ///
    /// ```
    /// use linal::Vector;
    /// let v = Vector::from_array([1.0, 2.0, 3.0]);
    /// assert_eq!(v[0], 1.0);
    /// ```
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the vector has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// View the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consume the vector, returning its array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Create a vector filled with a single value.
    #[inline]
    pub fn fill(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Build a vector from a slice of exactly `N` elements.
    ///
    /// ```
    /// use linal::{LinalgError, Vector};
    /// let v = Vector::<f64, 3>::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(v[2], 3.0);
    /// assert_eq!(
    ///     Vector::<f64, 3>::from_slice(&[1.0]).unwrap_err(),
    ///     LinalgError::DimensionMismatch { expected: 3, found: 1 },
    /// );
    /// ```
    pub fn from_slice(values: &[T]) -> Result<Self> {
        if values.len() != N {
            return Err(LinalgError::DimensionMismatch {
                expected: N,
                found: values.len(),
            });
        }
        Ok(Self {
            data: core::array::from_fn(|i| values[i]),
        })
    }

    /// Checked read of element `i`.
    pub fn get(&self, i: usize) -> Result<T> {
        self.data
            .get(i)
            .copied()
            .ok_or(LinalgError::OutOfRange { index: i, bound: N })
    }

    /// Checked write of element `i`.
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        let slot = self
            .data
            .get_mut(i)
            .ok_or(LinalgError::OutOfRange { index: i, bound: N })?;
        *slot = value;
        Ok(())
    }

    /// As a 1×N row matrix.
    pub fn to_row(&self) -> Matrix<T, 1, N> {
        Matrix::new([self.data])
    }

    /// As an N×1 column matrix.
    pub fn to_column(&self) -> Matrix<T, N, 1> {
        Matrix::new(self.data.map(|x| [x]))
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Create a zero vector.
    #[inline]
    pub fn zeros() -> Self {
        Self::fill(T::zero())
    }

    /// Dot product of two vectors.
    ///
    /// ```
    /// use linal::Vector;
    /// let a = Vector::from_array([1.0, 2.0, 3.0]);
    /// let b = Vector::from_array([4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0); // 1*4 + 2*5 + 3*6
    /// ```
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self.data[i] * rhs.data[i];
        }
        sum
    }

    /// Outer product: `v.outer(w)` → N×P matrix where `result[i][j] = v[i] * w[j]`.
    ///
    /// ```
    /// use linal::Vector;
    /// let a = Vector::from_array([1.0, 2.0]);
    /// let b = Vector::from_array([3.0, 4.0, 5.0]);
    /// let m = a.outer(&b);
    /// assert_eq!(m[(0, 0)], 3.0);  // 1*3
    /// assert_eq!(m[(1, 2)], 10.0); // 2*5
    /// ```
    pub fn outer<const P: usize>(&self, rhs: &Vector<T, P>) -> Matrix<T, N, P> {
        let mut out = Matrix::<T, N, P>::zeros();
        for i in 0..N {
            for j in 0..P {
                out[(i, j)] = self[i] * rhs[j];
            }
        }
        out
    }

    /// Squared L2 norm (dot product with self). No sqrt, works with integers.
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// L2 (Euclidean) norm.
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Alias for [`Vector::norm`].
    #[inline]
    pub fn magnitude(&self) -> T {
        self.norm()
    }

    /// L1 norm (sum of absolute values).
    pub fn norm_l1(&self) -> T {
        self.iter().fold(T::zero(), |acc, x| acc + x.abs())
    }

    /// Return a unit vector in the same direction.
    ///
    /// The zero vector has no direction and is returned unchanged.
    ///
    /// ```
    /// use linal::Vector;
    /// let z = Vector::<f64, 3>::zeros();
    /// assert_eq!(z.normalize(), z);
    /// ```
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        if n == T::zero() {
            return *self;
        }
        *self * (T::one() / n)
    }
}

/// A 2-element vector.
pub type Vector2<T> = Vector<T, 2>;
/// A 3-element vector.
///
/// Adds `cross()` for cross product in addition to all `Vector` methods.
pub type Vector3<T> = Vector<T, 3>;
/// A 4-element vector.
pub type Vector4<T> = Vector<T, 4>;

impl<T: Scalar> Vector3<T> {
    /// Cross product of two 3-vectors.
    ///
    /// Only defined for length 3; calling it on any other length does not
    /// compile.
    ///
    /// ```
    /// use linal::Vector3;
    /// let x = Vector3::from_array([1.0, 0.0, 0.0]);
    /// let y = Vector3::from_array([0.0, 1.0, 0.0]);
    /// let z = x.cross(&y);
    /// assert_eq!(z[2], 1.0); // x × y = z
    /// ```
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::from_array([
            self[1] * rhs[2] - self[2] * rhs[1],
            self[2] * rhs[0] - self[0] * rhs[2],
            self[0] * rhs[1] - self[1] * rhs[0],
        ])
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
