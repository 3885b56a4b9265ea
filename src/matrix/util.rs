use core::fmt::{self, Write as _};

use crate::matrix::vector::Vector;
use crate::traits::Scalar;
use crate::Matrix;

// ── Constructors ────────────────────────────────────────────────────

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use linal::Matrix;
    /// let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| {
    ///     if i == j { 1.0 } else { 0.0 }
    /// });
    /// assert_eq!(m, Matrix::eye());
    /// ```
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self {
        Self {
            data: core::array::from_fn(|i| core::array::from_fn(|j| f(i, j))),
        }
    }

    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use linal::Matrix;
    /// let m = Matrix::new([[1.0_f64, 4.0], [9.0, 16.0]]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U, R, C>
    where
        T: Copy,
    {
        Matrix {
            data: self.data.map(|row| row.map(&f)),
        }
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            self.data.swap(a, b);
        }
    }
}

impl<T, const N: usize> Vector<T, N> {
    /// Create a vector by calling `f(i)` for each element.
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self::from_array(core::array::from_fn(f))
    }

    /// Apply a function to every element, producing a new vector.
    pub fn map<U>(&self, f: impl FnMut(T) -> U) -> Vector<U, N>
    where
        T: Copy,
    {
        Vector::from_array(self.data.map(f))
    }
}

// ── Folds ───────────────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Sum of all elements.
    ///
    /// ```
    /// use linal::Matrix;
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.sum(), 10.0);
    /// ```
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    /// Element-wise sum of any number of same-shaped matrices.
    ///
    /// An empty sequence sums to the zero matrix.
    pub fn sum_of<'a, I>(operands: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        operands.into_iter().fold(Self::zeros(), |acc, m| acc + m)
    }

    /// `Σ k_i · M_i` over `(coefficient, operand)` pairs.
    ///
    /// ```
    /// use linal::Matrix;
    /// let a = Matrix::new([[1, 0], [0, 1]]);
    /// let b = Matrix::new([[0, 1], [1, 0]]);
    /// let c = Matrix::linear_combination([(2, &a), (3, &b)]);
    /// assert_eq!(c, Matrix::new([[2, 3], [3, 2]]));
    /// ```
    pub fn linear_combination<'a, I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (T, &'a Self)>,
        T: 'a,
    {
        terms
            .into_iter()
            .fold(Self::zeros(), |acc, (k, m)| acc + *m * k)
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Sum of all elements.
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    /// Element-wise sum of any number of vectors.
    ///
    /// ```
    /// use linal::Vector;
    /// let vs = [
    ///     Vector::from_array([1, 2]),
    ///     Vector::from_array([3, 4]),
    ///     Vector::from_array([5, 6]),
    /// ];
    /// assert_eq!(Vector::sum_of(&vs), Vector::from_array([9, 12]));
    /// ```
    pub fn sum_of<'a, I>(operands: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        operands.into_iter().fold(Self::zeros(), |acc, v| acc + v)
    }

    /// `Σ k_i · v_i` over `(coefficient, operand)` pairs.
    pub fn linear_combination<'a, I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (T, &'a Self)>,
        T: 'a,
    {
        terms
            .into_iter()
            .fold(Self::zeros(), |acc, (k, v)| acc + *v * k)
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Max width per column for alignment
        let mut widths = [0usize; C];
        for row in self.as_rows() {
            for (j, x) in row.iter().enumerate() {
                let w = WriteCounting::count(|wc| write!(wc, "{}", x));
                widths[j] = widths[j].max(w);
            }
        }

        for (i, row) in self.as_rows().iter().enumerate() {
            write!(f, "│")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", x, width = widths[j])?;
            }
            write!(f, "│")?;
            if i + 1 < R {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

/// Helper to count characters written, without allocating.
struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.len();
        Ok(())
    }
}
