use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::matrix::vector::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Settings for [`Matrix::dominant_eigenpair`].
#[derive(Debug, Clone, Copy)]
pub struct PowerIteration<T> {
    /// Maximum number of multiply-normalize steps.
    pub max_iterations: usize,
    /// Stop once successive eigenvalue estimates differ by less than this.
    pub tolerance: T,
    /// Seed for the random starting vector.
    pub seed: u64,
}

impl Default for PowerIteration<f64> {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-6,
            seed: 0,
        }
    }
}

impl Default for PowerIteration<f32> {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-4,
            seed: 0,
        }
    }
}

/// Dominant eigenvalue estimate and its unit eigenvector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenPair<T, const N: usize> {
    /// Rayleigh quotient of the final iterate.
    pub value: T,
    /// Unit-norm eigenvector estimate.
    pub vector: Vector<T, N>,
    /// Steps actually taken.
    pub iterations: usize,
    /// Whether the tolerance was met before `max_iterations` ran out.
    pub converged: bool,
}

/// Starting vector with entries uniform in `[0, 1)`.
fn random_start<T: FloatScalar, R: Rng + ?Sized, const N: usize>(rng: &mut R) -> Vector<T, N> {
    Vector::from_fn(|_| T::from(rng.gen::<f64>()).unwrap_or_else(T::one))
}

fn iterate<T: FloatScalar, const N: usize>(
    a: &Matrix<T, N, N>,
    start: Vector<T, N>,
    max_iterations: usize,
    tolerance: T,
) -> EigenPair<T, N> {
    let mut v = start;
    let mut lambda = T::zero();

    for k in 0..max_iterations {
        v = a.vecmul(&v).normalize();
        let next = v.dot(&a.vecmul(&v));
        let delta = (next - lambda).abs();
        trace!("power iteration {}: lambda = {:?}, delta = {:?}", k, next, delta);
        lambda = next;

        if delta < tolerance {
            debug!("power iteration converged after {} steps: lambda = {:?}", k + 1, lambda);
            return EigenPair {
                value: lambda,
                vector: v,
                iterations: k + 1,
                converged: true,
            };
        }
    }

    debug!(
        "power iteration stopped at max_iterations = {} without converging: lambda = {:?}",
        max_iterations, lambda
    );
    EigenPair {
        value: lambda,
        vector: v,
        iterations: max_iterations,
        converged: false,
    }
}

/// Estimate the dominant eigenpair of `a` by power iteration.
///
/// Starts from a vector drawn uniformly from `[0, 1)` by a [`StdRng`] seeded
/// with `seed`, then repeats `v ← A·v / ‖A·v‖` and `λ ← v·(A·v)` until
/// `|λ - λ_prev| < tolerance` or `max_iterations` steps have run. The last
/// `(λ, v)` is returned either way.
///
/// Only recovers the eigenvalue of largest magnitude, and only when it is
/// unique and the starting vector has a component along its eigenvector.
/// With `max_iterations == 0` the result is `(0, start)`.
///
/// ```
/// use linal::Matrix;
/// use linal::linalg::power_iteration;
///
/// let a = Matrix::new([[4.0_f64, 1.0, 1.0], [1.0, 4.0, 1.0], [1.0, 1.0, 4.0]]);
/// let (lambda, v) = power_iteration(&a, 1000, 1e-10, 42);
/// assert!((lambda - 6.0).abs() < 1e-6);
/// assert!((v.norm() - 1.0).abs() < 1e-12);
/// ```
pub fn power_iteration<T: FloatScalar, const N: usize>(
    a: &Matrix<T, N, N>,
    max_iterations: usize,
    tolerance: T,
    seed: u64,
) -> (T, Vector<T, N>) {
    let mut rng = StdRng::seed_from_u64(seed);
    power_iteration_with_rng(a, max_iterations, tolerance, &mut rng)
}

/// Like [`power_iteration`], drawing the starting vector from `rng`.
pub fn power_iteration_with_rng<T: FloatScalar, R: Rng + ?Sized, const N: usize>(
    a: &Matrix<T, N, N>,
    max_iterations: usize,
    tolerance: T,
    rng: &mut R,
) -> (T, Vector<T, N>) {
    let pair = iterate(a, random_start(rng), max_iterations, tolerance);
    (pair.value, pair.vector)
}

impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// Dominant eigenpair by seeded power iteration.
    ///
    /// ```
    /// use linal::Matrix;
    /// use linal::linalg::PowerIteration;
    ///
    /// let a = Matrix::new([[2.0_f64, 0.0], [0.0, 0.5]]);
    /// let pair = a.dominant_eigenpair(&PowerIteration::default());
    /// assert!(pair.converged);
    /// assert!((pair.value - 2.0).abs() < 1e-5);
    /// ```
    pub fn dominant_eigenpair(&self, settings: &PowerIteration<T>) -> EigenPair<T, N> {
        let mut rng = StdRng::seed_from_u64(settings.seed);
        iterate(
            self,
            random_start(&mut rng),
            settings.max_iterations,
            settings.tolerance,
        )
    }
}
