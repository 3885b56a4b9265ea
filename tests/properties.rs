//! Property tests for the algebraic identities the containers and
//! algorithms must satisfy.

use linal::autodiff::{derivative, finite_diff};
use linal::{DualNumber, LinalgError, Matrix, Vector};
use proptest::prelude::*;

fn vec3() -> impl Strategy<Value = Vector<f64, 3>> {
    prop::array::uniform3(-100.0_f64..100.0).prop_map(Vector::from_array)
}

fn int_matrix4() -> impl Strategy<Value = Matrix<i64, 4, 4>> {
    prop::array::uniform4(prop::array::uniform4(-20_i64..20)).prop_map(Matrix::new)
}

/// Strictly diagonally dominant, hence nonsingular and well conditioned.
fn dominant_matrix3() -> impl Strategy<Value = Matrix<f64, 3, 3>> {
    prop::array::uniform3(prop::array::uniform3(-1.0_f64..1.0)).prop_map(|rows| {
        let m = Matrix::new(rows);
        m + Matrix::<f64, 3, 3>::eye() * 5.0
    })
}

proptest! {
    #[test]
    fn vector_addition_commutes(u in vec3(), v in vec3()) {
        prop_assert_eq!(u + v, v + u);
    }

    #[test]
    fn vector_subtraction_undoes_addition(u in vec3(), v in vec3()) {
        let back = (u + v) - v;
        prop_assert!((back - u).norm() < 1e-10);
    }

    #[test]
    fn dot_is_symmetric(u in vec3(), v in vec3()) {
        prop_assert_eq!(u.dot(&v), v.dot(&u));
    }

    #[test]
    fn cross_is_orthogonal(u in vec3(), v in vec3()) {
        let w = u.cross(&v);
        let scale = 1.0 + u.norm() * v.norm();
        prop_assert!(w.dot(&u).abs() / scale < 1e-8);
        prop_assert!(w.dot(&v).abs() / scale < 1e-8);
    }

    #[test]
    fn determinant_of_transpose(m in int_matrix4()) {
        prop_assert_eq!(m.transpose().determinant(), m.determinant());
    }

    #[test]
    fn determinant_is_multiplicative(a in int_matrix4(), b in int_matrix4()) {
        prop_assert_eq!((a * b).determinant(), a.determinant() * b.determinant());
    }

    #[test]
    fn adjugate_gives_scaled_identity(m in int_matrix4()) {
        let det = m.determinant();
        prop_assert_eq!(m * m.adjugate(), Matrix::<i64, 4, 4>::eye() * det);
    }

    #[test]
    fn inverse_round_trip(m in dominant_matrix3()) {
        let inv = m.inverse().unwrap();
        prop_assert!((inv * m - Matrix::eye()).frobenius_norm() < 1e-10);
        prop_assert!((m * inv - Matrix::eye()).frobenius_norm() < 1e-10);
    }

    #[test]
    fn solve_round_trip(m in dominant_matrix3(), b in vec3()) {
        let x = m.solve(&b).unwrap();
        prop_assert!((m * x - b).norm() < 1e-9 * (1.0 + b.norm()));
    }

    #[test]
    fn solve_matches_inverse(m in dominant_matrix3(), b in vec3()) {
        let x = m.solve(&b).unwrap();
        let y = m.inverse().unwrap() * b;
        prop_assert!((x - y).norm() < 1e-9 * (1.0 + b.norm()));
    }

    #[test]
    fn duplicate_rows_are_singular(
        r0 in prop::array::uniform3(-9_i32..9),
        r1 in prop::array::uniform3(-9_i32..9),
        b in vec3(),
    ) {
        let rows = [r0, r1, r0].map(|r| r.map(f64::from));
        let m = Matrix::new(rows);
        prop_assert_eq!(m.inverse().unwrap_err(), LinalgError::SingularMatrix);
        prop_assert_eq!(m.solve(&b).unwrap_err(), LinalgError::SingularSystem);
    }

    #[test]
    fn chain_rule_sin_of_square(x in -3.0_f64..3.0) {
        let (y, dy) = derivative(|x| (x * x).sin(), x);
        prop_assert!((y - (x * x).sin()).abs() < 1e-12);
        prop_assert!((dy - 2.0 * x * (x * x).cos()).abs() < 1e-12);
    }

    #[test]
    fn duals_agree_with_finite_differences(x in 0.1_f64..5.0) {
        let f = |x: DualNumber<f64>| x.ln() * x.sqrt() + (x * 0.5).cos();
        let (_, exact) = derivative(f, x);
        let approx = finite_diff::forward_difference(|x| f(DualNumber::constant(x)).value, x);
        prop_assert!((exact - approx).abs() < 1e-5);
    }

    #[test]
    fn dual_sum_counts_variables(xs in prop::collection::vec(-10.0_f64..10.0, 0..20)) {
        let n = xs.len() as f64;
        let s: DualNumber<f64> = xs.iter().map(|&x| DualNumber::variable(x)).sum();
        prop_assert_eq!(s.derivative, n);
    }
}
