use laguerre_poly::{
    __testing::{check_reconstruction, check_roots},
    complex, poly,
    roots::{laguerre_deflate, Convergence, SolverOptions},
    Error, Poly, Poly64,
};
use num::Complex;

#[test]
fn linear_closed_form() {
    // 3x + 6
    let roots = poly![6.0, 3.0].roots_with_seed(0).unwrap();
    assert_eq!(roots, vec![complex!(-2.0, 0.0)]);
}

#[test]
fn known_cubic() {
    // x^3 - 8x^2 - 13x + 140
    let p = poly![140.0, -13.0, -8.0, 1.0];
    let roots = p.roots_with_seed(1).unwrap();
    assert!(
        check_roots(
            roots.clone(),
            vec![complex!(7.0), complex!(5.0), complex!(-4.0)],
            1E-6
        ),
        "{roots:?}"
    );
    assert!(check_reconstruction(&p, &roots, 1E-6));
}

#[test]
fn quadratic_conjugate_pair() {
    // x^2 + 4
    let roots = poly![4.0, 0.0, 1.0].roots_with_seed(2).unwrap();
    assert!(check_roots(
        roots,
        vec![complex!(0.0, 2.0), complex!(0.0, -2.0)],
        1E-6
    ));
}

/// Coefficients as typed on the command line, highest power first
#[test]
fn descending_input() {
    let p = Poly64::from_descending_reals(&[1.0, -8.0, -13.0, 140.0]);
    assert_eq!(p.to_string(), "x^3 + -8x^2 + -13x + 140");
    let roots = p.roots_with_seed(3).unwrap();
    assert!(check_roots(
        roots,
        vec![complex!(7.0), complex!(5.0), complex!(-4.0)],
        1E-6
    ));
}

/// Different seeds take different paths, but end up with the same roots
#[test]
fn same_roots_for_every_seed() {
    let p = poly![140.0, -13.0, -8.0, 1.0];
    let reference = p.roots_with_seed(0).unwrap();
    for seed in 1..20 {
        let roots = p.roots_with_seed(seed).unwrap();
        assert!(
            check_roots(roots.clone(), reference.clone(), 1E-6),
            "seed {seed}: {roots:?} != {reference:?}"
        );
    }
}

#[test]
fn reconstruction_of_fixed_polynomials() {
    let cases: Vec<Poly64> = vec![
        poly![-6.0, 11.0, -6.0, 1.0],
        poly![-1.0, 0.0, 0.0, 0.0, 0.0, 1.0],
        poly![2.0, -3.0, 4.0, 1.0],
        poly![1.0, 4.0, -3.0, 2.0],
        Poly::from_roots(
            &[complex!(1.0, 1.0), complex!(1.0, -1.0), complex!(-2.0)],
            complex!(-0.5),
        ),
    ];
    for (i, p) in cases.iter().enumerate() {
        let roots = p.roots_with_seed(10 + i as u64).unwrap();
        assert_eq!(roots.len(), p.degree());
        assert!(check_reconstruction(p, &roots, 1E-6), "@ {i}: {p} -> {roots:?}");
    }
}

#[test]
fn statuses_of_known_cubic() {
    let p = poly![140.0, -13.0, -8.0, 1.0];
    let mut rng = fastrand::Rng::with_seed(5);
    let roots = laguerre_deflate(&p, &mut rng, &SolverOptions::default()).unwrap();
    assert_eq!(roots.len(), 3);
    assert_eq!(roots[2].status, Convergence::ClosedForm);
    assert!(roots.iter().all(|r| r.status != Convergence::MaxIter));
}

#[test]
fn degenerate_inputs_are_rejected() {
    assert_eq!(
        Poly64::from_descending_reals(&[7.0]).roots().unwrap_err(),
        Error::DegreeTooLow { degree: 0 }
    );
    assert_eq!(
        Poly64::from_descending_reals(&[]).roots().unwrap_err(),
        Error::DegreeTooLow { degree: 0 }
    );
    assert_eq!(
        Poly64::from_descending_reals(&[0.0, 1.0, 2.0]).roots().unwrap_err(),
        Error::ZeroLeadingCoefficient
    );
    assert_eq!(
        Poly64::from_descending_reals(&[1.0, f64::INFINITY]).roots().unwrap_err(),
        Error::NonFiniteCoefficient { index: 0 }
    );
}

#[test]
fn single_precision() {
    let p = Poly::<f32>::from_real_slice(&[-2.0, 0.0, 1.0]);
    let mut rng = fastrand::Rng::with_seed(0);
    let options = SolverOptions::default().with_epsilon(1E-5);
    let roots: Vec<Complex<f32>> = p.roots_with(&mut rng, &options).unwrap();
    assert_eq!(roots.len(), 2);
    assert!(roots
        .iter()
        .all(|r| (r.norm() - std::f32::consts::SQRT_2).abs() < 1E-3));
}
