//! Exploratory tests which use randomized test cases

use fastrand::Rng;
use laguerre_poly::{
    __testing::{
        check_reconstruction, check_roots, test_case_roots, RandStreamC64Cartesian, RandStreamR64,
    },
    roots::{laguerre_deflate, LaguerreVariant, SolverOptions},
    Poly64,
};

fn classic() -> SolverOptions<f64> {
    SolverOptions::default().with_variant(LaguerreVariant::Classic)
}

#[test]
fn test_uniform_real_roots() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
    let case = |deg, seed| {
        let mut seed_stream = Rng::with_seed(seed);
        let mut roots_stream = RandStreamR64::new(seed_stream.u64(..), -10.0, 10.0);
        let mut scale_stream = RandStreamR64::new(seed_stream.u64(..), 0.1, 10.0);
        let mut rng = Rng::with_seed(seed_stream.u64(..));
        for i in 0..100 {
            let (poly, expected_roots) = test_case_roots(&mut roots_stream, &mut scale_stream, deg);
            let roots = poly.roots_with(&mut rng, &classic()).unwrap();
            assert!(
                check_roots(roots.clone(), expected_roots.clone(), 1E-4),
                "{roots:?} != {expected_roots:?} @ iter = {i}"
            );
            assert!(
                check_reconstruction(&poly, &roots, 1E-6),
                "{poly} from {roots:?} @ iter = {i}"
            );
        }
    };

    case(2, 1);
    case(3, 2);
    case(4, 3);
    case(5, 4);
    case(6, 5);
}

#[test]
fn test_uniform_complex_roots() {
    let case = |deg, seed| {
        let mut seed_stream = Rng::with_seed(seed);
        let mut roots_stream =
            RandStreamC64Cartesian::new(seed_stream.u64(..), -2.0, 2.0, -2.0, 2.0);
        let mut scale_stream = RandStreamC64Cartesian::new(seed_stream.u64(..), 0.1, 10.0, -1.0, 1.0);
        let mut rng = Rng::with_seed(seed_stream.u64(..));
        for i in 0..100 {
            let (poly, expected_roots) = test_case_roots(&mut roots_stream, &mut scale_stream, deg);
            let roots = poly.roots_with(&mut rng, &classic()).unwrap();
            assert!(
                check_roots(roots.clone(), expected_roots.clone(), 1E-4),
                "{roots:?} != {expected_roots:?} @ iter = {i}"
            );
            assert!(
                check_reconstruction(&poly, &roots, 1E-6),
                "{poly} from {roots:?} @ iter = {i}"
            );
        }
    };

    case(3, 6);
    case(4, 7);
    case(6, 8);
}

/// However badly the default solver does, it never loses track of the degree
#[test]
fn one_root_per_degree() {
    let mut rng = Rng::with_seed(12);
    let mut coeff_stream = RandStreamR64::new(13, -5.0, 5.0);
    let options = SolverOptions::default().with_max_iter(500);
    for deg in 1..=8 {
        for _ in 0..10 {
            let mut coeffs: Vec<f64> = (&mut coeff_stream).take(deg + 1).map(|z| z.re).collect();
            // keep the leading coefficient away from zero
            coeffs[deg] += 5.0_f64.copysign(coeffs[deg]);
            let poly = Poly64::from_real_slice(&coeffs);
            let roots = laguerre_deflate(&poly, &mut rng, &options).unwrap();
            assert_eq!(roots.len(), deg);
        }
    }
}
