//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::Itertools;
use num::complex::Complex64;

use crate::{Poly, Poly64};

/// Endless stream of real numbers, uniform in `[min, max)`, as complex numbers.
pub struct RandStreamR64 {
    state: Rng,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            state: Rng::with_seed(seed),
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = self.state.f64().mul_add(self.max - self.min, self.min);
        Some(Complex64::new(re, 0.0))
    }
}

/// Endless stream of complex numbers, uniform in a rectangle.
pub struct RandStreamC64Cartesian {
    state: Rng,
    min_re: f64,
    max_re: f64,
    min_im: f64,
    max_im: f64,
}

impl RandStreamC64Cartesian {
    #[must_use]
    pub fn new(seed: u64, min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> Self {
        assert!(
            min_re <= max_re && min_im <= max_im,
            "minimum should be smaller or equal to maximum"
        );
        Self {
            state: Rng::with_seed(seed),
            min_re,
            max_re,
            min_im,
            max_im,
        }
    }
}

impl Iterator for RandStreamC64Cartesian {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = self
            .state
            .f64()
            .mul_add(self.max_re - self.min_re, self.min_re);
        let im = self
            .state
            .f64()
            .mul_add(self.max_im - self.min_im, self.min_im);
        Some(Complex64::new(re, im))
    }
}

/// Generate one test case where the roots are known and can be compared.
///
/// The polynomial is scaled by the next value of `scale_stream`, so it is
/// generally not monic.
///
/// # Panics
/// If `scale_stream` runs dry.
pub fn test_case_roots(
    roots_stream: impl Iterator<Item = Complex64>,
    mut scale_stream: impl Iterator<Item = Complex64>,
    degree: usize,
) -> (Poly64, Vec<Complex64>) {
    let roots = roots_stream.take(degree).collect_vec();
    let scale = scale_stream
        .next()
        .expect("rng stream should be infinite");
    (Poly::from_roots(&roots, scale), roots)
}

/// Check that all roots have been found, pairing each found root with the
/// closest expected one that has not been claimed yet.
#[must_use]
pub fn check_roots(roots1: Vec<Complex64>, mut roots2: Vec<Complex64>, tol: f64) -> bool {
    if roots1.len() != roots2.len() {
        return false;
    }

    for r1 in roots1 {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, r2) in roots2.iter().enumerate() {
            let d = (r1 - r2).norm();
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol {
            return false;
        }
        roots2.remove(best_idx);
    }
    true
}

/// Multiply the roots back out, using the leading coefficient of `poly`,
/// and compare with `poly` coefficient by coefficient.
#[must_use]
pub fn check_reconstruction(poly: &Poly64, roots: &[Complex64], tol: f64) -> bool {
    let leading = *poly
        .as_slice()
        .last()
        .expect("polynomials always have at least one coefficient");
    Poly::from_roots(roots, leading).almost_eq(poly, tol)
}
