use num::Complex;

use crate::{util::doc_macros::panic_t_from_f64, RealScalar};

/// Starting point with real and imaginary parts drawn uniformly from `[0, 1)`.
///
/// The generator is passed in explicitly, so seeding it makes the whole root
/// finding run reproducible.
///
/// # Panics
#[doc = panic_t_from_f64!()]
pub fn initial_guess_unit_square<T: RealScalar>(rng: &mut fastrand::Rng) -> Complex<T> {
    let re = below_one(rng.f64());
    let im = below_one(rng.f64());
    Complex::new(re, im)
}

/// Narrowing a sample from `[0, 1)` can round it up to exactly one.
fn below_one<T: RealScalar>(x: f64) -> T {
    let x = T::from_f64(x).expect("overflow");
    if x < T::one() {
        x
    } else {
        T::one() - T::epsilon()
    }
}
