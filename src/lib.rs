//! Find all complex roots of a univariate polynomial.
//!
//! The root finder repeatedly extracts one root with a Laguerre-style
//! iteration, polishes it against the original polynomial and deflates the
//! working copy with Horner's scheme, until only a linear factor remains.
//!
//! ```
//! use laguerre_poly::{poly, Poly64};
//!
//! // x^3 - 8x^2 - 13x + 140
//! let p: Poly64 = poly![140.0, -13.0, -8.0, 1.0];
//! let roots = p.roots_with_seed(42).unwrap();
//! assert_eq!(roots.len(), 3);
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// A more convenient way to write `Complex::new(...)`.
///
/// # Examples
///
/// ```
/// use laguerre_poly::complex;
/// use num::Complex;
///
/// let c1: Complex<f32> = complex!();
/// let c2 = Complex::new(0.0, 0.0);
/// let c3 = complex!(1.0f32, 2.0);
/// let c4 = Complex::new(1.0, 2.0);
///
/// assert_eq!(c1, c2);
/// assert_eq!(c3, c4);
/// assert_eq!(complex!(4.20), complex!(4.20, 0.0));
/// ```
#[macro_export]
macro_rules! complex {
    () => {{
        <$crate::num::Complex<_> as $crate::num::Zero>::zero()
    }};
    ($re:expr) => {{
        $crate::num::Complex::from($re)
    }};
    ($re:expr, $im: expr) => {{
        $crate::num::Complex::new($re, $im)
    }};
}

/// A more convenient way of writing `Poly::new(&[Complex::new(...)...])`
///
/// Coefficients are listed from the constant term upwards.
///
/// # Examples
///
/// ```
/// use laguerre_poly::{Poly, poly};
/// use num::{Complex, One};
///
/// assert_eq!(poly![1.0, 2.0, 3.0], Poly::new(&[Complex::one(), Complex::new(2.0, 0.0), Complex::new(3.0, 0.0)]));
/// assert_eq!(poly![(1.0, 2.0)], Poly::new(&[Complex::new(1.0, 2.0)]));
/// assert_eq!(poly![], Poly::<f64>::zero());
/// ```
#[macro_export]
macro_rules! poly {
    () => {{
        $crate::Poly::zero()
    }};
    ($(($re:expr, $im:expr)),+ $(,)?) => {{
        $crate::Poly::from_complex_vec(vec![$($crate::complex!($re, $im)),*])
    }};
    ($($re:expr),+ $(,)?) => {{
        $crate::Poly::from_real_slice(&[$($re),*])
    }};
}

pub use num;

mod error;
pub use error::{Error, Result};

mod scalar;
pub use scalar::RealScalar;

mod poly;
pub use poly::{roots, Poly};

pub(crate) mod util;

pub use util::complex::compare_norm;

// re-exported so integration tests and benches can reach it
#[doc(hidden)]
pub use util::__testing;

pub type Poly32 = Poly<f32>;
pub type Poly64 = Poly<f64>;
