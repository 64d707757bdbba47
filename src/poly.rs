use std::fmt::Display;

use num::{Complex, One, Zero};

use crate::{
    util::complex::{complex_fmt, complex_sort_mut},
    RealScalar,
};

mod base;
mod calculus;
mod conversions;
mod impl_num;
pub mod roots;

/// A univariate polynomial with complex coefficients, stored from the
/// constant term upwards (index `i` holds the coefficient of `x^i`).
///
/// There is always at least one coefficient. Unlike most polynomial types,
/// coefficients are kept exactly as given: a zero leading coefficient is not
/// trimmed, so that the nominal degree of the input is preserved.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly<T: RealScalar>(pub(crate) Vec<Complex<T>>);

impl<T: RealScalar> Poly<T> {
    /// Create a polynomial from complex coefficients, lowest degree first.
    ///
    /// An empty slice yields the zero polynomial.
    ///
    /// ```
    /// use laguerre_poly::Poly;
    /// use num::Complex;
    ///
    /// let p = Poly::new(&[Complex::new(1.0, 0.0), Complex::new(0.0, 2.0)]);
    /// assert_eq!(p.degree(), 1);
    /// assert_eq!(Poly::<f64>::new(&[]), Poly::zero());
    /// ```
    #[must_use]
    pub fn new(coeffs: &[Complex<T>]) -> Self {
        if coeffs.is_empty() {
            return Self::zero();
        }
        Self(coeffs.to_owned())
    }

    #[must_use]
    pub fn zero() -> Self {
        Self(vec![Complex::zero()])
    }

    #[must_use]
    pub fn one() -> Self {
        Self(vec![Complex::one()])
    }

    /// The constant zero, regardless of how many (zero) coefficients are stored.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(Zero::is_zero)
    }

    /// Polynomial with the given leading coefficient and complex roots.
    ///
    /// # Examples
    /// ```
    /// use laguerre_poly::{complex, poly, Poly};
    ///
    /// let p = Poly::from_roots(&[complex!(7.0), complex!(5.0), complex!(-4.0)], complex!(1.0));
    /// assert_eq!(p, poly![140.0, -13.0, -8.0, 1.0]);
    /// ```
    #[must_use]
    pub fn from_roots(roots: &[Complex<T>], leading: Complex<T>) -> Self {
        let mut roots = roots.to_owned();
        complex_sort_mut(roots.as_mut_slice());

        roots
            .into_iter()
            .map(|z| Self(vec![-z, Complex::one()]))
            .fold(Self(vec![leading]), |acc, x| acc * x)
    }

    /// Coefficient-wise comparison with a relative tolerance. Coefficients
    /// smaller than one in magnitude are compared absolutely.
    ///
    /// Polynomials of different lengths are never almost equal.
    ///
    /// ```
    /// use laguerre_poly::poly;
    ///
    /// assert!(poly![1.0, 1000.0].almost_eq(&poly![1.0 + 1E-9, 1000.0 + 1E-5], 1E-7));
    /// assert!(!poly![1.0, 2.0].almost_eq(&poly![1.0, 2.1], 1E-7));
    /// ```
    #[must_use]
    pub fn almost_eq(&self, other: &Self, tolerance: T) -> bool {
        if self.len_raw() != other.len_raw() {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| (a - b).norm() <= tolerance * b.norm().max(T::one()))
    }
}

/// Prints the polynomial as an equation in decreasing powers of `x`, the way
/// coefficients are entered on the command line. Unit coefficients are
/// omitted.
///
/// ```
/// use laguerre_poly::poly;
///
/// assert_eq!(poly![140.0, -13.0, -8.0, 1.0].to_string(), "x^3 + -8x^2 + -13x + 140");
/// ```
impl<T: RealScalar> Display for Poly<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (power, c) in self.iter().enumerate().skip(1).rev() {
            if !c.is_one() {
                write!(f, "{}", complex_fmt(c))?;
            }
            write!(f, "x")?;
            if power > 1 {
                write!(f, "^{power}")?;
            }
            write!(f, " + ")?;
        }
        write!(f, "{}", complex_fmt(&self.0[0]))
    }
}
