use num::{Complex, Zero};

use crate::{util::complex::c_is_finite, Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// The number of stored coefficients
    pub(crate) fn len_raw(&self) -> usize {
        self.0.len()
    }

    /// Nominal degree, i.e. the number of coefficients minus one.
    ///
    /// A zero leading coefficient still counts towards the degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.len_raw() - 1
    }

    /// The leading (highest degree) coefficient
    pub(crate) fn last(&self) -> Complex<T> {
        self.0[self.len_raw() - 1]
    }

    #[must_use]
    pub fn leading_coefficient_is_zero(&self) -> bool {
        self.last().is_zero()
    }

    /// Check that the polynomial does not contain `NaN` or infinite values.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.0.iter().all(c_is_finite)
    }

    /// Scale a polynomial in-place
    pub fn scale(&mut self, factor: Complex<T>) {
        self.0.iter_mut().for_each(|z| *z *= factor);
    }

    /// Moving version of `scale`
    #[must_use]
    pub fn scaled(mut self, factor: Complex<T>) -> Self {
        self.scale(factor);
        self
    }

    /// Synthetic division by `(x - c)` using Horner's scheme.
    ///
    /// Returns the quotient `q` and the remainder `p(c)`, such that
    /// `p(x) = q(x) * (x - c) + p(c)`. Both come out of the same backward
    /// pass over the coefficients.
    ///
    /// A constant has nothing to divide out, it returns a zero placeholder
    /// quotient and itself as the remainder.
    ///
    /// # Examples
    /// ```
    /// use laguerre_poly::{complex, poly};
    ///
    /// // x^2 - 3x + 2 = (x - 1)(x - 2)
    /// let (q, r) = poly![2.0, -3.0, 1.0].deflate(complex!(1.0));
    /// assert_eq!(q, poly![-2.0, 1.0]);
    /// assert_eq!(r, complex!(0.0));
    /// ```
    #[must_use]
    pub fn deflate(&self, c: Complex<T>) -> (Self, Complex<T>) {
        let n = self.len_raw();
        if n == 1 {
            return (Self::zero(), self.0[0]);
        }

        let mut quotient = vec![Complex::<T>::zero(); n - 1];
        let mut acc = self.0[n - 1];
        quotient[n - 2] = acc;
        for i in (1..n - 1).rev() {
            acc = self.0[i] + acc * c;
            quotient[i - 1] = acc;
        }
        let remainder = acc * c + self.0[0];
        (Self(quotient), remainder)
    }

    /// Evaluate the polynomial at a single value of `x`.
    ///
    /// ```
    /// use laguerre_poly::Poly;
    /// use num::Complex;
    ///
    /// let p = Poly::new(&[Complex::new(1.0, 0.0), Complex::new(2.0, 0.0), Complex::new(3.0, 0.0)]);
    /// let x = Complex::new(1.0, 0.0);
    /// assert_eq!(p.eval(x), Complex::new(6.0, 0.0));
    /// ```
    #[must_use]
    pub fn eval(&self, x: Complex<T>) -> Complex<T> {
        self.deflate(x).1
    }
}
