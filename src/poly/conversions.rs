use num::Complex;

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    #[must_use]
    pub fn as_slice(&self) -> &[Complex<T>] {
        self.0.as_slice()
    }

    /// Iterate over coefficients, from the least significant
    pub fn iter(&self) -> std::slice::Iter<'_, Complex<T>> {
        self.0.iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Complex<T>> {
        self.0.clone()
    }

    /// The same as `Poly::new()`
    #[must_use]
    pub fn from_complex_slice(value: &[Complex<T>]) -> Self {
        Self::new(value)
    }

    #[must_use]
    pub fn from_complex_vec(value: Vec<Complex<T>>) -> Self {
        if value.is_empty() {
            return Self::zero();
        }
        Self(value)
    }

    #[must_use]
    pub fn from_real_slice(value: &[T]) -> Self {
        Self::from_real_iterator(value.iter().copied())
    }

    #[must_use]
    pub fn from_real_iterator(coeffs: impl Iterator<Item = T>) -> Self {
        Self::from_complex_vec(coeffs.map(Complex::from).collect())
    }

    /// Real coefficients listed from the highest power of `x` down to the
    /// constant term, the way equations are usually written.
    ///
    /// ```
    /// use laguerre_poly::poly;
    /// use laguerre_poly::Poly;
    ///
    /// // x^3 - 8x^2 - 13x + 140
    /// let p = Poly::from_descending_reals(&[1.0, -8.0, -13.0, 140.0]);
    /// assert_eq!(p, poly![140.0, -13.0, -8.0, 1.0]);
    /// ```
    #[must_use]
    pub fn from_descending_reals(value: &[T]) -> Self {
        Self::from_real_iterator(value.iter().rev().copied())
    }
}

impl<T: RealScalar> From<&[Complex<T>]> for Poly<T> {
    fn from(value: &[Complex<T>]) -> Self {
        Self::from_complex_slice(value)
    }
}

impl<T: RealScalar> From<Vec<Complex<T>>> for Poly<T> {
    fn from(value: Vec<Complex<T>>) -> Self {
        Self::from_complex_vec(value)
    }
}

impl<T: RealScalar> From<Poly<T>> for Vec<Complex<T>> {
    fn from(val: Poly<T>) -> Self {
        val.0
    }
}

impl<'a, T: RealScalar> IntoIterator for &'a Poly<T> {
    type IntoIter = std::slice::Iter<'a, Complex<T>>;
    type Item = &'a Complex<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
