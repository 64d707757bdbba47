use num::Complex;

use crate::{util::doc_macros::panic_t_from_int, Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Derivative
    ///
    /// The result is always exactly one coefficient shorter, except for
    /// constants whose derivative is the zero polynomial `[0]`.
    ///
    /// # Panics
    #[doc = panic_t_from_int!(r"usize")]
    ///
    /// # Examples
    /// ```
    /// use laguerre_poly::poly;
    ///
    /// assert_eq!(poly![140.0, -13.0, -8.0, 1.0].diff(), poly![-13.0, -16.0, 3.0]);
    /// ```
    #[must_use]
    pub fn diff(self) -> Self {
        // derivative of constant is zero
        if self.len_raw() == 1 {
            return Self::zero();
        }

        let coeffs: Vec<_> = self
            .0
            .into_iter()
            .enumerate()
            .skip(1) // shift degrees down
            .map(|(n, c)| c * Complex::from(T::from_usize(n).expect("overflow")))
            .collect();
        Self(coeffs)
    }
}
