// internal utilities for dealing with Complex annoyances

use std::cmp::Ordering;

use num::{Complex, One, Zero};

use crate::RealScalar;

/// Order two complex numbers by magnitude, treating magnitudes closer than
/// `epsilon` as equal.
///
/// Phase is ignored entirely. A `NaN` magnitude difference is neither
/// smaller nor larger than the tolerance, so it compares as [`Ordering::Equal`].
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use laguerre_poly::{compare_norm, complex};
///
/// assert_eq!(compare_norm(&complex!(3.0, 4.0), &complex!(5.0), 1E-9), Ordering::Equal);
/// assert_eq!(compare_norm(&complex!(1.0), &complex!(0.0, 2.0), 1E-9), Ordering::Less);
/// assert_eq!(compare_norm(&complex!(-3.0), &complex!(2.0), 1E-9), Ordering::Greater);
/// ```
pub fn compare_norm<T: RealScalar>(a: &Complex<T>, b: &Complex<T>, epsilon: T) -> Ordering {
    let difference = a.norm() - b.norm();
    if difference < -epsilon {
        Ordering::Less
    } else if difference > epsilon {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Convergence test: the magnitude of `z` is within `epsilon` of zero.
pub(crate) fn c_is_negligible<T: RealScalar>(z: &Complex<T>, epsilon: T) -> bool {
    compare_norm(z, &Complex::zero(), epsilon) == Ordering::Equal
}

/// Tie-break between two candidates: `a` wins only if it is larger than `b`
/// by more than `epsilon`, otherwise `b` is kept.
pub(crate) fn c_larger<T: RealScalar>(a: Complex<T>, b: Complex<T>, epsilon: T) -> Complex<T> {
    if compare_norm(&a, &b, epsilon) == Ordering::Greater {
        a
    } else {
        b
    }
}

/// Both parts are neither `NaN` nor infinite.
pub(crate) fn c_is_finite<T: RealScalar>(z: &Complex<T>) -> bool {
    z.re.is_finite() && z.im.is_finite()
}

// sort a vector of complex numbers lexicographically, using their real part first
pub(crate) fn complex_sort_mut<T: RealScalar>(v: &mut [Complex<T>]) {
    v.sort_by(|a, b| {
        let re_ord = a.re.partial_cmp(&b.re).unwrap_or(Ordering::Equal);
        if re_ord != Ordering::Equal {
            return re_ord;
        }
        a.im.partial_cmp(&b.im).unwrap_or(Ordering::Equal)
    });
}

/// Coefficient formatting for equations, real numbers are printed bare
pub(crate) fn complex_fmt<T: std::fmt::Display + Zero + One + PartialEq>(c: &Complex<T>) -> String {
    let r = &c.re;
    let i = &c.im;
    if i.is_zero() {
        format!("{r}")
    } else if i.is_one() {
        format!("({r}+i)")
    } else {
        format!("({r}+i{i})")
    }
}
