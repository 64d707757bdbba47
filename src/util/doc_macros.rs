//! Macros for reducing doc comment boilerplate.

/// Documents `from_f64` panics.
macro_rules! panic_t_from_f64 {
    () => {
        r"If `T` is `f32` or `f64`, this function does not panic. However, if `T` does not implement [`num::FromPrimitive::from_f64`] correctly, this function might panic while converting tolerances or random samples\n\n"
    };
}
pub(crate) use panic_t_from_f64;

/// Documents generic [`num::FromPrimitive`] panics.
///
/// You must provide a string containing the integer type with the largest range
/// of values that should be supported.
macro_rules! panic_t_from_int {
    ($ty_str:expr) => {
        concat!(r"If `T` is `f32` or `f64`, this function does not panic. However, if `T` cannot represent all primitive integers smaller than [`", $ty_str, r"::MAX`], this might panic for polynomials of absurd degree\n\n")
    };
}
pub(crate) use panic_t_from_int;

/// Documents the validation performed before root finding.
macro_rules! errors_validation {
    () => {
        r"- [`Error::DegreeTooLow`](crate::Error::DegreeTooLow): the polynomial is a constant.
- [`Error::NonFiniteCoefficient`](crate::Error::NonFiniteCoefficient): a coefficient is `NaN` or infinite.
- [`Error::ZeroLeadingCoefficient`](crate::Error::ZeroLeadingCoefficient): the highest coefficient is exactly zero.
"
    };
}
pub(crate) use errors_validation;
