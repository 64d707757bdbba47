use num::{traits::NumAssign, Float, FromPrimitive};

/// Real floating point scalars that can back the coefficients of a [`crate::Poly`].
///
/// The root finder relies on principal square roots and magnitudes of
/// complex numbers, so only float-like types qualify.
pub trait RealScalar:
    Float + FromPrimitive + NumAssign + core::fmt::Debug + core::fmt::Display + 'static
{
}

impl<T> RealScalar for T where
    T: Float + FromPrimitive + NumAssign + core::fmt::Debug + core::fmt::Display + 'static
{
}
