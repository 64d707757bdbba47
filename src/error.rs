use thiserror::Error;

/// Reasons why a polynomial is rejected before any root finding takes place.
///
/// The iteration itself never fails: estimates that did not converge are
/// reported through [`crate::roots::Convergence`] instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Constants have no roots to find.
    #[error("polynomial of degree {degree} has no roots to find")]
    DegreeTooLow { degree: usize },

    /// The highest coefficient is exactly zero, so the nominal degree is wrong.
    #[error("leading coefficient is zero")]
    ZeroLeadingCoefficient,

    #[error("coefficient of x^{index} is not a finite number")]
    NonFiniteCoefficient { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
