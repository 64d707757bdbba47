use num::Complex;

use crate::{
    poly::roots::{Convergence, LaguerreVariant, RootEstimate, SolverOptions},
    util::{
        complex::{c_is_finite, c_is_negligible, c_larger},
        doc_macros::panic_t_from_int,
    },
    Poly, RealScalar,
};

/// Refine `guess` towards a root of `poly` with Laguerre's method.
///
/// Derivatives are computed once up front. Every step evaluates the
/// polynomial and its first two derivatives at the current estimate and
/// picks the larger of the two candidate denominators, so that the
/// correction is the smaller one. The estimate is carried from step to step
/// by value and returned with the reason the iteration stopped:
///
/// - [`Convergence::Converged`] when `|p(z)|` is within `epsilon` of zero,
/// - [`Convergence::Stalled`] when the last correction was within `epsilon` of zero,
/// - [`Convergence::MaxIter`] when `max_iter` steps were taken,
/// - [`Convergence::NonFinite`] when the residual or the estimate is `NaN`
///   or infinite, e.g. after a step through a vanishing denominator.
///
/// The solver never fails, non-finite values are returned as they are.
///
/// # Panics
#[doc = panic_t_from_int!(r"usize")]
///
/// # Examples
/// ```
/// use laguerre_poly::{
///     complex, poly,
///     roots::{laguerre, Convergence, LaguerreVariant, SolverOptions},
/// };
///
/// let p = poly![140.0, -13.0, -8.0, 1.0];
/// let options = SolverOptions::default().with_variant(LaguerreVariant::Classic);
/// let estimate = laguerre(&p, complex!(6.5, 0.5), &options);
/// assert_eq!(estimate.status, Convergence::Converged);
/// assert!((estimate.root - complex!(7.0)).norm() < 1E-6);
///
/// // the default step gets there too, but only stops once it stalls
/// let estimate = laguerre(&p, complex!(6.5, 0.5), &SolverOptions::default());
/// assert_eq!(estimate.status, Convergence::Stalled);
/// assert!((estimate.root - complex!(7.0)).norm() < 1E-6);
/// ```
#[allow(clippy::similar_names)]
pub fn laguerre<T: RealScalar>(
    poly: &Poly<T>,
    guess: Complex<T>,
    options: &SolverOptions<T>,
) -> RootEstimate<T> {
    let epsilon = options.epsilon;
    let size = T::from_usize(poly.degree()).expect("overflow");
    let n = Complex::from(size);
    let n_minus_one = Complex::from(size - T::one());

    let p_diff = poly.clone().diff();
    let p_diff2 = p_diff.clone().diff();

    let mut guess = guess;
    for i in 0..options.max_iter {
        let px = poly.eval(guess);

        if !c_is_finite(&px) {
            log::trace!("non-finite residual {{iterations: {i}, root: {guess}}}");
            return RootEstimate::new(guess, Convergence::NonFinite, i);
        }

        // stopping criterion 1: converged
        if c_is_negligible(&px, epsilon) {
            log::trace!("converged {{iterations: {i}, root: {guess}}}");
            return RootEstimate::new(guess, Convergence::Converged, i);
        }

        let g = p_diff.eval(guess) / px;
        let pddx = p_diff2.eval(guess);
        let h = match options.variant {
            LaguerreVariant::Biased => g * g - pddx - px,
            LaguerreVariant::Classic => g * g - pddx / px,
        };
        let r = (n_minus_one * (h * n - g * g)).sqrt();

        // the larger denominator gives the smaller, more cautious step
        let denom = c_larger(g + r, g - r, epsilon);
        let delta = n / denom;
        guess = guess - delta;
        log::trace!("{{current_guess: {guess}, error: {}}}", px.norm());

        if !c_is_finite(&guess) {
            log::trace!("non-finite estimate {{iterations: {}}}", i + 1);
            return RootEstimate::new(guess, Convergence::NonFinite, i + 1);
        }

        // stopping criterion 2: no more progress
        if c_is_negligible(&delta, epsilon) {
            log::trace!("stalled {{iterations: {}, root: {guess}}}", i + 1);
            return RootEstimate::new(guess, Convergence::Stalled, i + 1);
        }
    }

    log::trace!("max_iter exceeded {{root: {guess}}}");
    RootEstimate::new(guess, Convergence::MaxIter, options.max_iter)
}
