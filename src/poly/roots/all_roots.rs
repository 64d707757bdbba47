//! Root finders that find all roots of a polynomial.

use num::Zero;

use super::{initial_guess_unit_square, laguerre, Convergence, RootEstimate, SolverOptions};
use crate::{
    util::{
        complex::c_is_finite,
        doc_macros::{errors_validation, panic_t_from_f64, panic_t_from_int},
    },
    Error, Poly, RealScalar, Result,
};

/// Find all roots of a polynomial by Laguerre iteration and deflation.
///
/// Each root is first located on the deflated polynomial, starting from a
/// random point in the unit square drawn from `rng`, then polished on the
/// original `poly` to undo the error accumulated by earlier deflations.
/// The working polynomial is deflated by the polished root and the process
/// repeats until a linear factor is left, whose root is computed directly.
///
/// Exactly `poly.degree()` roots are returned, in the order they were
/// extracted. Roots that did not converge are still returned, check
/// [`RootEstimate::status`] to find out.
///
/// # Errors
#[doc = errors_validation!()]
///
/// # Panics
#[doc = panic_t_from_f64!()]
#[doc = panic_t_from_int!(r"usize")]
///
/// # Examples
/// ```
/// use laguerre_poly::{poly, roots::{laguerre_deflate, SolverOptions}};
///
/// let p = poly![4.0, 0.0, 1.0];
/// let mut rng = fastrand::Rng::with_seed(1);
/// let roots = laguerre_deflate(&p, &mut rng, &SolverOptions::default()).unwrap();
/// assert_eq!(roots.len(), 2);
/// assert!(roots.iter().all(|r| (r.root.norm() - 2.0_f64).abs() < 1E-6));
/// ```
pub fn laguerre_deflate<T: RealScalar>(
    poly: &Poly<T>,
    rng: &mut fastrand::Rng,
    options: &SolverOptions<T>,
) -> Result<Vec<RootEstimate<T>>> {
    validate(poly)?;
    Ok(laguerre_deflate_unchecked(poly, rng, options))
}

/// Same as [`laguerre_deflate`], without validating `poly` first.
///
/// Nothing is diagnosed: constants yield no roots, and a zero leading
/// coefficient or non-finite coefficients produce non-finite or meaningless
/// roots instead of an error. Non-finite roots are marked with
/// [`Convergence::NonFinite`].
///
/// # Panics
#[doc = panic_t_from_f64!()]
#[doc = panic_t_from_int!(r"usize")]
pub fn laguerre_deflate_unchecked<T: RealScalar>(
    poly: &Poly<T>,
    rng: &mut fastrand::Rng,
    options: &SolverOptions<T>,
) -> Vec<RootEstimate<T>> {
    let mut roots = Vec::with_capacity(poly.degree());
    if poly.len_raw() < 2 {
        return roots;
    }

    let mut this = poly.clone();
    while this.len_raw() > 2 {
        let guess = initial_guess_unit_square(rng);
        let rough = laguerre(&this, guess, options);
        let polished = laguerre(poly, rough.root, options);
        log::debug!(
            "{{root: {}, status: {:?}, iterations: {}, polish_iterations: {}}}",
            polished.root,
            polished.status,
            rough.iterations,
            polished.iterations
        );

        this = this.deflate(polished.root).0;
        roots.push(RootEstimate::new(
            polished.root,
            polished.status,
            rough.iterations + polished.iterations,
        ));
    }

    // only a linear factor is left
    let root = -this.0[0] / this.0[1];
    let status = if c_is_finite(&root) {
        Convergence::ClosedForm
    } else {
        Convergence::NonFinite
    };
    log::debug!("{{root: {root}, status: {status:?}}}");
    roots.push(RootEstimate::new(root, status, 0));

    // post-condition: one root per degree
    debug_assert_eq!(roots.len(), poly.degree());
    roots
}

fn validate<T: RealScalar>(poly: &Poly<T>) -> Result<()> {
    if poly.degree() < 1 {
        return Err(Error::DegreeTooLow {
            degree: poly.degree(),
        });
    }
    if let Some(index) = poly.iter().position(|z| !c_is_finite(z)) {
        return Err(Error::NonFiniteCoefficient { index });
    }
    if poly.last().is_zero() {
        return Err(Error::ZeroLeadingCoefficient);
    }
    Ok(())
}
