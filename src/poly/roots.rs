use itertools::Itertools;
use num::Complex;

use crate::{
    util::doc_macros::{errors_validation, panic_t_from_f64},
    Poly, RealScalar, Result,
};

mod single_root;
pub use single_root::laguerre;
mod all_roots;
pub use all_roots::{laguerre_deflate, laguerre_deflate_unchecked};
mod initial_guess;
pub use initial_guess::initial_guess_unit_square;

/// Magnitude tolerance used for convergence tests and tie-breaks.
pub const DEFAULT_EPSILON: f64 = 1E-9;

/// Iteration cap for a single call of the single-root solver.
pub const DEFAULT_MAX_ITER: usize = 10_000;

/// Which auxiliary term the Laguerre step is built from.
///
/// With `g = p'(z)/p(z)` both variants take a step `n / (g ± sqrt((n-1)(n*h - g^2)))`,
/// they only differ in `h`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LaguerreVariant {
    /// `h = g^2 - p''(z) - p(z)`.
    ///
    /// Behaves like Newton's method close to a simple root, and takes short,
    /// heavily damped steps far away from it. Converges on well-scaled inputs
    /// but can exhaust the iteration cap on others.
    #[default]
    Biased,

    /// Textbook Laguerre, `h = g^2 - p''(z)/p(z)`. Cubically convergent
    /// close to simple roots.
    Classic,
}

/// Tuning knobs shared by every step of the root finder.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverOptions<T> {
    /// Magnitudes closer than this are considered equal.
    pub epsilon: T,

    /// Maximum number of steps for each call of the single-root solver.
    pub max_iter: usize,

    pub variant: LaguerreVariant,
}

impl<T: RealScalar> Default for SolverOptions<T> {
    /// # Panics
    #[doc = panic_t_from_f64!()]
    fn default() -> Self {
        Self {
            epsilon: T::from_f64(DEFAULT_EPSILON).expect("overflow"),
            max_iter: DEFAULT_MAX_ITER,
            variant: LaguerreVariant::default(),
        }
    }
}

impl<T> SolverOptions<T> {
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: T) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: LaguerreVariant) -> Self {
        self.variant = variant;
        self
    }
}

/// Why the solver stopped improving an estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Convergence {
    /// The polynomial evaluates to (almost) zero at the estimate.
    Converged,

    /// The last correction was negligible, but the residual is not. The
    /// estimate may still be far from a root.
    Stalled,

    /// The iteration cap was reached.
    MaxIter,

    /// Computed directly from a linear factor, no iteration involved.
    ClosedForm,

    /// The residual or the estimate became `NaN` or infinite, iteration
    /// stopped there. The returned estimate is meaningless.
    NonFinite,
}

impl Convergence {
    /// True if the residual was actually observed to vanish.
    #[must_use]
    pub const fn is_converged(self) -> bool {
        matches!(self, Self::Converged | Self::ClosedForm)
    }
}

/// A root together with how it was obtained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootEstimate<T> {
    pub root: Complex<T>,
    pub status: Convergence,

    /// Number of correction steps taken to reach `root`.
    pub iterations: usize,
}

impl<T> RootEstimate<T> {
    pub(crate) const fn new(root: Complex<T>, status: Convergence, iterations: usize) -> Self {
        Self {
            root,
            status,
            iterations,
        }
    }
}

impl<T: RealScalar> Poly<T> {
    /// A convenient way of finding roots, with default [`SolverOptions`] and
    /// a randomly seeded generator for the starting points.
    ///
    /// Roots are returned in the order they were extracted. Use
    /// [`Poly::roots_with_seed`] for reproducible results, or
    /// [`laguerre_deflate`] for control over the solver and access to the
    /// convergence status of every root.
    ///
    /// # Errors
    #[doc = errors_validation!()]
    ///
    /// # Panics
    #[doc = panic_t_from_f64!()]
    pub fn roots(&self) -> Result<Vec<Complex<T>>> {
        self.roots_with(&mut fastrand::Rng::new(), &SolverOptions::default())
    }

    /// Same as [`Poly::roots`], but starting points are drawn from a
    /// generator seeded with `seed`.
    ///
    /// # Errors
    #[doc = errors_validation!()]
    ///
    /// # Panics
    #[doc = panic_t_from_f64!()]
    pub fn roots_with_seed(&self, seed: u64) -> Result<Vec<Complex<T>>> {
        self.roots_with(&mut fastrand::Rng::with_seed(seed), &SolverOptions::default())
    }

    /// Find roots with an explicit random source and options.
    ///
    /// # Errors
    #[doc = errors_validation!()]
    ///
    /// # Panics
    #[doc = panic_t_from_f64!()]
    pub fn roots_with(
        &self,
        rng: &mut fastrand::Rng,
        options: &SolverOptions<T>,
    ) -> Result<Vec<Complex<T>>> {
        Ok(laguerre_deflate(self, rng, options)?
            .into_iter()
            .map(|e| e.root)
            .collect_vec())
    }
}
