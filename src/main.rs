//! Print all complex roots of a polynomial given by its coefficients.
//!
//! ```text
//! $ laguerre-poly 1 -8 -13 140
//! Your equation is:
//! x^3 + -8x^2 + -13x + 140
//! The roots of the polynomial are:
//! (5,0) (-4,0) (7,0)
//! ```

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use laguerre_poly::{
    roots::{laguerre_deflate, LaguerreVariant, SolverOptions, DEFAULT_EPSILON, DEFAULT_MAX_ITER},
    Poly64,
};

#[derive(Parser, Debug)]
#[command(version, about = "Find all complex roots of a polynomial")]
struct Arguments {
    /// Coefficients in decreasing powers of x, e.g. `1 -8 -13 140` for x^3 - 8x^2 - 13x + 140
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    coefficients: Vec<f64>,

    /// Seed for the random starting points, a random seed is used if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Magnitudes closer than this are considered equal
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    epsilon: f64,

    /// Maximum number of iterations for each root
    #[arg(long, default_value_t = DEFAULT_MAX_ITER)]
    max_iter: usize,

    /// Use the textbook Laguerre step instead of the default biased one
    #[arg(long)]
    classic: bool,

    /// Log more, repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Arguments {
    fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    fn solver_options(&self) -> SolverOptions<f64> {
        let variant = if self.classic {
            LaguerreVariant::Classic
        } else {
            LaguerreVariant::Biased
        };
        SolverOptions::default()
            .with_epsilon(self.epsilon)
            .with_max_iter(self.max_iter)
            .with_variant(variant)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();
    simple_logger::SimpleLogger::new()
        .with_level(args.log_level())
        .init()?;

    let poly = Poly64::from_descending_reals(&args.coefficients);
    println!("Your equation is:\n{poly}");

    let seed = args.seed.unwrap_or_else(|| fastrand::u64(..));
    log::info!("{{seed: {seed}}}");
    let mut rng = fastrand::Rng::with_seed(seed);
    let roots = laguerre_deflate(&poly, &mut rng, &args.solver_options())
        .with_context(|| format!("cannot find the roots of {poly}"))?;

    for r in roots.iter().filter(|r| !r.status.is_converged()) {
        log::info!("{{root: {}, status: {:?}}}", r.root, r.status);
    }

    println!("The roots of the polynomial are:");
    println!(
        "{}",
        roots
            .iter()
            .map(|r| format!("({},{})", r.root.re, r.root.im))
            .join(" ")
    );
    Ok(())
}
