//! Interactive visualization of bisection convergence.
//!
//! Approximates the cube root of a target and opens a plot window showing
//! the interval width and residual magnitude shrinking per probe.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot
//! cargo run --example plot --features plot -- 42.5
//! ```

use std::error::Error;

use taper_functions::Cube;
use taper_observers::ConvergencePlot;
use taper_solvers::root::bisection::{self, Config};

fn main() -> Result<(), Box<dyn Error>> {
    let target = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid target — expected a number, e.g. 42.5");
            std::process::exit(1);
        })
        .unwrap_or(2.0);

    let mut obs = ConvergencePlot::new(format!("Bisection: cube root of {target}"));

    let solution = bisection::solve(&Cube, target, &Config::default(), &mut obs)?;
    println!(
        "The cube root of {target} is about {root} ({iters} iterations).",
        root = solution.root,
        iters = solution.iters
    );

    obs.show()?;

    Ok(())
}
