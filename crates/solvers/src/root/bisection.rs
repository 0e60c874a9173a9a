//! Bisection root approximation for monotonic functions.
//!
//! # Algorithm
//!
//! Given a target `x` and a monotonic function `f`, the solver keeps an
//! interval whose endpoint images straddle `x`, probes the midpoint, and
//! replaces the endpoint on the matching side. Each step halves the
//! interval unless the midpoint hits `x` exactly, and the true root always
//! remains inside the interval as long as the monotonicity precondition and
//! the initial straddle hold. Increasing and decreasing functions are both
//! supported; the solver classifies the initial endpoints by which side of
//! the target their images fall on and never needs to know the direction.
//!
//! # Modes
//!
//! - **One-shot** — [`solve`] / [`solve_unobserved`] run to a configured
//!   width or residual tolerance under an iteration budget and return a
//!   [`Solution`]. Exhausting the budget is reported as
//!   [`Status::MaxIters`] with the final interval, not as an error: most
//!   roots are irrational, so never reaching an exact hit is the normal
//!   case, and the caller decides whether to resume.
//! - **Stepwise** — a [`Session`] owns the interval for one target and
//!   refines it by a single halving per [`Session::step`] call, reporting
//!   each refined interval (or the exact root) as a [`Step`]. This mirrors
//!   interactive use, where a caller invokes one step at a time and prints
//!   the narrowing interval.
//!
//! # Observer Events
//!
//! The one-shot solver emits one [`Event`] per midpoint probe:
//!
//! - [`Event::Evaluated`] — the probe succeeded
//! - [`Event::FunctionFailed`] — the function rejected the midpoint
//!
//! Observers can return [`Action::StopEarly`] to halt with the best
//! estimate so far, or [`Action::Assume`] to classify a probe themselves —
//! the usual way to keep narrowing past a failed evaluation. A failed
//! probe with no observer action aborts with [`Error::FunctionDomain`].

mod action;
mod best;
mod bracket;
mod config;
mod decision;
mod error;
mod event;
mod init;
mod search;
mod session;
mod solution;


pub use action::Action;
pub use bracket::{BracketError, Side};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use session::{Session, Step};
pub use solution::{Solution, Status};

use taper_core::{Bracketing, MonotonicFn, Observer};

use search::search;

/// Approximates the root of `target` to tolerance.
///
/// The initial interval comes from the function's [`Bracketing`]
/// heuristics. The observer receives an [`Event`] for each midpoint probe;
/// see the [module docs](self) for event timing and observer actions.
///
/// # Errors
///
/// Returns an error if the heuristics fail to bracket the target, or if
/// the function rejects a probed value and the observer does not return
/// [`Action::Assume`] to recover.
pub fn solve<F, Obs>(
    f: &F,
    target: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: MonotonicFn + Bracketing,
    Obs: for<'a> Observer<Event<'a, F>, Action>,
{
    search(f, target, config, observer)
}

/// Approximates the root of `target` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op
/// observer.
///
/// # Errors
///
/// Returns an error if the heuristics fail to bracket the target or the
/// function rejects a probed value.
pub fn solve_unobserved<F>(f: &F, target: f64, config: &Config) -> Result<Solution, Error>
where
    F: MonotonicFn + Bracketing,
{
    solve(f, target, config, ())
}
