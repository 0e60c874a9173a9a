//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and reused with any solver whose events
//! carry the capability it needs.
//!
//! # Example
//!
//! ```rust
//! use taper_core::Observer;
//! use taper_observers::traits::{CanStopEarly, HasResidual};
//!
//! /// Stops as soon as any probe lands close enough to the target.
//! struct CloseEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for CloseEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use taper_core::MonotonicFn;

use taper_solvers::root::bisection;

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    ///
    /// Returns `f64::NAN` when the event represents a failure and no
    /// residual is available.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<F: MonotonicFn> HasResidual for bisection::Event<'_, F> {
    fn residual(&self) -> f64 {
        match self.result() {
            Ok(eval) => eval.residual,
            Err(_) => f64::NAN,
        }
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use taper_core::Observer;
    use taper_functions::Square;
    use taper_solvers::root::Evaluation;
    use taper_solvers::root::bisection::{Config, Status, solve};

    #[test]
    fn bisection_events_expose_residuals() {
        let event: bisection::Event<'_, Square> = bisection::Event::Evaluated {
            eval: Evaluation {
                v: 1.0,
                value: 1.0,
                residual: -1.0,
            },
            lo: 0.0,
            hi: 2.0,
        };

        assert_eq!(event.residual(), -1.0);
    }

    /// The doc example observer, exercised against the real solver.
    struct CloseEnough {
        tolerance: f64,
    }

    impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for CloseEnough {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.residual().abs() < self.tolerance).then(A::stop_early)
        }
    }

    #[test]
    fn capability_observer_stops_the_bisection_solver() {
        let observer = CloseEnough { tolerance: 0.1 };

        let solution =
            solve(&Square, 2.0, &Config::default(), observer).expect("should stop early");

        // The stopping probe itself is not counted toward the best
        // estimate, so the reported residual is the previous best.
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.residual.abs() < 0.2);
    }
}
