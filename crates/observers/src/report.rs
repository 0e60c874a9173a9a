//! Human-readable reporting for root approximations.
//!
//! The solvers return structured values and never print; these helpers turn
//! those values into the classroom-style sentences a teaching console would
//! show ("The square root of 4 is 2."), leaving the actual I/O to the
//! caller. [`Transcript`] does the same per probe, recording one line per
//! solver event.
//!
//! Function names read as written: a function registered as `"square"`
//! reports its inverse as "the square root".

use taper_core::{MonotonicFn, Observer};

use taper_solvers::root::bisection::{Action, Event, Solution, Step};

/// States a stepwise outcome in words.
#[must_use]
pub fn describe_step(name: &str, target: f64, step: &Step) -> String {
    match step {
        Step::Exact { root } => format!("The {name} root of {target} is {root}."),
        Step::Narrowed { lo, hi } => {
            format!("The {name} root of {target} is between {lo} and {hi}.")
        }
    }
}

/// States a one-shot solution in words.
#[must_use]
pub fn describe_solution(name: &str, target: f64, solution: &Solution) -> String {
    if solution.is_exact() {
        format!(
            "The {name} root of {target} is {root}.",
            root = solution.root
        )
    } else {
        format!(
            "The {name} root of {target} is between {lo} and {hi} after {iters} iterations.",
            lo = solution.lo,
            hi = solution.hi,
            iters = solution.iters
        )
    }
}

/// An observer that records one line per probe.
///
/// Useful for teaching demos and debugging: after a solve, the transcript
/// holds the full narrowing history in order.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded lines, in probe order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the transcript, returning its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl<'a, F: MonotonicFn> Observer<Event<'a, F>, Action> for Transcript {
    fn observe(&mut self, event: &Event<'a, F>) -> Option<Action> {
        let [lo, hi] = event.interval();
        let line = match event.result() {
            Ok(eval) => format!(
                "probe {v} → {value}, residual {residual}, interval [{lo}, {hi}]",
                v = eval.v,
                value = eval.value,
                residual = eval.residual,
            ),
            Err(error) => format!("probe {v} failed: {error}", v = event.v()),
        };
        self.lines.push(line);
        None
    }
}

/// Allows `&mut Transcript` to be passed to solvers that take the observer
/// by value, so the lines can be read after the solve completes.
impl<'a, F: MonotonicFn> Observer<Event<'a, F>, Action> for &mut Transcript {
    fn observe(&mut self, event: &Event<'a, F>) -> Option<Action> {
        (*self).observe(event)
    }
}
