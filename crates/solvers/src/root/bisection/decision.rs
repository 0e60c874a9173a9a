use crate::root::Evaluation;

use super::{
    Action, Error,
    bracket::Side,
};

/// Control flow outcomes for a single midpoint probe.
#[derive(Debug)]
pub(super) enum Decision {
    /// Replace the endpoint on `side` with the midpoint.
    ///
    /// `eval` is `None` when the side was assumed by an observer rather
    /// than measured.
    Narrow {
        side: Side,
        eval: Option<Evaluation>,
    },

    /// The midpoint hit the target exactly.
    Exact(Evaluation),

    /// Stop and report the best estimate so far.
    StopEarly,

    /// Abort with an error.
    Error(Error),
}

impl Decision {
    /// Computes a decision from the observer action and probe outcome.
    ///
    /// An observer action always takes precedence over the measured
    /// outcome, which is what allows recovery from failed probes.
    pub(super) fn new(action: Option<Action>, outcome: Result<Evaluation, Error>) -> Self {
        match action {
            Some(Action::Assume(side)) => Self::Narrow { side, eval: None },
            Some(Action::StopEarly) => Self::StopEarly,
            None => match outcome {
                Ok(eval) if eval.residual == 0.0 => Self::Exact(eval),
                Ok(eval) => Self::Narrow {
                    side: Side::of_residual(eval.residual),
                    eval: Some(eval),
                },
                Err(error) => Self::Error(error),
            },
        }
    }
}
