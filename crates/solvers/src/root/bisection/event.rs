use taper_core::MonotonicFn;

use crate::root::Evaluation;

/// Events emitted by the bisection solver, one per midpoint probe.
///
/// The initial bound evaluations do not emit events; the interval is not
/// established until they succeed, so there is nothing an observer could
/// steer yet.
pub enum Event<'a, F: MonotonicFn> {
    /// The midpoint was evaluated successfully.
    Evaluated {
        /// The probe and its residual.
        eval: Evaluation,

        /// Lower edge of the interval the midpoint was drawn from.
        lo: f64,

        /// Upper edge of the interval the midpoint was drawn from.
        hi: f64,
    },

    /// The function rejected the midpoint.
    FunctionFailed {
        /// The value that failed to evaluate.
        v: f64,

        /// Lower edge of the interval the midpoint was drawn from.
        lo: f64,

        /// Upper edge of the interval the midpoint was drawn from.
        hi: f64,

        /// The function's error.
        error: &'a F::Error,
    },
}

impl<F: MonotonicFn> Event<'_, F> {
    /// Returns the probed value.
    #[must_use]
    pub fn v(&self) -> f64 {
        match self {
            Self::Evaluated { eval, .. } => eval.v,
            Self::FunctionFailed { v, .. } => *v,
        }
    }

    /// Returns the interval the probe was drawn from.
    #[must_use]
    pub fn interval(&self) -> [f64; 2] {
        match self {
            Self::Evaluated { lo, hi, .. } | Self::FunctionFailed { lo, hi, .. } => [*lo, *hi],
        }
    }

    /// Returns the evaluation, or the function's error for failed probes.
    pub fn result(&self) -> Result<&Evaluation, &F::Error> {
        match self {
            Self::Evaluated { eval, .. } => Ok(eval),
            Self::FunctionFailed { error, .. } => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rejecting;

    impl MonotonicFn for Rejecting {
        type Error = std::fmt::Error;

        fn eval(&self, _v: f64) -> Result<f64, Self::Error> {
            Err(std::fmt::Error)
        }
    }

    #[test]
    fn evaluated_accessors() {
        let event: Event<'_, Rejecting> = Event::Evaluated {
            eval: Evaluation {
                v: 2.0,
                value: 4.0,
                residual: -1.0,
            },
            lo: 0.0,
            hi: 4.0,
        };

        assert_eq!(event.v(), 2.0);
        assert_eq!(event.interval(), [0.0, 4.0]);
        assert_eq!(event.result().unwrap().residual, -1.0);
    }

    #[test]
    fn failed_accessors() {
        let error = std::fmt::Error;
        let event: Event<'_, Rejecting> = Event::FunctionFailed {
            v: 2.0,
            lo: 0.0,
            hi: 4.0,
            error: &error,
        };

        assert_eq!(event.v(), 2.0);
        assert_eq!(event.interval(), [0.0, 4.0]);
        assert!(event.result().is_err());
    }
}
