use taper_core::{Bracketing, MonotonicFn};

use crate::root::{Evaluation, evaluate};

use super::{
    Error,
    bracket::{Bracket, BracketError, Side},
};

/// Outcome of establishing a search interval.
pub(super) enum Init {
    /// A bound's image matched the target exactly.
    Exact(Evaluation),

    /// A valid two-sided interval.
    Bracketed {
        bracket: Bracket,
        evals: [Evaluation; 2],
    },
}

/// Evaluates candidate bounds and classifies them into a bracket.
///
/// # Errors
///
/// Returns `InvalidBounds` if the target or a bound's image is non-finite,
/// or if both images fall on the same side of the target. A failed bound
/// evaluation is fatal here: without two valid endpoints there is no
/// interval to recover into.
pub(super) fn init<F>(f: &F, target: f64, bounds: [f64; 2]) -> Result<Init, Error>
where
    F: MonotonicFn,
{
    if !target.is_finite() {
        return Err(BracketError::NonFiniteTarget { target }.into());
    }

    let [lo, hi] = bounds;
    let lo_eval = evaluate(f, target, lo).map_err(|e| Error::function(lo, e))?;
    let hi_eval = evaluate(f, target, hi).map_err(|e| Error::function(hi, e))?;

    for eval in [lo_eval, hi_eval] {
        if !eval.value.is_finite() {
            return Err(BracketError::NonFinite { v: eval.v }.into());
        }
        if eval.residual == 0.0 {
            return Ok(Init::Exact(eval));
        }
    }

    let lo_side = Side::of_residual(lo_eval.residual);
    if lo_side == Side::of_residual(hi_eval.residual) {
        return Err(BracketError::NotBracketing { lo, hi, target }.into());
    }

    let bracket = match lo_side {
        Side::Under => Bracket::new(lo, hi),
        Side::Over => Bracket::new(hi, lo),
    };

    Ok(Init::Bracketed {
        bracket,
        evals: [lo_eval, hi_eval],
    })
}

/// Establishes an interval, preferring endpoints carried over from a
/// previous target when they still bracket the new one.
pub(super) fn init_or_carry<F>(
    f: &F,
    target: f64,
    carried: Option<[f64; 2]>,
) -> Result<Init, Error>
where
    F: MonotonicFn + Bracketing,
{
    if let Some(bounds) = carried
        && let Ok(established) = init(f, target, bounds)
    {
        return Ok(established);
    }

    init(f, target, [f.lower_bound(target), f.upper_bound(target)])
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    /// f(v) = v², restricted to the non-negative branch by its bounds.
    struct Sq;

    impl MonotonicFn for Sq {
        type Error = Infallible;

        fn eval(&self, v: f64) -> Result<f64, Infallible> {
            Ok(v * v)
        }
    }

    impl Bracketing for Sq {
        fn lower_bound(&self, _target: f64) -> f64 {
            0.0
        }

        fn upper_bound(&self, target: f64) -> f64 {
            target.max(1.0)
        }
    }

    #[test]
    fn classifies_endpoints_by_side() {
        let init = init(&Sq, 2.0, [0.0, 2.0]).expect("should bracket");
        let Init::Bracketed { bracket, evals } = init else {
            panic!("expected a bracketed interval");
        };

        assert_eq!(bracket.bounds(), [0.0, 2.0]);
        assert_eq!(evals[0].residual, -2.0);
        assert_eq!(evals[1].residual, 2.0);
    }

    #[test]
    fn exact_endpoint_short_circuits() {
        let init = init(&Sq, 4.0, [2.0, 4.0]).expect("should succeed");
        let Init::Exact(eval) = init else {
            panic!("expected an exact endpoint");
        };
        assert_eq!(eval.v, 2.0);
    }

    #[test]
    fn same_side_endpoints_are_rejected() {
        let result = init(&Sq, -4.0, [0.0, 2.0]);
        assert!(matches!(
            result,
            Err(Error::InvalidBounds(BracketError::NotBracketing { .. }))
        ));
    }

    #[test]
    fn non_finite_target_is_rejected() {
        let result = init(&Sq, f64::NAN, [0.0, 2.0]);
        assert!(matches!(
            result,
            Err(Error::InvalidBounds(BracketError::NonFiniteTarget { .. }))
        ));
    }

    #[test]
    fn carried_endpoints_are_reused_when_still_bracketing() {
        let init = init_or_carry(&Sq, 2.0, Some([1.0, 1.5])).expect("should bracket");
        let Init::Bracketed { bracket, .. } = init else {
            panic!("expected a bracketed interval");
        };
        assert_eq!(bracket.bounds(), [1.0, 1.5]);
    }

    #[test]
    fn stale_carried_endpoints_fall_back_to_heuristics() {
        // [1.0, 1.5] both undershoot a target of 9.
        let init = init_or_carry(&Sq, 9.0, Some([1.0, 1.5])).expect("should bracket");
        let Init::Bracketed { bracket, .. } = init else {
            panic!("expected a bracketed interval");
        };
        assert_eq!(bracket.bounds(), [0.0, 9.0]);
    }
}
