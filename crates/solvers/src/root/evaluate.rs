use taper_core::MonotonicFn;

/// The result of probing a monotonic function at a trial root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// The trial root.
    pub v: f64,

    /// The function value at `v`.
    pub value: f64,

    /// Signed miss distance: `value - target`.
    pub residual: f64,
}

/// Evaluates `f` at a trial root and measures the miss against `target`.
///
/// # Errors
///
/// Propagates the function's own error if `v` lies outside its domain.
pub fn evaluate<F>(f: &F, target: f64, v: f64) -> Result<Evaluation, F::Error>
where
    F: MonotonicFn,
{
    let value = f.eval(v)?;
    Ok(Evaluation {
        v,
        value,
        residual: value - target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use thiserror::Error;

    struct Tripler;

    impl MonotonicFn for Tripler {
        type Error = Infallible;

        fn eval(&self, v: f64) -> Result<f64, Infallible> {
            Ok(3.0 * v)
        }
    }

    #[derive(Debug, Error)]
    #[error("negative input")]
    struct NegativeInput;

    struct PositiveOnly;

    impl MonotonicFn for PositiveOnly {
        type Error = NegativeInput;

        fn eval(&self, v: f64) -> Result<f64, NegativeInput> {
            if v < 0.0 { Err(NegativeInput) } else { Ok(v) }
        }
    }

    #[test]
    fn residual_is_signed_miss() {
        let eval = evaluate(&Tripler, 10.0, 3.0).unwrap();
        assert_eq!(eval.v, 3.0);
        assert_eq!(eval.value, 9.0);
        assert_eq!(eval.residual, -1.0);

        let eval = evaluate(&Tripler, 10.0, 4.0).unwrap();
        assert_eq!(eval.residual, 2.0);
    }

    #[test]
    fn domain_error_propagates() {
        assert!(evaluate(&PositiveOnly, 1.0, -1.0).is_err());
    }
}
