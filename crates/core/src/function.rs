/// A monotonic real-valued function whose inverse is recovered numerically.
///
/// Implementors must be monotonic (non-decreasing or non-increasing) over the
/// search domain. Solvers rely on that property to decide which way to move
/// an interval endpoint; it is a precondition and is not verified.
///
/// Evaluation is fallible so that functions with restricted domains can
/// reject values outside them.
pub trait MonotonicFn {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `v`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if `v` lies outside the function's domain.
    fn eval(&self, v: f64) -> Result<f64, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    struct Doubler;

    impl MonotonicFn for Doubler {
        type Error = Infallible;

        fn eval(&self, v: f64) -> Result<f64, Infallible> {
            Ok(2.0 * v)
        }
    }

    #[test]
    fn eval_returns_function_value() {
        assert_eq!(Doubler.eval(3.0), Ok(6.0));
    }
}
