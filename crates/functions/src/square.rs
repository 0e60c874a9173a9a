use std::convert::Infallible;

use taper_core::{Bracketing, MonotonicFn};

/// The squaring function `v²`, whose inverse is the square root.
///
/// Monotonic increasing over the non-negative reals, which is where its
/// bound heuristics keep the search. Negative targets have no real square
/// root, so they cannot be bracketed and solvers report invalid bounds for
/// them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Square;

impl MonotonicFn for Square {
    type Error = Infallible;

    fn eval(&self, v: f64) -> Result<f64, Infallible> {
        Ok(v * v)
    }
}

impl Bracketing for Square {
    /// Every real square root is at least zero.
    fn lower_bound(&self, _target: f64) -> f64 {
        0.0
    }

    /// A number above one exceeds its own square root; at or below one,
    /// the root never exceeds one.
    fn upper_bound(&self, target: f64) -> f64 {
        if target > 1.0 { target } else { 1.0 }
    }
}
