use std::convert::Infallible;

use taper_core::{Bracketing, MonotonicFn};

/// The cubing function `v³`, whose inverse is the cube root.
///
/// Odd and monotonic increasing over all reals, so every real target has a
/// real cube root and the bound heuristics bracket all of them, negative
/// targets included.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cube;

impl MonotonicFn for Cube {
    type Error = Infallible;

    fn eval(&self, v: f64) -> Result<f64, Infallible> {
        Ok(v.powi(3))
    }
}

impl Bracketing for Cube {
    /// For targets below −1 the cube root exceeds the target; otherwise −1
    /// is already below every cube root of interest.
    fn lower_bound(&self, target: f64) -> f64 {
        target.min(-1.0)
    }

    fn upper_bound(&self, target: f64) -> f64 {
        target.max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubes_its_input() {
        assert_eq!(Cube.eval(3.0), Ok(27.0));
        assert_eq!(Cube.eval(-2.0), Ok(-8.0));
    }

    #[test]
    fn bounds_straddle_every_real_target() {
        for target in [-27.0, -8.0, -1.0, -0.5, 0.0, 0.5, 1.0, 8.0, 27.0] {
            let lo = Cube.lower_bound(target);
            let hi = Cube.upper_bound(target);
            assert!(Cube.eval(lo).unwrap() <= target);
            assert!(Cube.eval(hi).unwrap() >= target);
        }
    }
}
