/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The interval narrowed within tolerance, or a probe hit the target
    /// exactly.
    Converged,

    /// Reached the iteration limit with the interval still wider than
    /// tolerance.
    ///
    /// Not a failure: the returned interval still brackets the root, and
    /// the caller may resume from it with a larger budget.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a one-shot bisection root approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best root estimate: the probe with the smallest residual magnitude.
    pub root: f64,

    /// Residual at `root`.
    pub residual: f64,

    /// Lower edge of the final bracketing interval.
    pub lo: f64,

    /// Upper edge of the final bracketing interval.
    pub hi: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    /// True when the interval collapsed onto an exact root.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.lo == self.hi
    }

    /// Width of the final interval.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_interval_is_exact() {
        let solution = Solution {
            status: Status::Converged,
            root: 2.0,
            residual: 0.0,
            lo: 2.0,
            hi: 2.0,
            iters: 1,
        };
        assert!(solution.is_exact());
        assert_eq!(solution.width(), 0.0);
    }

    #[test]
    fn open_interval_is_not_exact() {
        let solution = Solution {
            status: Status::MaxIters,
            root: 1.4,
            residual: -0.04,
            lo: 1.375,
            hi: 1.4375,
            iters: 5,
        };
        assert!(!solution.is_exact());
        assert_eq!(solution.width(), 0.0625);
    }
}
