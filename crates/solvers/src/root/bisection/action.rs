use super::bracket::Side;

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best estimate found so far.
    StopEarly,

    /// Assume which side of the target the probe's image fell on.
    ///
    /// This action is mainly used for error recovery: it lets the interval
    /// keep narrowing when a probe fails inside a region the observer can
    /// classify from domain knowledge. If returned for a successful probe,
    /// that evaluation is not considered for the best estimate.
    Assume(Side),
}

impl Action {
    /// Assumes the probe's image fell at or below the target.
    #[must_use]
    pub fn assume_under() -> Self {
        Self::Assume(Side::Under)
    }

    /// Assumes the probe's image fell above the target.
    #[must_use]
    pub fn assume_over() -> Self {
        Self::Assume(Side::Over)
    }
}
