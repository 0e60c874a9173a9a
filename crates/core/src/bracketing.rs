/// Supplies the initial search interval for a target value.
///
/// For a target `x`, the two bounds must together bracket the root: one
/// bound's image under the function must fall at or below `x` and the
/// other's at or above it. Which bound plays which role depends on whether
/// the function increases or decreases; solvers sort that out from the
/// evaluated images, so heuristics only need to guarantee the straddle.
///
/// For example, a cube-root heuristic of `lb(x) = min(x, -1)` and
/// `ub(x) = max(x, 1)` brackets every real target, because cubing is odd
/// and increasing.
pub trait Bracketing {
    /// A bound at or below the root of `target` (for increasing functions).
    fn lower_bound(&self, target: f64) -> f64;

    /// A bound at or above the root of `target` (for increasing functions).
    fn upper_bound(&self, target: f64) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unit;

    impl Bracketing for Unit {
        fn lower_bound(&self, target: f64) -> f64 {
            target.min(0.0)
        }

        fn upper_bound(&self, target: f64) -> f64 {
            target.max(1.0)
        }
    }

    #[test]
    fn bounds_straddle_target() {
        let b = Unit;
        for target in [-3.0, 0.0, 0.5, 7.0] {
            assert!(b.lower_bound(target) <= target);
            assert!(b.upper_bound(target) >= target);
        }
    }
}
