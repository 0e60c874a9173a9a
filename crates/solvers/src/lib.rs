//! Numerical solvers for the Taper toolkit.
//!
//! One solver family ships today: [`root`], which recovers the input of a
//! monotonic function from a target output by narrowing a bracketing
//! interval.

pub mod root;
