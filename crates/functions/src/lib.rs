//! Standard monotonic functions for the Taper toolkit.
//!
//! Each function implements [`MonotonicFn`] together with [`Bracketing`]
//! heuristics that guarantee an initial interval straddling any target the
//! function can reach:
//!
//! - [`Square`] — `v²`, whose inverse is the square root
//! - [`Cube`] — `v³`, whose inverse is the cube root
//!
//! The [`Registry`] collects named functions behind an error-erasing
//! object-safe surface, so callers can pick an inverse by name at run time
//! and hand the resulting [`Inverse`] handle straight to a solver.
//!
//! [`MonotonicFn`]: taper_core::MonotonicFn
//! [`Bracketing`]: taper_core::Bracketing

mod cube;
mod registry;
mod square;

pub use cube::Cube;
pub use registry::{DomainError, Inverse, InverseDyn, Registry};
pub use square::Square;
