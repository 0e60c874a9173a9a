//! Core traits for the Taper toolkit.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! function libraries build on:
//!
//! - [`MonotonicFn`] — a fallible monotonic function `f: ℝ → ℝ`
//! - [`Bracketing`] — bound heuristics producing an initial search interval
//!   for a target value
//! - [`Observer`] — receives solver events and optionally returns control
//!   actions

mod bracketing;
mod function;
mod observer;

pub use bracketing::Bracketing;
pub use function::MonotonicFn;
pub use observer::Observer;
