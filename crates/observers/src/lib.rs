//! Reusable observers and reporting for Taper solvers.
//!
//! # Modules
//!
//! - [`traits`] — capability traits for cross-solver observers
//!   ([`HasResidual`], [`CanStopEarly`])
//! - [`report`] — human-readable statements of stepwise and one-shot
//!   results, and a [`Transcript`] observer recording one line per probe
//!
//! # Features
//!
//! - `plot` — enables [`ConvergencePlot`] for visualizing solver behavior
//!   via egui. This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`Transcript`]: report::Transcript

pub mod report;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::ConvergencePlot;
