//! Plotting observer for visualizing bisection convergence.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use taper_core::{MonotonicFn, Observer};

use taper_solvers::root::bisection::{Action, Event};

/// An observer that records interval width and residual magnitude per
/// probe and displays them via egui.
///
/// Attach with `&mut` so the plot can be shown after the solve completes:
///
/// ```ignore
/// let mut obs = ConvergencePlot::new("Bisection: cube root of 2");
/// bisection::solve(&Cube, 2.0, &Config::default(), &mut obs)?;
/// obs.show()?;
/// ```
///
/// Both traces shrink geometrically for a well-behaved solve, so the window
/// renders them on a log₁₀ y-axis; zero values (an exact hit) are skipped.
pub struct ConvergencePlot {
    title: String,
    widths: Vec<[f64; 2]>,
    residuals: Vec<[f64; 2]>,
    probes: u32,
}

impl ConvergencePlot {
    /// Creates an empty plot with a window title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            widths: Vec::new(),
            residuals: Vec::new(),
            probes: 0,
        }
    }

    /// Records a single probe: the interval width it was drawn from, and
    /// its residual if the evaluation succeeded.
    pub fn record(&mut self, width: f64, residual: Option<f64>) {
        let n = f64::from(self.probes);
        self.widths.push([n, width]);
        if let Some(residual) = residual {
            self.residuals.push([n, residual.abs()]);
        }
        self.probes += 1;
    }

    /// Opens a blocking egui window displaying the recorded traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let traces = vec![
            ("Interval width".to_owned(), self.widths),
            ("|Residual|".to_owned(), self.residuals),
        ];

        eframe::run_native(
            &self.title,
            options,
            Box::new(move |_cc| Ok(Box::new(PlotApp { traces }))),
        )
    }
}

impl<'a, F: MonotonicFn> Observer<Event<'a, F>, Action> for ConvergencePlot {
    fn observe(&mut self, event: &Event<'a, F>) -> Option<Action> {
        let [lo, hi] = event.interval();
        self.record(hi - lo, event.result().ok().map(|eval| eval.residual));
        None
    }
}

/// Allows `&mut ConvergencePlot` to be passed to solvers that take the
/// observer by value, so [`ConvergencePlot::show`] can be called after the
/// solve completes.
impl<'a, F: MonotonicFn> Observer<Event<'a, F>, Action> for &mut ConvergencePlot {
    fn observe(&mut self, event: &Event<'a, F>) -> Option<Action> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders recorded traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let plot = Plot::new("convergence_plot")
                .legend(Legend::default())
                .x_axis_label("Probe")
                .y_axis_label("log₁₀");
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = points
                        .iter()
                        .filter(|p| p[1] > 0.0)
                        .map(|p| [p[0], p[1].log10()])
                        .collect();
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use taper_functions::Square;
    use taper_solvers::root::bisection::{Config, solve};

    #[test]
    fn records_width_and_residual_per_probe() {
        let mut obs = ConvergencePlot::new("test");
        obs.record(4.0, Some(-1.5));
        obs.record(2.0, None);

        assert_eq!(obs.widths, [[0.0, 4.0], [1.0, 2.0]]);
        assert_eq!(obs.residuals, [[0.0, 1.5]]);
    }

    #[test]
    fn observes_solver_probes() {
        let mut obs = ConvergencePlot::new("test");

        solve(&Square, 4.0, &Config::default(), &mut obs).expect("should converge");

        // One probe: midpoint 2 drawn from (0, 4), an exact hit.
        assert_eq!(obs.widths, [[0.0, 4.0]]);
        assert_eq!(obs.residuals, [[0.0, 0.0]]);
    }
}
