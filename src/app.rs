//! Application shell and eframe integration.
//!
//! Groups the built-in dataset at startup and hands the result to the plot
//! on the first frame. A grouping failure replaces the plot with an error
//! panel.

use eframe::egui;

use crate::config::PlotOptions;
use crate::dataset::embedded_plot_input;
use crate::drawing::TrajectoryPlot;
use crate::error::TrajectoryError;
use crate::grouper::PlotInput;

pub struct App {
    plot: TrajectoryPlot,
    pending: Option<Result<PlotInput, TrajectoryError>>,
    failure: Option<String>,
    first_frame: bool,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let options = PlotOptions::default();
        cc.egui_ctx.options_mut(|o| options.apply_input(o));
        Self::with_input(embedded_plot_input(), options)
    }

    pub fn with_input(input: Result<PlotInput, TrajectoryError>, options: PlotOptions) -> Self {
        Self {
            plot: TrajectoryPlot::new("trajectories", options),
            pending: Some(input),
            failure: None,
            first_frame: true,
        }
    }

    /// Moves the grouped data into the plot. Runs once; later calls find
    /// nothing pending.
    pub fn deliver(&mut self) {
        match self.pending.take() {
            Some(Ok(input)) => {
                self.plot.load(input);
            }
            Some(Err(err)) => {
                log::error!("failed to build trajectories: {err}");
                self.failure = Some(err.to_string());
            }
            None => {}
        }
    }

    pub fn plot(&self) -> &TrajectoryPlot {
        &self.plot
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            self.deliver();
            self.first_frame = false;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(msg) = &self.failure {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.heading("Could not plot trajectories");
                    let color = ui.visuals().error_fg_color;
                    ui.colored_label(color, msg);
                });
                return;
            }
            self.plot.show(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouper::group_frames;
    use serde_json::json;

    #[test]
    fn delivers_grouped_data_once() {
        let input = group_frames(&[json!({"sat1": {"x": 0, "y": 0}})]);
        let mut app = App::with_input(input, PlotOptions::default());
        assert!(!app.plot().is_loaded());
        app.deliver();
        assert!(app.plot().is_loaded());
        app.deliver();
        assert_eq!(app.plot().data().map(PlotInput::len), Some(1));
        assert!(app.failure().is_none());
    }

    #[test]
    fn grouping_failure_leaves_plot_empty() {
        let input = group_frames(&[json!({"sat1": {"x": 0}})]);
        let mut app = App::with_input(input, PlotOptions::default());
        app.deliver();
        assert!(!app.plot().is_loaded());
        assert!(app.failure().unwrap().contains("index 0"));
    }
}
