//! Scatter plot surface for grouped trajectories.
//!
//! The surface accepts a [`PlotInput`] once and then only redraws it; pan and
//! zoom are handled by egui_plot.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::config::PlotOptions;
use crate::grouper::PlotInput;

pub const BUILD_BADGE: &str = concat!("trajectory-viz ", env!("GIT_HASH"));

pub struct TrajectoryPlot {
    id: String,
    options: PlotOptions,
    data: Option<PlotInput>,
}

impl TrajectoryPlot {
    pub fn new(id: impl Into<String>, options: PlotOptions) -> Self {
        Self { id: id.into(), options, data: None }
    }

    pub fn options(&self) -> &PlotOptions {
        &self.options
    }

    pub fn data(&self) -> Option<&PlotInput> {
        self.data.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    /// Hands the plot its data. Only the first call takes effect; later
    /// calls are dropped and return `false`.
    pub fn load(&mut self, input: PlotInput) -> bool {
        if self.data.is_some() {
            log::warn!("plot '{}' already has data, ignoring reload", self.id);
            return false;
        }
        log::info!(
            "plot '{}' received {} series ({} points)",
            self.id,
            input.len(),
            input.total_points()
        );
        self.data = Some(input);
        true
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let opts = &self.options;
        let (allow_zoom, allow_scroll) = opts.wheel_handling();
        let mut plot = Plot::new(&self.id)
            .data_aspect(1.0)
            .allow_drag(true)
            .allow_zoom(allow_zoom)
            .allow_scroll(allow_scroll)
            .allow_boxed_zoom(true);
        if opts.legend {
            plot = plot.legend(Legend::default());
        }
        if !opts.autosize {
            plot = plot.width(opts.width).height(opts.height);
        }

        let response = plot.show(ui, |plot_ui| {
            let Some(data) = &self.data else { return };
            for (idx, series) in data.iter().enumerate() {
                let color = series_color(idx);
                let (lines, markers) = opts.mode.resolve(series.len());
                if lines {
                    plot_ui.line(
                        Line::new(series.agent_id(), PlotPoints::new(series.points()))
                            .color(color)
                            .width(opts.line_width),
                    );
                }
                if markers {
                    plot_ui.points(
                        Points::new(series.agent_id(), PlotPoints::new(series.points()))
                            .color(color)
                            .radius(opts.marker_radius)
                            .filled(true),
                    );
                }
            }
        });

        if opts.display_logo {
            let rect = response.response.rect;
            ui.painter().text(
                rect.right_bottom() - egui::vec2(6.0, 6.0),
                egui::Align2::RIGHT_BOTTOM,
                BUILD_BADGE,
                egui::FontId::proportional(10.0),
                ui.visuals().weak_text_color(),
            );
        }
    }
}

pub fn series_color(idx: usize) -> egui::Color32 {
    COLORS[idx % COLORS.len()]
}

pub const COLORS: [egui::Color32; 10] = [
    egui::Color32::from_rgb(31, 119, 180),
    egui::Color32::from_rgb(255, 127, 14),
    egui::Color32::from_rgb(44, 160, 44),
    egui::Color32::from_rgb(214, 39, 40),
    egui::Color32::from_rgb(148, 103, 189),
    egui::Color32::from_rgb(140, 86, 75),
    egui::Color32::from_rgb(227, 119, 194),
    egui::Color32::from_rgb(127, 127, 127),
    egui::Color32::from_rgb(188, 189, 34),
    egui::Color32::from_rgb(23, 190, 207),
];
