//! Presentation options for the trajectory plot.

use eframe::egui;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScatterMode {
    /// Markers joined by lines for short series, lines alone for long ones.
    Auto,
    Markers,
    Lines,
    LinesAndMarkers,
}

impl ScatterMode {
    pub const AUTO_MARKER_LIMIT: usize = 20;

    /// Returns `(draw_lines, draw_markers)` for a series of `len` points.
    pub fn resolve(&self, len: usize) -> (bool, bool) {
        match self {
            ScatterMode::Auto => (true, len < Self::AUTO_MARKER_LIMIT),
            ScatterMode::Markers => (false, true),
            ScatterMode::Lines => (true, false),
            ScatterMode::LinesAndMarkers => (true, true),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PlotOptions {
    pub autosize: bool,
    pub scroll_zoom: bool,
    pub display_logo: bool,
    pub legend: bool,
    pub mode: ScatterMode,
    pub marker_radius: f32,
    pub line_width: f32,
    /// Fixed plot size, used only when `autosize` is off.
    pub width: f32,
    pub height: f32,
}

impl PlotOptions {
    pub fn new() -> Self {
        Self {
            autosize: true,
            scroll_zoom: true,
            display_logo: false,
            legend: true,
            mode: ScatterMode::Auto,
            marker_radius: 3.0,
            line_width: 1.5,
            width: 700.0,
            height: 450.0,
        }
    }

    /// `(allow_zoom, allow_scroll)` for the plot. The wheel never pans.
    pub fn wheel_handling(&self) -> (bool, bool) {
        (self.scroll_zoom, false)
    }

    /// Makes a bare wheel turn zoom instead of requiring the command key.
    pub fn apply_input(&self, options: &mut egui::Options) {
        if self.scroll_zoom {
            options.input_options.zoom_modifier = egui::Modifiers::NONE;
        }
    }
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self::new()
    }
}
