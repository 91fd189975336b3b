//! Built-in trajectory dataset.
//!
//! The frames ship inside the binary so the plot can be built synchronously
//! on both native and web targets.

use serde_json::Value;

use crate::error::TrajectoryError;
use crate::grouper::{group_frames, PlotInput};

pub const EMBEDDED_DATASET: &str = include_str!("../data/trajectories.json");

/// Parses a JSON array of frames without validating the frames themselves.
pub fn parse_frames(json: &str) -> Result<Vec<Value>, TrajectoryError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_embedded() -> Result<Vec<Value>, TrajectoryError> {
    parse_frames(EMBEDDED_DATASET)
}

pub fn embedded_plot_input() -> Result<PlotInput, TrajectoryError> {
    let frames = load_embedded()?;
    let plot = group_frames(&frames)?;
    log::info!(
        "grouped {} frames into {} trajectories",
        frames.len(),
        plot.len()
    );
    Ok(plot)
}
