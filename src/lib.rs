//! Scatter plot of satellite trajectories.
//!
//! Observation frames name one agent and its `{x, y}` position. They are
//! grouped into one series per agent and drawn with egui_plot.

pub mod app;
pub mod config;
pub mod dataset;
pub mod drawing;
pub mod error;
pub mod frame;
pub mod grouper;

pub use error::{FrameDefect, TrajectoryError};
pub use frame::Observation;
pub use grouper::{group_frames, group_observations, AgentSeries, PlotInput};
