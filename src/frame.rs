//! Observation frames.
//!
//! On the wire a frame is an object with a single key, the agent id, mapping
//! to that agent's `{x, y}` position. Frames are decoded into explicit
//! [`Observation`] records before grouping so nothing downstream depends on
//! object key order.

use serde_json::Value;

use crate::error::{FrameDefect, TrajectoryError};

#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub agent_id: String,
    pub x: f64,
    pub y: f64,
}

impl Observation {
    pub fn new(agent_id: impl Into<String>, x: f64, y: f64) -> Self {
        Self { agent_id: agent_id.into(), x, y }
    }

    /// Decodes one wire frame. Frames with zero or several keys are rejected
    /// rather than picking one of them.
    pub fn from_frame(frame: &Value) -> Result<Self, FrameDefect> {
        let obj = frame.as_object().ok_or(FrameDefect::NotAnObject)?;
        let mut entries = obj.iter();
        let (agent_id, position) = match (entries.next(), obj.len()) {
            (None, _) => return Err(FrameDefect::NoAgent),
            (Some(entry), 1) => entry,
            (Some(_), n) => return Err(FrameDefect::MultipleAgents(n)),
        };

        let position = position
            .as_object()
            .ok_or_else(|| FrameDefect::PositionNotAnObject(agent_id.clone()))?;
        let coord = |axis: &'static str| {
            position
                .get(axis)
                .and_then(Value::as_f64)
                .ok_or_else(|| FrameDefect::MissingCoordinate { agent: agent_id.clone(), axis })
        };

        Ok(Self::new(agent_id.as_str(), coord("x")?, coord("y")?))
    }
}

/// Decodes every frame, stopping at the first malformed one.
pub fn decode_frames(frames: &[Value]) -> Result<Vec<Observation>, TrajectoryError> {
    frames
        .iter()
        .enumerate()
        .map(|(index, frame)| {
            Observation::from_frame(frame)
                .map_err(|defect| TrajectoryError::InvalidFrame { index, defect })
        })
        .collect()
}
