//! Error types for frame decoding and trajectory grouping.

use thiserror::Error;

/// What is wrong with a single observation frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameDefect {
    #[error("frame is not an object")]
    NotAnObject,
    #[error("frame has no agent key")]
    NoAgent,
    #[error("frame has {0} agent keys, expected exactly one")]
    MultipleAgents(usize),
    #[error("position of agent '{0}' is not an object")]
    PositionNotAnObject(String),
    #[error("position of agent '{agent}' is missing numeric '{axis}'")]
    MissingCoordinate { agent: String, axis: &'static str },
}

#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("invalid frame at index {index}: {defect}")]
    InvalidFrame { index: usize, defect: FrameDefect },
    #[error("dataset is not a JSON array of frames: {0}")]
    Dataset(#[from] serde_json::Error),
}

impl TrajectoryError {
    /// Index of the offending frame, if the failure came from one.
    pub fn frame_index(&self) -> Option<usize> {
        match self {
            TrajectoryError::InvalidFrame { index, .. } => Some(*index),
            TrajectoryError::Dataset(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_frame_message_names_index_and_defect() {
        let err = TrajectoryError::InvalidFrame {
            index: 4,
            defect: FrameDefect::MultipleAgents(2),
        };
        assert_eq!(
            err.to_string(),
            "invalid frame at index 4: frame has 2 agent keys, expected exactly one"
        );
        assert_eq!(err.frame_index(), Some(4));
    }

    #[test]
    fn dataset_error_has_no_frame_index() {
        let parse = serde_json::from_str::<Vec<serde_json::Value>>("{").unwrap_err();
        let err = TrajectoryError::from(parse);
        assert!(err.frame_index().is_none());
        assert!(err.to_string().starts_with("dataset is not a JSON array"));
    }
}
