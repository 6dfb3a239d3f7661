use thiserror::Error;

use crate::GoalChannels;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("goals cannot be merged: channels {channels:?} are set in both")]
    GoalConflict { channels: GoalChannels },

    #[error("pipe components changed since the last register_components call")]
    NotRegistered,

    #[error("steering pipe has no actuator")]
    MissingActuator,

    #[error("actuator was handed a path object it did not create")]
    PathMismatch,

    #[error("pipeline configuration error: {0}")]
    Config(String),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
