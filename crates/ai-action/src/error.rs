use ai_core::Real;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("action priority must be a number, got {0}")]
    InvalidPriority(Real),
}

pub type ActionResult<T> = Result<T, ActionError>;
