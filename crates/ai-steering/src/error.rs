use ai_core::Real;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SteeringError {
    #[error("blend weight must be finite and >= 0, got {0}")]
    InvalidWeight(Real),

    #[error("steering configuration error: {0}")]
    Config(String),
}

pub type SteeringResult<T> = Result<T, SteeringError>;
