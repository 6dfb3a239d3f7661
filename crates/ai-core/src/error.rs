//! Toolkit error type.
//!
//! Sub-crates define their own error enums (`SteeringError`, `PipelineError`,
//! `ActionError`) for their contract violations.  `AiError` covers the shared
//! primitives and configuration.

use thiserror::Error;

/// The top-level error type for `ai-core`.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand result type for `ai-core`.
pub type AiResult<T> = Result<T, AiError>;
