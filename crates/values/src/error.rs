//! Value helper error types

use thiserror::Error;

/// Values result type
pub type ValuesResult<T> = Result<T, ValuesError>;

/// Value helper errors
#[derive(Debug, Error)]
pub enum ValuesError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
