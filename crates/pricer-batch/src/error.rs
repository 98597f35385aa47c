//! Batch pre-flight error types.

use pricer_core::CoreError;
use thiserror::Error;

/// Raised only before any update is dispatched. Once the batch is running,
/// every failure is recorded per item instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("invalid batch request: {0}")]
    InvalidArgument(String),
}

impl From<CoreError> for BatchError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidArgument(message) => Self::InvalidArgument(message),
        }
    }
}
