//! Cross-cutting error types for pricer.
//!
//! Transport and remote failures live in `pricer-catalog`; batch pre-flight
//! failures live in `pricer-batch`. Everything here is caller-input validation.

use thiserror::Error;

/// Errors raised while constructing core values from caller input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Caller input was malformed or out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CoreError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
