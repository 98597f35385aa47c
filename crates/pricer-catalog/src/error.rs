//! Catalog client error types.

use pricer_core::{CoreError, FailureKind};
use thiserror::Error;

use crate::transport::TransportError;

/// Errors that can occur when talking to the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Caller input was rejected before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP exchange itself could not complete.
    #[error("network failure: {0}")]
    Network(#[from] TransportError),

    /// The catalog answered with a non-success status code.
    #[error("catalog rejected request ({status}): {message}")]
    RemoteRejected {
        /// HTTP status code returned by the catalog.
        status: u16,
        /// Response body, truncated.
        message: String,
    },

    /// A success response could not be parsed into the expected shape.
    #[error("failed to parse catalog response: {0}")]
    Deserialization(#[from] serde_json::Error),
}

impl CatalogError {
    /// Map onto the shared failure taxonomy.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidArgument(_) => FailureKind::InvalidArgument,
            Self::Network(_) => FailureKind::NetworkFailure,
            Self::RemoteRejected { .. } => FailureKind::RemoteRejected,
            Self::Deserialization(_) => FailureKind::DeserializationFailure,
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

impl From<CoreError> for CatalogError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidArgument(message) => Self::InvalidArgument(message),
        }
    }
}
