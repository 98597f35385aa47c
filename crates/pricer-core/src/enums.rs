//! Failure kinds and sort keys.
//!
//! Both enums serialize as `snake_case` / `kebab-case` strings so they can be
//! rendered directly in CLI output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// FailureKind
// ---------------------------------------------------------------------------

/// Why a single catalog operation did not produce a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Malformed caller input, rejected before any network call.
    InvalidArgument,
    /// The HTTP exchange itself could not complete.
    NetworkFailure,
    /// The remote answered with a non-success status.
    RemoteRejected,
    /// A success body did not parse into the expected shape.
    DeserializationFailure,
    /// The concurrent task carrying the update panicked or was aborted.
    TaskAborted,
}

impl FailureKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::NetworkFailure => "network_failure",
            Self::RemoteRejected => "remote_rejected",
            Self::DeserializationFailure => "deserialization_failure",
            Self::TaskAborted => "task_aborted",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

/// Ordering applied to a fetched item set. Every ordering is stable, so items
/// that compare equal keep the order the remote returned them in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    PriceDesc,
    PriceAsc,
    Title,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceDesc => "price-desc",
            Self::PriceAsc => "price-asc",
            Self::Title => "title",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price-desc" | "price_desc" => Ok(Self::PriceDesc),
            "price-asc" | "price_asc" => Ok(Self::PriceAsc),
            "title" => Ok(Self::Title),
            other => Err(CoreError::invalid(format!("unknown sort key '{other}'"))),
        }
    }
}
