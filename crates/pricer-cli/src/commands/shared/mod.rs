pub mod limit;
pub mod query;
pub mod session;

/// Shown whenever the catalog cannot be reached at all.
pub const UNREACHABLE: &str =
    "Unable to reach the catalog service. Please check your connection and try again.";
