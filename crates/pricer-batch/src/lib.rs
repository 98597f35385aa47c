//! # pricer-batch
//!
//! Bulk percentage price updates over a set of catalog items.
//!
//! One update per item is dispatched concurrently through
//! [`pricer_catalog::CatalogClient`]. Failures are isolated per item and
//! joined into a [`BatchResult`]; only pre-flight validation (a percentage
//! outside `[0, 100]`) is raised as an error.

mod error;
mod outcome;
mod updater;

pub use error::BatchError;
pub use outcome::{BatchResult, BatchState, UpdateOutcome, UpdateStatus};
pub use updater::BatchUpdater;
