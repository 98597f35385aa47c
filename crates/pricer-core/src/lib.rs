//! # pricer-core
//!
//! Core types, pricing rules, and error types for pricer.
//!
//! This crate provides the foundational types shared across all pricer crates:
//! - Catalog entities (items, the fetch envelope, the authenticated session)
//! - Transient login credentials with redacted `Debug` output
//! - Percentage price adjustments and two-decimal monetary rounding
//! - Failure kinds and sort keys shared by the client and the batch orchestrator
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod pricing;

pub use entities::{Credentials, Item, ItemsPage, UserSession};
pub use enums::{FailureKind, SortKey};
pub use errors::CoreError;
pub use pricing::{PriceAdjustment, round_price};
