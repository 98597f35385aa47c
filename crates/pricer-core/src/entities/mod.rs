//! Entity structs for the remote catalog.
//!
//! Field names follow the remote JSON contract (`camelCase` on the wire,
//! `snake_case` in Rust). Everything the core does not interpret is carried
//! through untouched.

mod credentials;
mod item;
mod session;

pub use credentials::Credentials;
pub use item::{Item, ItemsPage};
pub use session::UserSession;
