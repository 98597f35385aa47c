//! # pricer-catalog
//!
//! Token-authenticated HTTP client for the remote catalog service.
//!
//! Layers, leaf first:
//! - [`transport`]: one request/response exchange, no retry, no body inspection
//! - [`retry`]: attempt bound and backoff schedule for reads
//! - [`client`]: `authenticate`, `fetch_filtered_items`, `update_item_price`
//!
//! Remote contract (JSON bodies, bearer token on everything but login):
//!
//! | Operation | Request |
//! |---|---|
//! | login | `POST /auth/login` `{username, password}` |
//! | category listing | `GET /auth/products/category/{category}` |
//! | price update | `PUT /auth/products/{id}` `{price}` |

pub mod client;
pub mod retry;
pub mod sanitize;
pub mod transport;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

mod error;


pub use client::{CatalogClient, ItemQuery};
pub use error::CatalogError;
pub use retry::{Backoff, RetryPolicy};
pub use transport::{
    Method, ReqwestTransport, Transport, TransportError, TransportRequest, TransportResponse,
};
