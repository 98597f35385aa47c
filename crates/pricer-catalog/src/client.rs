//! Typed catalog operations on top of a [`Transport`].

use std::sync::Arc;

use pricer_core::{Credentials, Item, ItemsPage, SortKey, UserSession};
use serde::Serialize;
use serde_json::json;

use crate::error::CatalogError;
use crate::retry::RetryPolicy;
use crate::sanitize;
use crate::transport::{Method, ReqwestTransport, Transport, TransportRequest, TransportResponse};

const LOGIN_PATH: &str = "/auth/login";
const MAX_ERROR_BODY: usize = 256;

#[derive(Serialize)]
struct LoginRequest {
    username: String,
    password: String,
}

/// Which items to keep from a category listing, and in what order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemQuery {
    pub category: String,
    pub sort: SortKey,
    pub limit: usize,
}

impl ItemQuery {
    #[must_use]
    pub fn new(category: impl Into<String>, sort: SortKey, limit: usize) -> Self {
        Self {
            category: category.into(),
            sort,
            limit,
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.category.trim().is_empty() {
            return Err(CatalogError::invalid("category cannot be empty"));
        }
        if self.limit == 0 {
            return Err(CatalogError::invalid("limit must be at least 1"));
        }
        Ok(())
    }

    fn path(&self) -> String {
        format!(
            "/auth/products/category/{}",
            urlencoding::encode(self.category.trim())
        )
    }

    /// Re-filter by category, sort stably, truncate to `limit`.
    ///
    /// The category filter runs even though the endpoint is already
    /// category-scoped; the remote's own filtering is not trusted.
    #[must_use]
    pub fn select(&self, items: Vec<Item>) -> Vec<Item> {
        let mut selected: Vec<Item> = items
            .into_iter()
            .filter(|item| item.in_category(&self.category))
            .collect();
        match self.sort {
            SortKey::PriceDesc => selected.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortKey::PriceAsc => selected.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortKey::Title => selected.sort_by(|a, b| {
                a.title.to_lowercase().cmp(&b.title.to_lowercase())
            }),
        }
        selected.truncate(self.limit);
        selected
    }
}

/// Client for the remote catalog: login, filtered listing, price update.
///
/// Stateless between calls: the bearer token is passed into every operation
/// and never stored. Cloning is cheap and shares the transport.
pub struct CatalogClient<T = ReqwestTransport> {
    transport: Arc<T>,
    retry: RetryPolicy,
}

impl<T> Clone for CatalogClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            retry: self.retry.clone(),
        }
    }
}

impl CatalogClient<ReqwestTransport> {
    /// Build a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Network`] if the HTTP client cannot be built.
    pub fn from_config(config: &pricer_config::PricerConfig) -> Result<Self, CatalogError> {
        let transport = ReqwestTransport::new(&config.catalog)?;
        Ok(Self::new(transport).with_retry(RetryPolicy::from(&config.retry)))
    }
}

impl<T: Transport> CatalogClient<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            retry: RetryPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Log in and return the session, or `None` if the catalog refused.
    ///
    /// Both fields are HTML-escaped before they are logged or sent. Exactly
    /// one request is made; there is no retry.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidArgument`] if either field is blank.
    /// - [`CatalogError::Network`] if the exchange could not complete.
    /// - [`CatalogError::Deserialization`] if a success body is not a session.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserSession>, CatalogError> {
        let credentials = Credentials::new(username, password)?;
        let payload = LoginRequest {
            username: sanitize::escape(credentials.username()),
            password: sanitize::escape(credentials.password()),
        };

        tracing::info!(username = %payload.username, "attempting login");
        let request = TransportRequest::new(Method::Post, LOGIN_PATH)
            .with_body(serde_json::to_value(&payload)?);

        let response = self.transport.send(request).await.inspect_err(|error| {
            tracing::error!(username = %payload.username, %error, "login exchange failed");
        })?;
        tracing::info!(status = response.status, "login response");

        if !response.is_success() {
            tracing::warn!(
                username = %payload.username,
                status = response.status,
                "login rejected"
            );
            return Ok(None);
        }

        let session: UserSession = serde_json::from_str(&response.body)?;
        tracing::info!(username = %payload.username, "login successful");
        Ok(Some(session))
    }

    /// Fetch a category listing, keep matching items, sort and truncate.
    ///
    /// Each attempt is one request. A network failure or a non-success status
    /// starts the next attempt, up to the retry policy's bound; the first
    /// success returns immediately, even when it holds no items.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidArgument`] for a blank token or category, or a
    ///   zero limit. No request is made.
    /// - [`CatalogError::Network`] / [`CatalogError::RemoteRejected`] from the
    ///   final attempt once the bound is exhausted.
    /// - [`CatalogError::Deserialization`] if a success body cannot be parsed.
    pub async fn fetch_filtered_items(
        &self,
        token: &str,
        query: &ItemQuery,
    ) -> Result<Vec<Item>, CatalogError> {
        require_token(token)?;
        query.validate()?;

        let path = query.path();
        let attempts = self.retry.attempts();
        tracing::info!(category = %query.category, limit = query.limit, "fetching items");

        let mut attempt = 1;
        loop {
            let request = TransportRequest::new(Method::Get, path.as_str()).with_bearer(token);
            let failure = match self.transport.send(request).await {
                Ok(response) if response.is_success() => {
                    let page: ItemsPage = serde_json::from_str(&response.body)?;
                    let items = query.select(page.items);
                    tracing::info!(attempt, count = items.len(), "fetched items");
                    return Ok(items);
                }
                Ok(response) => {
                    tracing::warn!(attempt, status = response.status, "item fetch rejected");
                    let retryable = self.retry.should_retry_status(response.status);
                    let error = rejected(response);
                    if !retryable {
                        return Err(error);
                    }
                    error
                }
                Err(error) => {
                    tracing::warn!(attempt, %error, "item fetch failed");
                    CatalogError::Network(error)
                }
            };

            if attempt >= attempts {
                tracing::error!(attempts, error = %failure, "item fetch exhausted retries");
                return Err(failure);
            }

            let delay = self.retry.delay_for(attempt);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            attempt += 1;
        }
    }

    /// Set one item's price. Returns the updated item, or `None` if the
    /// catalog refused. Exactly one request is made.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidArgument`] for a blank token, `item_id == 0`,
    ///   or a negative / non-finite price. No request is made.
    /// - [`CatalogError::Network`] if the exchange could not complete.
    /// - [`CatalogError::Deserialization`] if a success body is not an item.
    pub async fn update_item_price(
        &self,
        item_id: u64,
        new_price: f64,
        token: &str,
    ) -> Result<Option<Item>, CatalogError> {
        require_token(token)?;
        if item_id < 1 {
            return Err(CatalogError::invalid("item id must be greater than 0"));
        }
        if !new_price.is_finite() || new_price < 0.0 {
            return Err(CatalogError::invalid("price cannot be negative"));
        }

        tracing::info!(item_id, new_price, "updating item price");
        let request = TransportRequest::new(Method::Put, format!("/auth/products/{item_id}"))
            .with_bearer(token)
            .with_body(json!({ "price": new_price }));

        let response = self.transport.send(request).await.inspect_err(|error| {
            tracing::error!(item_id, %error, "price update exchange failed");
        })?;

        if !response.is_success() {
            tracing::warn!(item_id, status = response.status, "price update rejected");
            return Ok(None);
        }

        let item: Item = serde_json::from_str(&response.body)?;
        tracing::info!(item_id, price = item.price, "price updated");
        Ok(Some(item))
    }
}

fn require_token(token: &str) -> Result<(), CatalogError> {
    if token.trim().is_empty() {
        return Err(CatalogError::invalid("token cannot be null or empty"));
    }
    Ok(())
}

fn rejected(response: TransportResponse) -> CatalogError {
    let mut message = response.body;
    if message.len() > MAX_ERROR_BODY {
        let mut cut = MAX_ERROR_BODY;
        while !message.is_char_boundary(cut) {
            cut -= 1;
        }
        message.truncate(cut);
    }
    CatalogError::RemoteRejected {
        status: response.status,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn phone(id: u64, price: f64) -> Item {
        Item::new(id, format!("phone-{id}"), price, "smartphones")
    }

    fn prices(items: &[Item]) -> Vec<f64> {
        items.iter().map(|i| i.price).collect()
    }

    #[test]
    fn select_sorts_desc_and_truncates() {
        let query = ItemQuery::new("smartphones", SortKey::PriceDesc, 3);
        let items = vec![phone(1, 1000.0), phone(2, 800.0), phone(3, 900.0), phone(4, 700.0)];
        assert_eq!(prices(&query.select(items)), vec![1000.0, 900.0, 800.0]);
    }

    #[test]
    fn select_refilters_category_case_insensitively() {
        let query = ItemQuery::new("SmartPhones", SortKey::PriceDesc, 10);
        let items = vec![
            phone(1, 10.0),
            Item::new(2, "laptop", 50.0, "laptops"),
            Item::new(3, "Pixel", 20.0, "SMARTPHONES"),
        ];
        let ids: Vec<u64> = query.select(items).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn select_is_stable_on_equal_prices() {
        let query = ItemQuery::new("smartphones", SortKey::PriceDesc, 10);
        let items = vec![phone(7, 500.0), phone(3, 900.0), phone(5, 500.0), phone(1, 500.0)];
        let ids: Vec<u64> = query.select(items).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 7, 5, 1]);
    }

    #[test]
    fn select_other_sort_keys() {
        let items = vec![phone(1, 30.0), phone(2, 10.0), phone(3, 20.0)];
        let asc = ItemQuery::new("smartphones", SortKey::PriceAsc, 10);
        assert_eq!(prices(&asc.select(items.clone())), vec![10.0, 20.0, 30.0]);

        let titled = vec![
            Item::new(1, "zeta", 1.0, "smartphones"),
            Item::new(2, "Alpha", 2.0, "smartphones"),
        ];
        let by_title = ItemQuery::new("smartphones", SortKey::Title, 10);
        let titles: Vec<String> = by_title.select(titled).into_iter().map(|i| i.title).collect();
        assert_eq!(titles, vec!["Alpha".to_string(), "zeta".to_string()]);
    }

    #[test]
    fn path_encodes_category() {
        let query = ItemQuery::new("home decoration", SortKey::PriceDesc, 1);
        assert_eq!(query.path(), "/auth/products/category/home%20decoration");
    }

    #[test]
    fn rejected_truncates_long_bodies() {
        let body = "é".repeat(400);
        let err = rejected(TransportResponse::new(500, body));
        match err {
            CatalogError::RemoteRejected { status, message } => {
                assert_eq!(status, 500);
                assert!(message.len() <= MAX_ERROR_BODY);
            }
            other => panic!("unexpected: {other}"),
        }
    }
}
