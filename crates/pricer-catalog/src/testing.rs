//! In-memory [`Transport`] double for tests.
//!
//! Replies are scripted per `(method, path)` and consumed in order; anything
//! unscripted goes to a fallback handler. Every request is recorded, and the
//! peak number of concurrently in-flight requests is tracked so fan-out
//! behavior can be asserted.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use serde_json::{Value, json};

use crate::transport::{Method, Transport, TransportError, TransportRequest, TransportResponse};

/// Outcome of one scripted exchange.
pub type Reply = Result<TransportResponse, TransportError>;

type Handler = Box<dyn Fn(&TransportRequest) -> Reply + Send + Sync>;

/// Build a JSON reply with the given status.
#[must_use]
pub fn json_reply(status: u16, body: &Value) -> Reply {
    Ok(TransportResponse::new(status, body.to_string()))
}

/// Build a reply with a plain-text body.
#[must_use]
pub fn text_reply(status: u16, body: &str) -> Reply {
    Ok(TransportResponse::new(status, body))
}

/// Build a failed exchange.
#[must_use]
pub fn network_failure() -> Reply {
    Err(TransportError::Connect("connection refused".into()))
}

pub struct ScriptedTransport {
    script: Mutex<HashMap<(Method, String), VecDeque<Reply>>>,
    fallback: Handler,
    requests: Mutex<Vec<TransportRequest>>,
    latency: Option<Duration>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl Default for ScriptedTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedTransport {
    /// Unscripted requests get a 404.
    #[must_use]
    pub fn new() -> Self {
        Self {
            script: Mutex::new(HashMap::new()),
            fallback: Box::new(|_| text_reply(404, "not scripted")),
            requests: Mutex::new(Vec::new()),
            latency: None,
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    /// Unscripted `PUT /auth/products/{id}` requests succeed and echo the
    /// requested price back as the updated item.
    #[must_use]
    pub fn echoing_price_updates() -> Self {
        Self::new().with_fallback(echo_price_update)
    }

    #[must_use]
    pub fn with_fallback(
        mut self,
        handler: impl Fn(&TransportRequest) -> Reply + Send + Sync + 'static,
    ) -> Self {
        self.fallback = Box::new(handler);
        self
    }

    /// Sleep this long inside every exchange.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Queue `reply` for the next matching request.
    #[must_use]
    pub fn push(self, method: Method, path: &str, reply: Reply) -> Self {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    /// Every request received so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Highest number of exchanges that were in flight at the same time.
    #[must_use]
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    fn next_reply(&self, request: &TransportRequest) -> Reply {
        let scripted = self
            .script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(&(request.method, request.path.clone()))
            .and_then(VecDeque::pop_front);
        scripted.unwrap_or_else(|| (self.fallback)(request))
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        let reply = self.next_reply(&request);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        reply
    }
}

/// Fallback used by [`ScriptedTransport::echoing_price_updates`].
pub fn echo_price_update(request: &TransportRequest) -> Reply {
    let id = request
        .path
        .strip_prefix("/auth/products/")
        .and_then(|rest| rest.parse::<u64>().ok());
    let price = request.body.as_ref().and_then(|b| b.get("price")).cloned();
    match (request.method, id, price) {
        (Method::Put, Some(id), Some(price)) => json_reply(
            200,
            &json!({
                "id": id,
                "title": format!("item-{id}"),
                "price": price,
                "category": "smartphones"
            }),
        ),
        _ => text_reply(404, "not scripted"),
    }
}
