//! HTTP transport layer.
//!
//! This module performs exactly one HTTP round trip per call and translates
//! transport-level failures into [`PaystackError::Network`] before any
//! business-logic interpretation happens. Anything that produced a response
//! (4xx and 5xx included) is handed back as a [`RawResponse`] for the
//! classifier to interpret; the transport itself never raises on a status
//! code.
//!
//! Requests are described by a [`RequestDescriptor`] built fresh per call:
//! method, path, optional JSON body, query parameters, whether the bearer
//! header is attached, and an optional idempotency key for mutating calls.

use std::{sync::LazyLock, time::Duration};

use reqwest::{
    Client, Method,
    header::{AUTHORIZATION, RETRY_AFTER},
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::{
    error::{ApiFailure, PaystackError, Result},
    response::TransactionCheck,
};

pub mod config;

pub use config::HttpConfig;

/// Response headers checked for a request-correlation id, first match wins.
const REQUEST_ID_HEADERS: [&str; 2] = ["x-amzn-requestid", "cf-ray"];

/// User agent attached to every request.
const USER_AGENT: &str = concat!("paystack-client/", env!("CARGO_PKG_VERSION"));

/// Default HTTP client with connection pooling enabled.
///
/// Using a singleton avoids recreating the client per transport instance,
/// preserving connection pooling across all default transports.
static DEFAULT_HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .pool_max_idle_per_host(10)
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to create default HTTP client")
});

/// Description of a single API request.
///
/// Constructed fresh per call and never reused. The bearer header is
/// attached by default; [`public`](Self::public) suppresses it for endpoints
/// that take no credential.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    method: Method,
    path: String,
    body: Option<Value>,
    query: Vec<(String, String)>,
    authenticated: bool,
    idempotency_key: Option<String>,
    transaction_check: TransactionCheck,
}

impl RequestDescriptor {
    /// Creates a descriptor for the given method and endpoint path.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: Vec::new(),
            authenticated: true,
            idempotency_key: None,
            transaction_check: TransactionCheck::default(),
        }
    }

    /// Creates a GET descriptor.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a POST descriptor.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Creates a PUT descriptor.
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Creates a DELETE descriptor.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attaches a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`PaystackError::Validation`] when the payload cannot be
    /// serialized to JSON.
    pub fn json(mut self, body: &impl Serialize) -> Result<Self> {
        let body = serde_json::to_value(body).map_err(|e| PaystackError::Validation {
            failure: ApiFailure::new(format!("could not serialize request body: {e}")),
            field_errors: std::collections::BTreeMap::new(),
        })?;
        self.body = Some(body);
        Ok(self)
    }

    /// Appends one query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Appends a query parameter when a value is present.
    #[must_use]
    pub fn query_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Suppresses the bearer header for endpoints taking no credential.
    #[must_use]
    pub fn public(mut self) -> Self {
        self.authenticated = false;
        self
    }

    /// Attaches an idempotency key, sent as the `Idempotency-Key` header.
    ///
    /// Only meaningful for mutating calls.
    #[must_use]
    pub fn idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Marks this call as a payment confirmation whose `data.status` must be
    /// checked for terminal negative markers.
    #[must_use]
    pub fn confirms_transaction(mut self) -> Self {
        self.transaction_check = TransactionCheck::Enforce;
        self
    }

    /// Whether the bearer header should be attached.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// The transaction-check marker for the classifier.
    #[must_use]
    pub fn transaction_check(&self) -> TransactionCheck {
        self.transaction_check
    }
}

/// A raw wire-level response, before classification.
///
/// Carries everything the classifier needs: status code, body text, the
/// correlation id extracted from the response headers, and the already
/// parsed `Retry-After` value (`None` when the header was absent or not
/// numeric, never zero).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body text.
    pub body: String,
    /// Request-correlation id, when a known header was present.
    pub request_id: Option<String>,
    /// Numeric `Retry-After` header value in seconds, when present.
    pub retry_after: Option<u64>,
}

/// HTTP transport over a pooled reqwest client.
///
/// Cheap to clone; clones share the underlying connection pool. All state is
/// read-only after construction, so a transport can serve concurrent calls
/// from multiple tasks.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    timeout_secs: u64,
    connect_timeout_secs: u64,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    /// Creates a transport over the shared default client.
    ///
    /// Default configuration: 10 s request timeout, 5 s connect timeout,
    /// 10 idle connections per host.
    #[must_use]
    pub fn new() -> Self {
        let defaults = HttpConfig::default();
        Self {
            client: DEFAULT_HTTP_CLIENT.clone(),
            timeout_secs: defaults.timeout_secs,
            connect_timeout_secs: defaults.connect_timeout_secs,
        }
    }

    /// Creates a transport with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is out of bounds or the HTTP
    /// client cannot be constructed.
    pub fn with_config(config: &HttpConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| PaystackError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
            connect_timeout_secs: config.connect_timeout_secs,
        })
    }

    /// Performs one HTTP round trip.
    ///
    /// Any response at all, regardless of status code, is returned as a
    /// [`RawResponse`]; interpreting it is the classifier's job.
    ///
    /// # Errors
    ///
    /// Returns [`PaystackError::Network`] when no response was received:
    /// connect timeout, read timeout, DNS failure, refused or reset
    /// connection.
    #[instrument(skip(self, base_url, request, bearer), fields(method = %request.method, path = %request.path))]
    pub async fn execute(
        &self,
        base_url: &Url,
        request: &RequestDescriptor,
        bearer: Option<&str>,
    ) -> Result<RawResponse> {
        let url = build_url(base_url, &request.path)?;

        let mut builder = self.client.request(request.method.clone(), url);

        if request.authenticated
            && let Some(bearer) = bearer
        {
            builder = builder.header(AUTHORIZATION, bearer);
        }
        if let Some(key) = &request.idempotency_key {
            builder = builder.header("Idempotency-Key", key);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.network_error(&e))?;

        let status = response.status().as_u16();
        let request_id = REQUEST_ID_HEADERS.iter().find_map(|header| {
            response
                .headers()
                .get(*header)
                .and_then(|value| value.to_str().ok())
                .map(ToOwned::to_owned)
        });
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse().ok());

        debug!(status, request_id = request_id.as_deref(), "response received");

        let body = response.text().await.map_err(|e| self.network_error(&e))?;

        Ok(RawResponse { status, body, request_id, retry_after })
    }

    /// Maps a reqwest failure to a network error naming what went wrong.
    fn network_error(&self, err: &reqwest::Error) -> PaystackError {
        if err.is_timeout() && err.is_connect() {
            PaystackError::Network(format!(
                "connection timed out after {}s",
                self.connect_timeout_secs
            ))
        } else if err.is_timeout() {
            PaystackError::Network(format!("request timed out after {}s", self.timeout_secs))
        } else if err.is_connect() {
            PaystackError::Network(format!("connection error: {err}"))
        } else {
            PaystackError::Network(format!("request failed: {err}"))
        }
    }
}

/// Joins the base URL and an endpoint path, normalizing slashes.
fn build_url(base_url: &Url, path: &str) -> Result<Url> {
    let joined = format!("{}/{}", base_url.as_str().trim_end_matches('/'), path.trim_start_matches('/'));
    Url::parse(&joined).map_err(|e| PaystackError::Validation {
        failure: ApiFailure::new(format!("invalid request path '{path}': {e}")),
        field_errors: std::collections::BTreeMap::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_defaults() {
        let request = RequestDescriptor::get("transaction");
        assert!(request.is_authenticated());
        assert_eq!(request.transaction_check(), TransactionCheck::Ignore);
        assert!(request.body.is_none());
        assert!(request.query.is_empty());
        assert!(request.idempotency_key.is_none());
    }

    #[test]
    fn test_descriptor_methods() {
        assert_eq!(RequestDescriptor::get("a").method, Method::GET);
        assert_eq!(RequestDescriptor::post("a").method, Method::POST);
        assert_eq!(RequestDescriptor::put("a").method, Method::PUT);
        assert_eq!(RequestDescriptor::delete("a").method, Method::DELETE);
    }

    #[test]
    fn test_descriptor_json_body() {
        let request = RequestDescriptor::post("transaction/initialize")
            .json(&serde_json::json!({"email": "a@b.co", "amount": 5000}))
            .unwrap();
        assert_eq!(request.body.unwrap()["amount"], 5000);
    }

    #[test]
    fn test_descriptor_public_suppresses_auth() {
        let request = RequestDescriptor::get("bank/resolve").public();
        assert!(!request.is_authenticated());
    }

    #[test]
    fn test_descriptor_idempotency_key() {
        let request = RequestDescriptor::post("transfer").idempotency_key("txn-2024-001");
        assert_eq!(request.idempotency_key.as_deref(), Some("txn-2024-001"));
    }

    #[test]
    fn test_descriptor_confirms_transaction() {
        let request = RequestDescriptor::get("transaction/verify/ref").confirms_transaction();
        assert_eq!(request.transaction_check(), TransactionCheck::Enforce);
    }

    #[test]
    fn test_descriptor_query_building() {
        let request = RequestDescriptor::get("transaction")
            .query("perPage", 50)
            .query_opt("page", Some(2))
            .query_opt("status", None::<&str>);
        assert_eq!(request.query.len(), 2);
        assert_eq!(request.query[0], ("perPage".to_owned(), "50".to_owned()));
        assert_eq!(request.query[1], ("page".to_owned(), "2".to_owned()));
    }

    #[test]
    fn test_build_url_joins_segments() {
        let base = Url::parse("https://api.paystack.co").unwrap();
        let url = build_url(&base, "transaction/initialize").unwrap();
        assert_eq!(url.as_str(), "https://api.paystack.co/transaction/initialize");
    }

    #[test]
    fn test_build_url_normalizes_slashes() {
        let base = Url::parse("https://api.paystack.co/").unwrap();
        let url = build_url(&base, "/transaction").unwrap();
        assert_eq!(url.as_str(), "https://api.paystack.co/transaction");
    }

    #[test]
    fn test_transport_new_uses_defaults() {
        let transport = HttpTransport::new();
        assert_eq!(transport.timeout_secs, 10);
        assert_eq!(transport.connect_timeout_secs, 5);
    }

    #[test]
    fn test_transport_with_config() {
        let config = HttpConfig {
            pool_max_idle_per_host: 4,
            timeout_secs: 30,
            connect_timeout_secs: 10,
        };
        let transport = HttpTransport::with_config(&config).unwrap();
        assert_eq!(transport.timeout_secs, 30);
        assert_eq!(transport.connect_timeout_secs, 10);
    }

    #[test]
    fn test_transport_with_invalid_config_rejected() {
        let config = HttpConfig { timeout_secs: 0, ..Default::default() };
        assert!(HttpTransport::with_config(&config).is_err());
    }

    #[test]
    fn test_transport_clone_shares_pool() {
        let transport = HttpTransport::new();
        let cloned = transport.clone();
        assert_eq!(cloned.timeout_secs, transport.timeout_secs);
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        // Nothing listens on this port; the request never gets a response.
        let transport = HttpTransport::new();
        let base = Url::parse("http://127.0.0.1:1").unwrap();
        let result = transport
            .execute(&base, &RequestDescriptor::get("transaction"), None)
            .await;
        assert!(matches!(result.unwrap_err(), PaystackError::Network(_)));
    }
}
