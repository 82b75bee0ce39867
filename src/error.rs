//! Error types for the Paystack client.
//!
//! This module defines all error types that can occur when talking to the
//! Paystack API. All errors implement the standard [`std::error::Error`]
//! trait via [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **Credential errors** ([`PaystackError::Authentication`]): rejected or
//!   malformed secret keys
//! - **Request errors** ([`PaystackError::Validation`],
//!   [`PaystackError::NotFound`], [`PaystackError::RateLimit`]): the API
//!   refused the request
//! - **Provider errors** ([`PaystackError::Server`], [`PaystackError::Api`],
//!   [`PaystackError::TransactionFailure`]): the API accepted the request but
//!   the operation did not succeed
//! - **Wire errors** ([`PaystackError::Network`],
//!   [`PaystackError::InvalidResponse`]): no usable response was obtained
//!
//! # Examples
//!
//! ```
//! use paystack_client::{ApiFailure, PaystackError};
//!
//! let err = PaystackError::NotFound(ApiFailure::new("Transaction not found"));
//! assert!(err.to_string().contains("Transaction not found"));
//! ```

use std::{collections::BTreeMap, fmt};

use thiserror::Error;

/// Result type alias for Paystack operations.
///
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, PaystackError>;

/// Context shared by every API-originated error.
///
/// Carries enough information for the caller to log the failure verbatim:
/// the provider's message, the HTTP status code when a response was received,
/// the request-correlation id when the provider exposed one via response
/// headers, and the raw response body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiFailure {
    /// Human-readable message, usually taken from the response envelope.
    pub message: String,
    /// HTTP status code of the response, if one was received.
    pub status_code: Option<u16>,
    /// Request-correlation id from the response headers, if present.
    pub request_id: Option<String>,
    /// Raw response body, if one was received.
    pub body: Option<String>,
}

impl ApiFailure {
    /// Creates a failure context carrying only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), ..Self::default() }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(code) = self.status_code {
            write!(f, " (HTTP {code})")?;
        }
        if let Some(id) = &self.request_id {
            write!(f, " [request id: {id}]")?;
        }
        Ok(())
    }
}

/// Errors produced by the Paystack client.
///
/// The taxonomy is closed and ordered by specificity: when several kinds
/// could apply to a response, the classifier picks the most specific one.
/// No variant is ever raised alongside a success value.
///
/// # The HTTP-200 trap
///
/// Paystack returns HTTP 200 for three distinct outcomes: true success, a
/// declared business failure (`status: false` in the envelope), and a masked
/// transaction failure (`status: true` but a terminal `data.status`). Only
/// [`Validation`](Self::Validation), [`Api`](Self::Api), and
/// [`TransactionFailure`](Self::TransactionFailure) can surface from an
/// HTTP 200; match on them rather than on status codes.
///
/// # Error Recovery
///
/// - [`RateLimit`](Self::RateLimit): wait for `retry_after` seconds, then
///   retry. The client itself never retries.
/// - [`Network`](Self::Network) / [`Server`](Self::Server): transient; retry
///   with backoff at the call site.
/// - [`Validation`](Self::Validation): fix the named fields and resubmit.
/// - [`Authentication`](Self::Authentication): check the key and its
///   test/live mode.
/// - [`TransactionFailure`](Self::TransactionFailure): surface
///   `gateway_response` to the payer; the charge will not complete.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaystackError {
    /// The secret key was rejected.
    ///
    /// Raised at construction when the key does not carry a recognized
    /// `sk_test` / `sk_live` prefix, or by the API as HTTP 401 when the key
    /// is invalid, revoked, or used in the wrong environment.
    #[error("authentication failed: {0}")]
    Authentication(ApiFailure),

    /// The request data was rejected.
    ///
    /// Raised pre-flight by the local validators, by the API as HTTP 400, or
    /// by an HTTP 200 envelope with `status: false` and an `errors` mapping.
    /// `field_errors` carries one message per offending field.
    #[error("validation failed: {failure}")]
    Validation {
        /// Shared failure context.
        failure: ApiFailure,
        /// Per-field validation messages, keyed by field name.
        field_errors: BTreeMap<String, String>,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("not found: {0}")]
    NotFound(ApiFailure),

    /// Too many requests (HTTP 429).
    ///
    /// `retry_after` is the number of seconds from the `Retry-After` response
    /// header when that header was present and numeric; it is `None`
    /// otherwise, never zero.
    #[error("rate limit exceeded: {failure}")]
    RateLimit {
        /// Shared failure context.
        failure: ApiFailure,
        /// Seconds to wait before retrying, when the provider supplied one.
        retry_after: Option<u64>,
    },

    /// Paystack-side failure (HTTP 5xx). Usually temporary.
    #[error("server error: {0}")]
    Server(ApiFailure),

    /// Any other API-reported failure.
    ///
    /// Covers non-2xx statuses with no more specific mapping, and HTTP 200
    /// envelopes with `status: false` but no field errors.
    #[error("API request failed: {0}")]
    Api(ApiFailure),

    /// The request never produced a response.
    ///
    /// Connect timeouts, read timeouts, DNS failures, refused or reset
    /// connections. The message states which failure occurred and, for
    /// timeouts, the configured duration.
    #[error("network error: {0}")]
    Network(String),

    /// A response was received but could not be interpreted.
    ///
    /// The body was not valid JSON, was not a JSON object, or was missing
    /// the envelope's `status` and `message` fields.
    #[error("invalid response: {0}")]
    InvalidResponse(ApiFailure),

    /// A payment reached a terminal negative state under HTTP 200.
    ///
    /// Raised when a payment-confirmation endpoint returns `status: true`
    /// but `data.status` is `failed`, `abandoned`, or `cancelled`.
    /// `gateway_response` carries the processor's explanation, e.g.
    /// `"Insufficient funds"`.
    #[error("transaction failed: {failure}")]
    TransactionFailure {
        /// Shared failure context.
        failure: ApiFailure,
        /// Explanation text supplied by the payment gateway.
        gateway_response: String,
    },
}

impl PaystackError {
    /// Returns the shared API failure context, when this kind carries one.
    ///
    /// [`Network`](Self::Network) errors happen before any response exists
    /// and therefore return `None`.
    #[must_use]
    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            Self::Authentication(f)
            | Self::NotFound(f)
            | Self::Server(f)
            | Self::Api(f)
            | Self::InvalidResponse(f) => Some(f),
            Self::Validation { failure, .. }
            | Self::RateLimit { failure, .. }
            | Self::TransactionFailure { failure, .. } => Some(failure),
            Self::Network(_) => None,
        }
    }

    /// Returns the HTTP status code attached to this error, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.failure().and_then(|f| f.status_code)
    }

    /// Returns the request-correlation id attached to this error, if any.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.failure().and_then(|f| f.request_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure_with_context() -> ApiFailure {
        ApiFailure {
            message: "Invalid key".to_owned(),
            status_code: Some(401),
            request_id: Some("req-123".to_owned()),
            body: Some(r#"{"status":false}"#.to_owned()),
        }
    }

    #[test]
    fn test_api_failure_display_message_only() {
        let failure = ApiFailure::new("something broke");
        assert_eq!(failure.to_string(), "something broke");
    }

    #[test]
    fn test_api_failure_display_full_context() {
        let failure = failure_with_context();
        assert_eq!(failure.to_string(), "Invalid key (HTTP 401) [request id: req-123]");
    }

    #[test]
    fn test_error_display_authentication() {
        let error = PaystackError::Authentication(ApiFailure::new("bad key"));
        assert_eq!(error.to_string(), "authentication failed: bad key");
    }

    #[test]
    fn test_error_display_validation() {
        let error = PaystackError::Validation {
            failure: ApiFailure::new("Validation failed"),
            field_errors: BTreeMap::new(),
        };
        assert!(error.to_string().contains("Validation failed"));
    }

    #[test]
    fn test_error_display_network() {
        let error = PaystackError::Network("connection refused".to_owned());
        assert_eq!(error.to_string(), "network error: connection refused");
    }

    #[test]
    fn test_status_code_accessor() {
        let error = PaystackError::Authentication(failure_with_context());
        assert_eq!(error.status_code(), Some(401));
    }

    #[test]
    fn test_request_id_accessor() {
        let error = PaystackError::Server(failure_with_context());
        assert_eq!(error.request_id(), Some("req-123"));
    }

    #[test]
    fn test_network_error_has_no_failure_context() {
        let error = PaystackError::Network("dns failure".to_owned());
        assert!(error.failure().is_none());
        assert_eq!(error.status_code(), None);
        assert_eq!(error.request_id(), None);
    }

    #[test]
    fn test_rate_limit_carries_retry_after() {
        let error = PaystackError::RateLimit {
            failure: ApiFailure::new("slow down"),
            retry_after: Some(120),
        };
        if let PaystackError::RateLimit { retry_after, .. } = &error {
            assert_eq!(*retry_after, Some(120));
        } else {
            unreachable!("expected RateLimit");
        }
    }

    #[test]
    fn test_transaction_failure_carries_gateway_response() {
        let error = PaystackError::TransactionFailure {
            failure: ApiFailure::new("Transaction failed: failed"),
            gateway_response: "Insufficient funds".to_owned(),
        };
        if let PaystackError::TransactionFailure { gateway_response, .. } = &error {
            assert_eq!(gateway_response, "Insufficient funds");
        } else {
            unreachable!("expected TransactionFailure");
        }
    }

    #[test]
    fn test_errors_compare_equal_by_value() {
        let a = PaystackError::NotFound(failure_with_context());
        let b = PaystackError::NotFound(failure_with_context());
        assert_eq!(a, b);
    }
}
