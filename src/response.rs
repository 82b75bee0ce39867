//! Response envelope classification.
//!
//! Every Paystack response wraps its payload in the same JSON envelope:
//! `{status, message, data, meta?, errors?}`. The envelope's `status` field
//! is authoritative: the API reports business failures with `status: false`
//! under HTTP 200, and payment-confirmation endpoints go one step further
//! and report a failed charge as `status: true` with a terminal
//! `data.status`. [`classify`] recovers the real outcome from a raw response
//! by evaluating a fixed, ordered rule list:
//!
//! 1. unparseable body → [`PaystackError::InvalidResponse`]
//! 2. body not an object, or missing both `status` and `message` →
//!    [`PaystackError::InvalidResponse`]
//! 3. non-2xx HTTP status → mapped by status code
//! 4. 2xx with `status != true` → [`PaystackError::Validation`] when the
//!    envelope carries an `errors` mapping, else [`PaystackError::Api`]
//! 5. 2xx, `status: true`, transaction check requested, terminal
//!    `data.status` → [`PaystackError::TransactionFailure`]
//! 6. otherwise success
//!
//! The order matters: a 2xx response is ambiguous on its own, and evaluating
//! the body checks out of order silently reclassifies real failures as
//! successes.

use serde_json::{Map, Value};
use tracing::warn;

use crate::{
    error::{ApiFailure, PaystackError, Result},
    transport::RawResponse,
};

/// `data.status` values that mark a payment as terminally unsuccessful.
const TERMINAL_STATUSES: [&str; 3] = ["failed", "abandoned", "cancelled"];

/// Gateway explanation used when the envelope carries none.
const DEFAULT_GATEWAY_RESPONSE: &str = "Transaction failed";

/// Message used when an error envelope carries no `message` field.
const UNKNOWN_API_ERROR: &str = "Unknown API error";

/// Whether [`classify`] should inspect `data.status` for terminal markers.
///
/// Only payment-confirmation endpoints (verify, charge authorization,
/// partial debit) use the terminal-status convention. Applying the check
/// globally would misclassify unrelated resources whose `data.status`
/// happens to hold a string like `"failed"`, so the descriptor for each
/// call opts in explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransactionCheck {
    /// Do not inspect `data.status` (the default).
    #[default]
    Ignore,
    /// Treat a terminal `data.status` as a transaction failure.
    Enforce,
}

/// A successful API outcome.
///
/// `data` defaults to JSON `null` when the envelope omits it; `meta`
/// defaults to an empty map. A value of this type is never constructed for
/// a failed call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// The envelope's `data` payload.
    pub data: Value,
    /// Pagination and listing metadata from the envelope's `meta` field.
    pub meta: Map<String, Value>,
    /// The envelope's human-readable `message`.
    pub message: String,
}

impl ApiResponse {
    /// Returns true when the response carries pagination metadata.
    #[must_use]
    pub fn is_paginated(&self) -> bool {
        !self.meta.is_empty()
    }
}

/// Classifies a raw HTTP response into an outcome.
///
/// This is a pure function of the response and the transaction-check marker:
/// classifying the same response twice yields equal outcomes.
///
/// # Errors
///
/// Exactly one of the taxonomy kinds in [`PaystackError`], per the rule
/// order in the module docs. Never returns an error alongside a success.
pub fn classify(raw: &RawResponse, check: TransactionCheck) -> Result<ApiResponse> {
    let value: Value = match serde_json::from_str(&raw.body) {
        Ok(value) => value,
        Err(e) => {
            warn!(status = raw.status, "response body is not valid JSON");
            return Err(invalid_response(format!("invalid JSON response: {e}"), raw));
        }
    };

    let Some(envelope) = value.as_object() else {
        return Err(invalid_response(
            format!("expected a JSON object envelope, got {}", json_type_name(&value)),
            raw,
        ));
    };

    if !envelope.contains_key("status") && !envelope.contains_key("message") {
        return Err(invalid_response(
            "response envelope is missing both 'status' and 'message' fields",
            raw,
        ));
    }

    if !(200..300).contains(&raw.status) {
        return Err(error_from_status(envelope, raw));
    }

    let message = envelope.get("message").and_then(Value::as_str);

    // HTTP 2xx does not imply success: the envelope's own status field wins.
    if envelope.get("status").and_then(Value::as_bool) != Some(true) {
        let failure = api_failure(message.unwrap_or(UNKNOWN_API_ERROR), raw);
        if let Some(errors) = envelope.get("errors").and_then(Value::as_object) {
            return Err(PaystackError::Validation {
                failure,
                field_errors: field_error_map(errors),
            });
        }
        return Err(PaystackError::Api(failure));
    }

    if check == TransactionCheck::Enforce
        && let Some(data) = envelope.get("data").and_then(Value::as_object)
        && let Some(transaction_status) = data.get("status").and_then(Value::as_str)
        && TERMINAL_STATUSES.contains(&transaction_status)
    {
        warn!(transaction_status, "transaction reached a terminal negative state");
        let gateway_response = data
            .get("gateway_response")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_GATEWAY_RESPONSE)
            .to_owned();
        return Err(PaystackError::TransactionFailure {
            failure: api_failure(format!("Transaction failed: {transaction_status}"), raw),
            gateway_response,
        });
    }

    Ok(ApiResponse {
        data: envelope.get("data").cloned().unwrap_or(Value::Null),
        meta: envelope.get("meta").and_then(Value::as_object).cloned().unwrap_or_default(),
        message: message.unwrap_or_default().to_owned(),
    })
}

/// Maps a non-2xx status to the most specific error kind.
fn error_from_status(envelope: &Map<String, Value>, raw: &RawResponse) -> PaystackError {
    let message = envelope
        .get("message")
        .and_then(Value::as_str)
        .map_or_else(|| format!("HTTP {} error", raw.status), ToOwned::to_owned);
    let failure = api_failure(message, raw);

    match raw.status {
        400 => PaystackError::Validation {
            failure,
            field_errors: envelope
                .get("errors")
                .and_then(Value::as_object)
                .map(field_error_map)
                .unwrap_or_default(),
        },
        401 => PaystackError::Authentication(failure),
        404 => PaystackError::NotFound(failure),
        429 => PaystackError::RateLimit { failure, retry_after: raw.retry_after },
        500..=599 => PaystackError::Server(failure),
        _ => PaystackError::Api(failure),
    }
}

fn api_failure(message: impl Into<String>, raw: &RawResponse) -> ApiFailure {
    ApiFailure {
        message: message.into(),
        status_code: Some(raw.status),
        request_id: raw.request_id.clone(),
        body: Some(raw.body.clone()),
    }
}

fn invalid_response(message: impl Into<String>, raw: &RawResponse) -> PaystackError {
    PaystackError::InvalidResponse(api_failure(message, raw))
}

fn field_error_map(errors: &Map<String, Value>) -> std::collections::BTreeMap<String, String> {
    errors
        .iter()
        .map(|(field, detail)| {
            let detail = detail
                .as_str()
                .map_or_else(|| detail.to_string(), ToOwned::to_owned);
            (field.clone(), detail)
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
