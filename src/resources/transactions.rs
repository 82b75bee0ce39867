//! The Transactions API: initializing, confirming, and inspecting charges.
//!
//! Confirmation endpoints (`verify`, `charge_authorization`,
//! `partial_debit`) opt into the terminal-status check: Paystack reports a
//! declined charge with HTTP 200 and `status: true`, and only the nested
//! `data.status` reveals the failure.

use serde::Serialize;
use serde_json::Value;

use crate::{
    client::Paystack,
    error::Result,
    resources::ListQuery,
    response::ApiResponse,
    transport::RequestDescriptor,
    validate::{require_fields, validate_amount, validate_email},
};

/// Parameters for [`Transactions::initialize`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct InitializeTransaction {
    /// Customer's email address.
    pub email: String,
    /// Amount in the smallest currency unit (kobo for NGN).
    pub amount: u64,
    /// Transaction currency; the integration's default when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Unique reference; Paystack generates one when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// URL to redirect to after payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Plan code to subscribe the customer to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Payment channels to allow, e.g. `["card", "bank_transfer"]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    /// Structured metadata stored with the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Parameters for [`Transactions::charge_authorization`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChargeAuthorization {
    /// Customer's email address.
    pub email: String,
    /// Amount in the smallest currency unit.
    pub amount: u64,
    /// Reusable authorization code from a previous charge.
    pub authorization_code: String,
    /// Transaction currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Unique reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Parameters for [`Transactions::partial_debit`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct PartialDebit {
    /// Reusable authorization code.
    pub authorization_code: String,
    /// Transaction currency.
    pub currency: String,
    /// Amount in the smallest currency unit.
    pub amount: u64,
    /// Customer's email address.
    pub email: String,
    /// Minimum amount to accept when the full amount cannot be debited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at_least: Option<u64>,
    /// Unique reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Handle for the Transactions API, borrowed from a [`Paystack`] client.
#[derive(Debug)]
pub struct Transactions<'a> {
    pub(crate) client: &'a Paystack,
}

impl Transactions<'_> {
    /// Initializes a transaction and returns an authorization URL.
    ///
    /// # Errors
    ///
    /// Validation error for a malformed email or an amount below the
    /// currency minimum; otherwise any taxonomy kind from the API.
    pub async fn initialize(&self, params: InitializeTransaction) -> Result<ApiResponse> {
        validate_email(&params.email)?;
        validate_amount(params.amount, params.currency.as_deref().unwrap_or("NGN"))?;
        let request = RequestDescriptor::post("transaction/initialize").json(&params)?;
        self.client.request(request).await
    }

    /// Confirms the status of a transaction by reference.
    ///
    /// A declined charge surfaces as
    /// [`PaystackError::TransactionFailure`](crate::PaystackError::TransactionFailure)
    /// even though the API answers HTTP 200.
    ///
    /// # Errors
    ///
    /// Validation error for a blank reference; otherwise any taxonomy kind.
    pub async fn verify(&self, reference: &str) -> Result<ApiResponse> {
        require_fields(&[("reference", Some(reference))])?;
        let request =
            RequestDescriptor::get(format!("transaction/verify/{reference}")).confirms_transaction();
        self.client.request(request).await
    }

    /// Lists transactions on the integration.
    ///
    /// # Errors
    ///
    /// Any taxonomy kind from the API.
    pub async fn list(&self, query: ListQuery) -> Result<ApiResponse> {
        self.client
            .request(query.apply(RequestDescriptor::get("transaction")))
            .await
    }

    /// Fetches a single transaction by id.
    ///
    /// # Errors
    ///
    /// Any taxonomy kind from the API.
    pub async fn fetch(&self, transaction_id: u64) -> Result<ApiResponse> {
        self.client
            .request(RequestDescriptor::get(format!("transaction/{transaction_id}")))
            .await
    }

    /// Charges a previously stored authorization.
    ///
    /// # Errors
    ///
    /// Validation error for a malformed email, invalid amount, or blank
    /// authorization code; otherwise any taxonomy kind.
    pub async fn charge_authorization(&self, params: ChargeAuthorization) -> Result<ApiResponse> {
        validate_email(&params.email)?;
        validate_amount(params.amount, params.currency.as_deref().unwrap_or("NGN"))?;
        require_fields(&[("authorization_code", Some(&params.authorization_code))])?;
        let request = RequestDescriptor::post("transaction/charge_authorization")
            .json(&params)?
            .confirms_transaction();
        self.client.request(request).await
    }

    /// Views the timeline of a transaction.
    ///
    /// # Errors
    ///
    /// Validation error for a blank id or reference; otherwise any taxonomy
    /// kind.
    pub async fn timeline(&self, id_or_reference: &str) -> Result<ApiResponse> {
        require_fields(&[("id_or_reference", Some(id_or_reference))])?;
        self.client
            .request(RequestDescriptor::get(format!("transaction/timeline/{id_or_reference}")))
            .await
    }

    /// Returns total volume received on the integration.
    ///
    /// # Errors
    ///
    /// Any taxonomy kind from the API.
    pub async fn totals(&self) -> Result<ApiResponse> {
        self.client.request(RequestDescriptor::get("transaction/totals")).await
    }

    /// Exports transactions as a downloadable file.
    ///
    /// # Errors
    ///
    /// Any taxonomy kind from the API.
    pub async fn export(&self) -> Result<ApiResponse> {
        self.client.request(RequestDescriptor::get("transaction/export")).await
    }

    /// Debits part of the amount on a stored authorization.
    ///
    /// # Errors
    ///
    /// Validation error for missing fields, a malformed email, or an amount
    /// below the currency minimum; otherwise any taxonomy kind.
    pub async fn partial_debit(&self, params: PartialDebit) -> Result<ApiResponse> {
        require_fields(&[
            ("authorization_code", Some(&params.authorization_code)),
            ("currency", Some(&params.currency)),
        ])?;
        validate_email(&params.email)?;
        validate_amount(params.amount, &params.currency)?;
        let request = RequestDescriptor::post("transaction/partial_debit")
            .json(&params)?
            .confirms_transaction();
        self.client.request(request).await
    }
}
