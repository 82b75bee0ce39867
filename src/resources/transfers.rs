//! The Transfers API: sending money to recipients.
//!
//! Transfer initiation is the one mutating call where double submission has
//! direct monetary consequences, so [`InitiateTransfer`] carries an optional
//! idempotency key that is sent as a header, not in the payload.

use serde::Serialize;

use crate::{
    client::Paystack,
    error::Result,
    resources::ListQuery,
    response::ApiResponse,
    transport::RequestDescriptor,
    validate::{require_fields, validate_amount},
};

fn default_source() -> String {
    "balance".to_owned()
}

/// Parameters for [`Transfers::initiate`].
#[derive(Debug, Clone, Serialize)]
pub struct InitiateTransfer {
    /// Where to debit from. Only `balance` is supported by the provider.
    pub source: String,
    /// Amount in the smallest currency unit.
    pub amount: u64,
    /// Recipient code (`RCP_...`) to credit.
    pub recipient: String,
    /// Reason shown on the recipient's statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Transfer currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Unique reference; Paystack generates one when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Idempotency key sent as a header, never serialized into the payload.
    #[serde(skip_serializing)]
    pub idempotency_key: Option<String>,
}

impl Default for InitiateTransfer {
    fn default() -> Self {
        Self {
            source: default_source(),
            amount: 0,
            recipient: String::new(),
            reason: None,
            currency: None,
            reference: None,
            idempotency_key: None,
        }
    }
}

/// Handle for the Transfers API, borrowed from a [`Paystack`] client.
#[derive(Debug)]
pub struct Transfers<'a> {
    pub(crate) client: &'a Paystack,
}

impl Transfers<'_> {
    /// Initiates a transfer to a recipient.
    ///
    /// # Errors
    ///
    /// Validation error for a blank recipient or an amount below the
    /// currency minimum; otherwise any taxonomy kind.
    pub async fn initiate(&self, params: InitiateTransfer) -> Result<ApiResponse> {
        require_fields(&[("source", Some(&params.source)), ("recipient", Some(&params.recipient))])?;
        validate_amount(params.amount, params.currency.as_deref().unwrap_or("NGN"))?;
        let mut request = RequestDescriptor::post("transfer").json(&params)?;
        if let Some(key) = &params.idempotency_key {
            request = request.idempotency_key(key);
        }
        self.client.request(request).await
    }

    /// Finalizes a transfer that requires an OTP.
    ///
    /// # Errors
    ///
    /// Validation error for a blank code or OTP; otherwise any taxonomy
    /// kind.
    pub async fn finalize(&self, transfer_code: &str, otp: &str) -> Result<ApiResponse> {
        require_fields(&[("transfer_code", Some(transfer_code)), ("otp", Some(otp))])?;
        let payload = serde_json::json!({ "transfer_code": transfer_code, "otp": otp });
        let request = RequestDescriptor::post("transfer/finalize_transfer").json(&payload)?;
        self.client.request(request).await
    }

    /// Lists transfers on the integration.
    ///
    /// # Errors
    ///
    /// Any taxonomy kind from the API.
    pub async fn list(&self, query: ListQuery) -> Result<ApiResponse> {
        self.client
            .request(query.apply(RequestDescriptor::get("transfer")))
            .await
    }

    /// Fetches a transfer by id or transfer code.
    ///
    /// # Errors
    ///
    /// Validation error for a blank identifier; otherwise any taxonomy kind.
    pub async fn fetch(&self, id_or_code: &str) -> Result<ApiResponse> {
        require_fields(&[("id_or_code", Some(id_or_code))])?;
        self.client
            .request(RequestDescriptor::get(format!("transfer/{id_or_code}")))
            .await
    }

    /// Confirms the status of a transfer by reference.
    ///
    /// A failed or cancelled transfer surfaces as
    /// [`PaystackError::TransactionFailure`](crate::PaystackError::TransactionFailure)
    /// even under HTTP 200.
    ///
    /// # Errors
    ///
    /// Validation error for a blank reference; otherwise any taxonomy kind.
    pub async fn verify(&self, reference: &str) -> Result<ApiResponse> {
        require_fields(&[("reference", Some(reference))])?;
        let request =
            RequestDescriptor::get(format!("transfer/verify/{reference}")).confirms_transaction();
        self.client.request(request).await
    }
}
