//! The Refunds API.

use serde::Serialize;

use crate::{
    client::Paystack,
    error::Result,
    resources::ListQuery,
    response::ApiResponse,
    transport::RequestDescriptor,
    validate::require_fields,
};

/// Parameters for [`Refunds::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateRefund {
    /// Transaction reference or id to refund.
    pub transaction: String,
    /// Amount to refund in the smallest currency unit; the full transaction
    /// amount when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    /// Refund currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Note visible to the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_note: Option<String>,
    /// Note visible only to the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_note: Option<String>,
}

/// Handle for the Refunds API, borrowed from a [`Paystack`] client.
#[derive(Debug)]
pub struct Refunds<'a> {
    pub(crate) client: &'a Paystack,
}

impl Refunds<'_> {
    /// Creates a refund for a transaction.
    ///
    /// # Errors
    ///
    /// Validation error for a blank transaction reference; otherwise any
    /// taxonomy kind.
    pub async fn create(&self, params: CreateRefund) -> Result<ApiResponse> {
        require_fields(&[("transaction", Some(&params.transaction))])?;
        let request = RequestDescriptor::post("refund").json(&params)?;
        self.client.request(request).await
    }

    /// Lists refunds on the integration.
    ///
    /// # Errors
    ///
    /// Any taxonomy kind from the API.
    pub async fn list(&self, query: ListQuery) -> Result<ApiResponse> {
        self.client.request(query.apply(RequestDescriptor::get("refund"))).await
    }

    /// Fetches a refund by id.
    ///
    /// # Errors
    ///
    /// Validation error for a blank id; otherwise any taxonomy kind.
    pub async fn fetch(&self, refund_id: &str) -> Result<ApiResponse> {
        require_fields(&[("refund_id", Some(refund_id))])?;
        self.client
            .request(RequestDescriptor::get(format!("refund/{refund_id}")))
            .await
    }
}
