//! The Transfer Recipients API: beneficiaries that transfers are sent to.

use serde::Serialize;
use serde_json::Value;

use crate::{
    client::Paystack,
    error::Result,
    resources::ListQuery,
    response::ApiResponse,
    transport::RequestDescriptor,
    validate::require_fields,
};

/// Parameters for [`TransferRecipients::create`].
///
/// A duplicate account number leads to retrieval of the existing record
/// rather than an error.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateRecipient {
    /// Recipient type: `nuban`, `ghipss`, `mobile_money`, or `basa`.
    #[serde(rename = "type")]
    pub recipient_type: String,
    /// The recipient's name according to their account registration.
    pub name: String,
    /// Account number; required for all types except `authorization`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Bank code, from the List Banks endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    /// Free-form description for this recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Currency for the receiving account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Authorization code from a previous transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
    /// Structured metadata stored with the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Parameters for [`TransferRecipients::update`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateRecipient {
    /// New recipient name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New recipient email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Handle for the Transfer Recipients API, borrowed from a [`Paystack`]
/// client.
#[derive(Debug)]
pub struct TransferRecipients<'a> {
    pub(crate) client: &'a Paystack,
}

impl TransferRecipients<'_> {
    /// Creates a transfer recipient.
    ///
    /// # Errors
    ///
    /// Validation error for a blank type or name; otherwise any taxonomy
    /// kind.
    pub async fn create(&self, params: CreateRecipient) -> Result<ApiResponse> {
        require_fields(&[("type", Some(&params.recipient_type)), ("name", Some(&params.name))])?;
        let request = RequestDescriptor::post("transferrecipient").json(&params)?;
        self.client.request(request).await
    }

    /// Lists transfer recipients.
    ///
    /// # Errors
    ///
    /// Any taxonomy kind from the API.
    pub async fn list(&self, query: ListQuery) -> Result<ApiResponse> {
        self.client
            .request(query.apply(RequestDescriptor::get("transferrecipient")))
            .await
    }

    /// Fetches a recipient by id or recipient code.
    ///
    /// # Errors
    ///
    /// Validation error for a blank identifier; otherwise any taxonomy kind.
    pub async fn fetch(&self, id_or_code: &str) -> Result<ApiResponse> {
        require_fields(&[("id_or_code", Some(id_or_code))])?;
        self.client
            .request(RequestDescriptor::get(format!("transferrecipient/{id_or_code}")))
            .await
    }

    /// Updates a recipient's details.
    ///
    /// # Errors
    ///
    /// Validation error for a blank identifier; otherwise any taxonomy kind.
    pub async fn update(&self, id_or_code: &str, params: UpdateRecipient) -> Result<ApiResponse> {
        require_fields(&[("id_or_code", Some(id_or_code))])?;
        let request = RequestDescriptor::put(format!("transferrecipient/{id_or_code}")).json(&params)?;
        self.client.request(request).await
    }

    /// Deletes (deactivates) a recipient.
    ///
    /// # Errors
    ///
    /// Validation error for a blank identifier; otherwise any taxonomy kind.
    pub async fn delete(&self, id_or_code: &str) -> Result<ApiResponse> {
        require_fields(&[("id_or_code", Some(id_or_code))])?;
        self.client
            .request(RequestDescriptor::delete(format!("transferrecipient/{id_or_code}")))
            .await
    }
}
