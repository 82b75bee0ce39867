//! The Subscriptions API.

use serde::Serialize;

use crate::{
    client::Paystack,
    error::Result,
    resources::ListQuery,
    response::ApiResponse,
    transport::RequestDescriptor,
    validate::require_fields,
};

/// Parameters for [`Subscriptions::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSubscription {
    /// Customer email or customer code.
    pub customer: String,
    /// Plan code to subscribe the customer to.
    pub plan: String,
    /// Authorization code to charge; the customer's most recent one when
    /// omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
    /// ISO 8601 date of the first debit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

/// Handle for the Subscriptions API, borrowed from a [`Paystack`] client.
#[derive(Debug)]
pub struct Subscriptions<'a> {
    pub(crate) client: &'a Paystack,
}

impl Subscriptions<'_> {
    /// Creates a subscription.
    ///
    /// # Errors
    ///
    /// Validation error for a blank customer or plan; otherwise any
    /// taxonomy kind.
    pub async fn create(&self, params: CreateSubscription) -> Result<ApiResponse> {
        require_fields(&[("customer", Some(&params.customer)), ("plan", Some(&params.plan))])?;
        let request = RequestDescriptor::post("subscription").json(&params)?;
        self.client.request(request).await
    }

    /// Lists subscriptions on the integration.
    ///
    /// # Errors
    ///
    /// Any taxonomy kind from the API.
    pub async fn list(&self, query: ListQuery) -> Result<ApiResponse> {
        self.client
            .request(query.apply(RequestDescriptor::get("subscription")))
            .await
    }

    /// Fetches a subscription by id or subscription code.
    ///
    /// # Errors
    ///
    /// Validation error for a blank identifier; otherwise any taxonomy kind.
    pub async fn fetch(&self, id_or_code: &str) -> Result<ApiResponse> {
        require_fields(&[("id_or_code", Some(id_or_code))])?;
        self.client
            .request(RequestDescriptor::get(format!("subscription/{id_or_code}")))
            .await
    }

    /// Enables a subscription.
    ///
    /// # Errors
    ///
    /// Validation error for a blank code or token; otherwise any taxonomy
    /// kind.
    pub async fn enable(&self, code: &str, token: &str) -> Result<ApiResponse> {
        require_fields(&[("code", Some(code)), ("token", Some(token))])?;
        let payload = serde_json::json!({ "code": code, "token": token });
        let request = RequestDescriptor::post("subscription/enable").json(&payload)?;
        self.client.request(request).await
    }

    /// Disables a subscription.
    ///
    /// # Errors
    ///
    /// Validation error for a blank code or token; otherwise any taxonomy
    /// kind.
    pub async fn disable(&self, code: &str, token: &str) -> Result<ApiResponse> {
        require_fields(&[("code", Some(code)), ("token", Some(token))])?;
        let payload = serde_json::json!({ "code": code, "token": token });
        let request = RequestDescriptor::post("subscription/disable").json(&payload)?;
        self.client.request(request).await
    }
}
