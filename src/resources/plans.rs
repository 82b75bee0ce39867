//! The Plans API: recurring billing plans.

use serde::Serialize;

use crate::{
    client::Paystack,
    error::Result,
    resources::ListQuery,
    response::ApiResponse,
    transport::RequestDescriptor,
    validate::{require_fields, validate_amount},
};

/// Parameters for [`Plans::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePlan {
    /// Plan name.
    pub name: String,
    /// Amount charged per interval, in the smallest currency unit.
    pub amount: u64,
    /// Billing interval: `daily`, `weekly`, `monthly`, `quarterly`,
    /// `biannually`, or `annually`.
    pub interval: String,
    /// Plan description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Plan currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Number of invoices to raise before stopping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_limit: Option<u32>,
    /// Whether to send invoice emails to subscribers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_invoices: Option<bool>,
    /// Whether to send SMS notifications to subscribers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_sms: Option<bool>,
}

/// Parameters for [`Plans::update`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePlan {
    /// New plan name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New amount per interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    /// New billing interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Handle for the Plans API, borrowed from a [`Paystack`] client.
#[derive(Debug)]
pub struct Plans<'a> {
    pub(crate) client: &'a Paystack,
}

impl Plans<'_> {
    /// Creates a billing plan.
    ///
    /// # Errors
    ///
    /// Validation error for a blank name or interval, or an amount below
    /// the currency minimum; otherwise any taxonomy kind.
    pub async fn create(&self, params: CreatePlan) -> Result<ApiResponse> {
        require_fields(&[("name", Some(&params.name)), ("interval", Some(&params.interval))])?;
        validate_amount(params.amount, params.currency.as_deref().unwrap_or("NGN"))?;
        let request = RequestDescriptor::post("plan").json(&params)?;
        self.client.request(request).await
    }

    /// Lists plans on the integration.
    ///
    /// # Errors
    ///
    /// Any taxonomy kind from the API.
    pub async fn list(&self, query: ListQuery) -> Result<ApiResponse> {
        self.client.request(query.apply(RequestDescriptor::get("plan"))).await
    }

    /// Fetches a plan by id or plan code.
    ///
    /// # Errors
    ///
    /// Validation error for a blank identifier; otherwise any taxonomy kind.
    pub async fn fetch(&self, id_or_code: &str) -> Result<ApiResponse> {
        require_fields(&[("id_or_code", Some(id_or_code))])?;
        self.client
            .request(RequestDescriptor::get(format!("plan/{id_or_code}")))
            .await
    }

    /// Updates a plan.
    ///
    /// # Errors
    ///
    /// Validation error for a blank identifier; otherwise any taxonomy kind.
    pub async fn update(&self, id_or_code: &str, params: UpdatePlan) -> Result<ApiResponse> {
        require_fields(&[("id_or_code", Some(id_or_code))])?;
        let request = RequestDescriptor::put(format!("plan/{id_or_code}")).json(&params)?;
        self.client.request(request).await
    }
}
