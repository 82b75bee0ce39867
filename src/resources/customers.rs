//! The Customers API: creating and managing customers.

use serde::Serialize;
use serde_json::Value;

use crate::{
    client::Paystack,
    error::Result,
    resources::ListQuery,
    response::ApiResponse,
    transport::RequestDescriptor,
    validate::{require_fields, validate_email},
};

/// Parameters for [`Customers::create`].
///
/// `first_name`, `last_name`, and `phone` are optional in general, but
/// become compulsory when the customer will be assigned a dedicated virtual
/// account under certain business categories; the API enforces that rule.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCustomer {
    /// Customer's email address.
    pub email: String,
    /// Customer's first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Customer's last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Customer's phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Structured metadata stored with the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Parameters for [`Customers::update`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCustomer {
    /// Customer's first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Customer's last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Customer's phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Structured metadata stored with the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Parameters for [`Customers::validate_identity`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidateIdentity {
    /// Customer's first name.
    pub first_name: String,
    /// Customer's last name.
    pub last_name: String,
    /// Identification type, e.g. `bank_account`.
    #[serde(rename = "type")]
    pub identification_type: String,
    /// Two-letter country code.
    pub country: String,
    /// Bank Verification Number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bvn: Option<String>,
    /// Customer's bank code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    /// Customer's account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
}

/// Risk action applied to a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskAction {
    /// Whitelist: always allow transactions from this customer.
    Allow,
    /// Blacklist: block transactions from this customer.
    Deny,
    /// Revert to the integration's default risk handling.
    Default,
}

/// Handle for the Customers API, borrowed from a [`Paystack`] client.
#[derive(Debug)]
pub struct Customers<'a> {
    pub(crate) client: &'a Paystack,
}

impl Customers<'_> {
    /// Creates a customer on the integration.
    ///
    /// # Errors
    ///
    /// Validation error for a malformed email; otherwise any taxonomy kind.
    pub async fn create(&self, params: CreateCustomer) -> Result<ApiResponse> {
        validate_email(&params.email)?;
        let request = RequestDescriptor::post("customer").json(&params)?;
        self.client.request(request).await
    }

    /// Lists customers on the integration.
    ///
    /// # Errors
    ///
    /// Any taxonomy kind from the API.
    pub async fn list(&self, query: ListQuery) -> Result<ApiResponse> {
        self.client
            .request(query.apply(RequestDescriptor::get("customer")))
            .await
    }

    /// Fetches a customer by email or customer code.
    ///
    /// # Errors
    ///
    /// Validation error for a blank identifier; otherwise any taxonomy kind.
    pub async fn fetch(&self, email_or_code: &str) -> Result<ApiResponse> {
        require_fields(&[("email_or_code", Some(email_or_code))])?;
        self.client
            .request(RequestDescriptor::get(format!("customer/{email_or_code}")))
            .await
    }

    /// Updates a customer's details.
    ///
    /// # Errors
    ///
    /// Validation error for a blank code; otherwise any taxonomy kind.
    pub async fn update(&self, code: &str, params: UpdateCustomer) -> Result<ApiResponse> {
        require_fields(&[("code", Some(code))])?;
        let request = RequestDescriptor::put(format!("customer/{code}")).json(&params)?;
        self.client.request(request).await
    }

    /// Validates a customer's identity.
    ///
    /// # Errors
    ///
    /// Validation error for missing fields; otherwise any taxonomy kind.
    pub async fn validate_identity(
        &self,
        customer_code: &str,
        params: ValidateIdentity,
    ) -> Result<ApiResponse> {
        require_fields(&[
            ("customer_code", Some(customer_code)),
            ("first_name", Some(&params.first_name)),
            ("last_name", Some(&params.last_name)),
            ("type", Some(&params.identification_type)),
            ("country", Some(&params.country)),
        ])?;
        let request =
            RequestDescriptor::post(format!("customer/{customer_code}/identification")).json(&params)?;
        self.client.request(request).await
    }

    /// Whitelists or blacklists a customer.
    ///
    /// # Errors
    ///
    /// Validation error for a blank customer identifier; otherwise any
    /// taxonomy kind.
    pub async fn set_risk_action(&self, customer: &str, action: RiskAction) -> Result<ApiResponse> {
        require_fields(&[("customer", Some(customer))])?;
        let payload = serde_json::json!({ "customer": customer, "risk_action": action });
        let request = RequestDescriptor::post("customer/set_risk_action").json(&payload)?;
        self.client.request(request).await
    }
}
