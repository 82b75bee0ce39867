//! The Disputes API: chargeback management.

use serde::Serialize;

use crate::{
    client::Paystack,
    error::Result,
    response::ApiResponse,
    transport::RequestDescriptor,
    validate::{require_fields, validate_email},
};

/// Query parameters for [`Disputes::list`].
#[derive(Debug, Clone, Default)]
pub struct ListDisputes {
    /// Start of the period to list, ISO 8601.
    pub from: String,
    /// End of the period to list, ISO 8601.
    pub to: String,
    /// Records per page.
    pub per_page: Option<u32>,
    /// Page to retrieve.
    pub page: Option<u32>,
    /// Filter by transaction id.
    pub transaction: Option<String>,
    /// Filter by dispute status.
    pub status: Option<String>,
}

/// Parameters for [`Disputes::update`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDispute {
    /// Amount to refund in the smallest currency unit.
    pub refund_amount: u64,
    /// Filename returned by the upload URL endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_filename: Option<String>,
}

/// Parameters for [`Disputes::add_evidence`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddEvidence {
    /// Customer's email address.
    pub customer_email: String,
    /// Customer's name.
    pub customer_name: String,
    /// Customer's phone number.
    pub customer_phone: String,
    /// Details of the service or goods delivered.
    pub service_details: String,
    /// Delivery address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    /// ISO 8601 delivery date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
}

/// Parameters for [`Disputes::resolve`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolveDispute {
    /// Resolution: `merchant-accepted` or `declined`.
    pub resolution: String,
    /// Reason for the resolution.
    pub message: String,
    /// Amount to refund in the smallest currency unit.
    pub refund_amount: u64,
    /// Filename of the evidence upload.
    pub uploaded_filename: String,
    /// Evidence id, when one was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<u64>,
}

/// Handle for the Disputes API, borrowed from a [`Paystack`] client.
#[derive(Debug)]
pub struct Disputes<'a> {
    pub(crate) client: &'a Paystack,
}

impl Disputes<'_> {
    /// Lists disputes within a period.
    ///
    /// # Errors
    ///
    /// Validation error when the period bounds are blank; otherwise any
    /// taxonomy kind.
    pub async fn list(&self, query: ListDisputes) -> Result<ApiResponse> {
        require_fields(&[("from", Some(&query.from)), ("to", Some(&query.to))])?;
        let request = RequestDescriptor::get("dispute")
            .query("from", &query.from)
            .query("to", &query.to)
            .query_opt("perPage", query.per_page)
            .query_opt("page", query.page)
            .query_opt("transaction", query.transaction.as_deref())
            .query_opt("status", query.status.as_deref());
        self.client.request(request).await
    }

    /// Fetches a dispute by id.
    ///
    /// # Errors
    ///
    /// Validation error for a blank id; otherwise any taxonomy kind.
    pub async fn fetch(&self, dispute_id: &str) -> Result<ApiResponse> {
        require_fields(&[("dispute_id", Some(dispute_id))])?;
        self.client
            .request(RequestDescriptor::get(format!("dispute/{dispute_id}")))
            .await
    }

    /// Updates a dispute.
    ///
    /// # Errors
    ///
    /// Validation error for a blank id; otherwise any taxonomy kind.
    pub async fn update(&self, dispute_id: &str, params: UpdateDispute) -> Result<ApiResponse> {
        require_fields(&[("dispute_id", Some(dispute_id))])?;
        let request = RequestDescriptor::put(format!("dispute/{dispute_id}")).json(&params)?;
        self.client.request(request).await
    }

    /// Attaches delivery evidence to a dispute.
    ///
    /// # Errors
    ///
    /// Validation error for missing fields or a malformed customer email;
    /// otherwise any taxonomy kind.
    pub async fn add_evidence(&self, dispute_id: &str, params: AddEvidence) -> Result<ApiResponse> {
        require_fields(&[
            ("dispute_id", Some(dispute_id)),
            ("customer_name", Some(&params.customer_name)),
            ("customer_phone", Some(&params.customer_phone)),
            ("service_details", Some(&params.service_details)),
        ])?;
        validate_email(&params.customer_email)?;
        let request =
            RequestDescriptor::post(format!("dispute/{dispute_id}/evidence")).json(&params)?;
        self.client.request(request).await
    }

    /// Resolves a dispute.
    ///
    /// # Errors
    ///
    /// Validation error for missing fields; otherwise any taxonomy kind.
    pub async fn resolve(&self, dispute_id: &str, params: ResolveDispute) -> Result<ApiResponse> {
        require_fields(&[
            ("dispute_id", Some(dispute_id)),
            ("resolution", Some(&params.resolution)),
            ("message", Some(&params.message)),
            ("uploaded_filename", Some(&params.uploaded_filename)),
        ])?;
        let request =
            RequestDescriptor::put(format!("dispute/{dispute_id}/resolve")).json(&params)?;
        self.client.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaystackError;

    fn client() -> Paystack {
        Paystack::new("sk_test_abc123").unwrap()
    }

    #[tokio::test]
    async fn test_list_requires_period_bounds() {
        let err = client().disputes().list(ListDisputes::default()).await.unwrap_err();
        let PaystackError::Validation { field_errors, .. } = err else {
            unreachable!("expected Validation");
        };
        assert!(field_errors.contains_key("from"));
        assert!(field_errors.contains_key("to"));
    }

    #[tokio::test]
    async fn test_add_evidence_validates_customer_email() {
        let err = client()
            .disputes()
            .add_evidence(
                "disp-1",
                AddEvidence {
                    customer_email: "not-an-email".to_owned(),
                    customer_name: "Ada".to_owned(),
                    customer_phone: "+2348012345678".to_owned(),
                    service_details: "Delivered on time".to_owned(),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        let PaystackError::Validation { field_errors, .. } = err else {
            unreachable!("expected Validation");
        };
        assert!(field_errors.contains_key("email"));
    }

    #[tokio::test]
    async fn test_resolve_names_missing_fields() {
        let err = client()
            .disputes()
            .resolve("disp-1", ResolveDispute::default())
            .await
            .unwrap_err();
        let PaystackError::Validation { field_errors, .. } = err else {
            unreachable!("expected Validation");
        };
        assert!(field_errors.contains_key("resolution"));
        assert!(field_errors.contains_key("message"));
        assert!(field_errors.contains_key("uploaded_filename"));
    }
}
