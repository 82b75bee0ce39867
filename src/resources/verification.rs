//! The Verification API: account and card BIN lookups.

use crate::{
    client::Paystack,
    error::Result,
    response::ApiResponse,
    transport::RequestDescriptor,
    validate::require_fields,
};

/// Handle for the Verification API, borrowed from a [`Paystack`] client.
#[derive(Debug)]
pub struct Verification<'a> {
    pub(crate) client: &'a Paystack,
}

impl Verification<'_> {
    /// Confirms an account number belongs to the given bank.
    ///
    /// # Errors
    ///
    /// Validation error for a blank account number or bank code; otherwise
    /// any taxonomy kind.
    pub async fn resolve_account(
        &self,
        account_number: &str,
        bank_code: &str,
    ) -> Result<ApiResponse> {
        require_fields(&[
            ("account_number", Some(account_number)),
            ("bank_code", Some(bank_code)),
        ])?;
        let request = RequestDescriptor::get("bank/resolve")
            .query("account_number", account_number)
            .query("bank_code", bank_code);
        self.client.request(request).await
    }

    /// Looks up the issuer details of a card BIN.
    ///
    /// # Errors
    ///
    /// Validation error for a blank BIN; otherwise any taxonomy kind.
    pub async fn resolve_card_bin(&self, card_bin: &str) -> Result<ApiResponse> {
        require_fields(&[("card_bin", Some(card_bin))])?;
        self.client
            .request(RequestDescriptor::get(format!("decision/bin/{card_bin}")))
            .await
    }
}
