//! Resource bindings over the shared request core.
//!
//! Each module maps one Paystack resource group onto typed methods. The
//! bindings are pure data shaping: validate locally, serialize a params
//! struct (serde handles field naming and optionality), build a
//! [`RequestDescriptor`](crate::transport::RequestDescriptor), and delegate
//! to [`Paystack::request`](crate::client::Paystack::request). No decision
//! logic lives here.

pub mod customers;
pub mod disputes;
pub mod plans;
pub mod refunds;
pub mod subscriptions;
pub mod transactions;
pub mod transfer_recipients;
pub mod transfers;
pub mod verification;

use crate::transport::RequestDescriptor;

/// Common pagination parameters for listing endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Records per page (provider default: 50).
    pub per_page: Option<u32>,
    /// Page to retrieve (provider default: 1).
    pub page: Option<u32>,
}

impl ListQuery {
    pub(crate) fn apply(self, request: RequestDescriptor) -> RequestDescriptor {
        request
            .query_opt("perPage", self.per_page)
            .query_opt("page", self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_default_adds_nothing() {
        let request = ListQuery::default().apply(RequestDescriptor::get("transaction"));
        let debug = format!("{request:?}");
        assert!(!debug.contains("perPage"));
        assert!(!debug.contains("page"));
    }

    #[test]
    fn test_list_query_applies_present_fields() {
        let query = ListQuery { per_page: Some(20), page: Some(3) };
        let request = query.apply(RequestDescriptor::get("transaction"));
        let debug = format!("{request:?}");
        assert!(debug.contains("perPage"));
        assert!(debug.contains("20"));
    }
}
