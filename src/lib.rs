//! Paystack API client for Rust.
//!
//! A typed client for the Paystack REST API: transactions, customers,
//! transfers, refunds, plans, subscriptions, disputes, and verification,
//! over a shared transport with a uniform response contract.
//!
//! # The one rule that matters
//!
//! Paystack overloads HTTP 200 for three distinct outcomes:
//!
//! - true success (`status: true` with a clean payload),
//! - a declared business failure (`status: false` in the envelope),
//! - a masked transaction failure (`status: true`, but `data.status` is
//!   `failed`, `abandoned`, or `cancelled`).
//!
//! Every response runs through one ordered classifier that recovers the
//! real outcome, so a call returns either an [`ApiResponse`] with
//! `(data, meta)` or a typed [`PaystackError`]: never a silent null, and
//! never a "success" that hides a declined charge.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │  Resource bindings   │  transactions, customers, transfers, ...
//! │  (validate + shape)  │
//! └──────────┬───────────┘
//!            │ RequestDescriptor
//! ┌──────────▼───────────┐
//! │      Paystack        │  bearer auth, base URL, shared pool
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐      ┌──────────────────────┐
//! │    HttpTransport     │──────│  classify()          │
//! │  (one round trip,    │ raw  │  (ordered envelope   │
//! │   network errors)    │      │   rules, taxonomy)   │
//! └──────────────────────┘      └──────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use paystack_client::{Paystack, PaystackError};
//! use paystack_client::resources::transactions::InitializeTransaction;
//!
//! # async fn example() -> paystack_client::Result<()> {
//! let client = Paystack::new("sk_test_8c3f21a9b0d44e02")?;
//!
//! let response = client
//!     .transactions()
//!     .initialize(InitializeTransaction {
//!         email: "customer@example.com".to_owned(),
//!         amount: 50_000, // ₦500.00 in kobo
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! println!("pay at: {}", response.data["authorization_url"]);
//!
//! // Confirming a charge later:
//! match client.transactions().verify("ref-2024-001").await {
//!     Ok(response) => println!("paid: {}", response.data["amount"]),
//!     Err(PaystackError::TransactionFailure { gateway_response, .. }) => {
//!         // HTTP 200, but the charge did not go through.
//!         eprintln!("declined: {gateway_response}");
//!     }
//!     Err(PaystackError::RateLimit { retry_after, .. }) => {
//!         eprintln!("rate limited, retry after {retry_after:?} seconds");
//!     }
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`client`]: the [`Paystack`] client and its configuration
//! - [`transport`]: request descriptors and the HTTP transport
//! - [`response`]: the response envelope classifier
//! - [`error`]: the error taxonomy
//! - [`auth`]: secret key validation
//! - [`validate`]: pre-flight request validators
//! - [`resources`]: per-resource bindings
//!
//! # Concurrency
//!
//! A [`Paystack`] instance is `Clone` and safe to share across tasks: the
//! only shared state is the reqwest connection pool and immutable defaults.
//! The client performs no retries; honor [`PaystackError::RateLimit`] at the
//! call site.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod auth;
pub mod client;
pub mod error;
pub mod resources;
pub mod response;
pub mod transport;
pub mod validate;

pub use auth::{KeyMode, SecretKey};
pub use client::{ClientConfig, PRODUCTION_BASE_URL, Paystack};
pub use error::{ApiFailure, PaystackError, Result};
pub use response::{ApiResponse, TransactionCheck, classify};
pub use transport::{HttpConfig, HttpTransport, RawResponse, RequestDescriptor};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify the public API surface is accessible.
        let _ = std::marker::PhantomData::<PaystackError>;
        let _ = std::marker::PhantomData::<Paystack>;
        assert_eq!(PRODUCTION_BASE_URL, "https://api.paystack.co");
    }
}
