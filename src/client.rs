//! The Paystack client.
//!
//! [`Paystack`] owns the validated secret key, the base URL, and one shared
//! [`HttpTransport`]. Every resource binding borrows the client and issues
//! its calls through [`Paystack::request`], which composes the transport
//! round trip with envelope classification. There is no per-resource
//! session state: the only shared state is the connection pool and the
//! immutable defaults, so one client instance can serve concurrent tasks.

use serde::Deserialize;
use tracing::instrument;
use url::Url;

use crate::{
    auth::{KeyMode, SecretKey},
    error::{ApiFailure, PaystackError, Result},
    resources::{
        customers::Customers, disputes::Disputes, plans::Plans, refunds::Refunds,
        subscriptions::Subscriptions, transactions::Transactions,
        transfer_recipients::TransferRecipients, transfers::Transfers,
        verification::Verification,
    },
    response::{ApiResponse, classify},
    transport::{HttpConfig, HttpTransport, RequestDescriptor},
};

/// Production API host.
pub const PRODUCTION_BASE_URL: &str = "https://api.paystack.co";

/// Client configuration.
///
/// TOML-deserializable, with every field defaulted; an empty document yields
/// the production configuration.
///
/// # Examples
///
/// ```
/// use paystack_client::ClientConfig;
///
/// let config = ClientConfig::from_toml(
///     r#"
///     base_url = "https://api.paystack.co"
///
///     [http]
///     timeout_secs = 15
///     "#,
/// )?;
/// assert_eq!(config.http.timeout_secs, 15);
/// # Ok::<(), paystack_client::PaystackError>(())
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// API host to talk to. Defaults to [`PRODUCTION_BASE_URL`].
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Transport settings.
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), http: HttpConfig::default() }
    }
}

impl ClientConfig {
    /// Parses a configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`PaystackError::Validation`] when the document is not valid
    /// TOML or does not match the configuration shape.
    pub fn from_toml(document: &str) -> Result<Self> {
        toml::from_str(document).map_err(|e| PaystackError::Validation {
            failure: ApiFailure::new(format!("invalid client configuration: {e}")),
            field_errors: std::collections::BTreeMap::new(),
        })
    }
}

fn default_base_url() -> String {
    PRODUCTION_BASE_URL.to_owned()
}

/// Client for the Paystack REST API.
///
/// # Examples
///
/// ```rust,no_run
/// use paystack_client::{Paystack, resources::transactions::InitializeTransaction};
///
/// # async fn example() -> paystack_client::Result<()> {
/// let client = Paystack::new("sk_test_8c3f21a9b0d44e02")?;
///
/// let response = client
///     .transactions()
///     .initialize(InitializeTransaction {
///         email: "customer@example.com".to_owned(),
///         amount: 50_000,
///         ..Default::default()
///     })
///     .await?;
///
/// println!("authorization: {}", response.data["authorization_url"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Paystack {
    transport: HttpTransport,
    base_url: Url,
    secret_key: SecretKey,
}

impl Paystack {
    /// Creates a client against the production host with default transport
    /// settings.
    ///
    /// # Errors
    ///
    /// Returns [`PaystackError::Authentication`] when the secret key does
    /// not carry a recognized `sk_test` / `sk_live` prefix. No network call
    /// is attempted.
    pub fn new(secret_key: impl Into<String>) -> Result<Self> {
        Self::with_config(secret_key, &ClientConfig::default())
    }

    /// Creates a client with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PaystackError::Authentication`] for a malformed key, or
    /// [`PaystackError::Validation`] for an invalid base URL or out-of-bounds
    /// transport settings.
    pub fn with_config(secret_key: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        let secret_key = SecretKey::new(secret_key)?;
        let base_url = Url::parse(&config.base_url).map_err(|e| PaystackError::Validation {
            failure: ApiFailure::new(format!("invalid base URL '{}': {e}", config.base_url)),
            field_errors: std::collections::BTreeMap::new(),
        })?;
        let transport = HttpTransport::with_config(&config.http)?;
        Ok(Self { transport, base_url, secret_key })
    }

    /// Returns whether this client holds a test or live key.
    #[must_use]
    pub fn mode(&self) -> KeyMode {
        self.secret_key.mode()
    }

    /// Returns the configured API host.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issues one API call: transport round trip, then classification.
    ///
    /// Resource bindings build the descriptor and delegate here; calling
    /// this directly is the escape hatch for endpoints without a binding.
    ///
    /// # Errors
    ///
    /// One of the taxonomy kinds in [`PaystackError`]; never a silent null.
    #[instrument(skip(self, request), fields(mode = ?self.secret_key.mode()))]
    pub async fn request(&self, request: RequestDescriptor) -> Result<ApiResponse> {
        let bearer = request.is_authenticated().then(|| self.secret_key.bearer());
        let raw = self
            .transport
            .execute(&self.base_url, &request, bearer.as_deref())
            .await?;
        classify(&raw, request.transaction_check())
    }

    /// The Transactions API: charge initialization and confirmation.
    #[must_use]
    pub fn transactions(&self) -> Transactions<'_> {
        Transactions { client: self }
    }

    /// The Customers API.
    #[must_use]
    pub fn customers(&self) -> Customers<'_> {
        Customers { client: self }
    }

    /// The Transfers API: sending money to recipients.
    #[must_use]
    pub fn transfers(&self) -> Transfers<'_> {
        Transfers { client: self }
    }

    /// The Transfer Recipients API: beneficiary management.
    #[must_use]
    pub fn transfer_recipients(&self) -> TransferRecipients<'_> {
        TransferRecipients { client: self }
    }

    /// The Refunds API.
    #[must_use]
    pub fn refunds(&self) -> Refunds<'_> {
        Refunds { client: self }
    }

    /// The Plans API: recurring billing plans.
    #[must_use]
    pub fn plans(&self) -> Plans<'_> {
        Plans { client: self }
    }

    /// The Subscriptions API.
    #[must_use]
    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions { client: self }
    }

    /// The Disputes API: chargeback management.
    #[must_use]
    pub fn disputes(&self) -> Disputes<'_> {
        Disputes { client: self }
    }

    /// The Verification API: account and card BIN lookups.
    #[must_use]
    pub fn verification(&self) -> Verification<'_> {
        Verification { client: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_rejects_malformed_key_before_any_network_call() {
        let result = Paystack::new("not-a-key");
        assert!(matches!(result.unwrap_err(), PaystackError::Authentication(_)));
    }

    #[test]
    fn test_client_accepts_test_and_live_keys() {
        assert_eq!(Paystack::new("sk_test_abc123").unwrap().mode(), KeyMode::Test);
        assert_eq!(Paystack::new("sk_live_abc123").unwrap().mode(), KeyMode::Live);
    }

    #[test]
    fn test_client_defaults_to_production_host() {
        let client = Paystack::new("sk_test_abc123").unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.paystack.co/");
    }

    #[test]
    fn test_client_with_custom_base_url() {
        let config =
            ClientConfig { base_url: "https://sandbox.example.com".to_owned(), ..Default::default() };
        let client = Paystack::with_config("sk_test_abc123", &config).unwrap();
        assert_eq!(client.base_url().host_str(), Some("sandbox.example.com"));
    }

    #[test]
    fn test_client_rejects_invalid_base_url() {
        let config = ClientConfig { base_url: "not a url".to_owned(), ..Default::default() };
        let result = Paystack::with_config("sk_test_abc123", &config);
        assert!(matches!(result.unwrap_err(), PaystackError::Validation { .. }));
    }

    #[test]
    fn test_client_rejects_out_of_bounds_transport_config() {
        let config = ClientConfig {
            http: HttpConfig { timeout_secs: 0, ..Default::default() },
            ..Default::default()
        };
        assert!(Paystack::with_config("sk_test_abc123", &config).is_err());
    }

    #[test]
    fn test_client_debug_masks_secret_key() {
        let client = Paystack::new("sk_test_8c3f21a9b0d44e02").unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("8c3f21a9b0d4"));
    }

    #[test]
    fn test_config_default_matches_empty_toml() {
        let from_toml = ClientConfig::from_toml("").unwrap();
        assert_eq!(from_toml.base_url, ClientConfig::default().base_url);
        assert_eq!(from_toml.http, HttpConfig::default());
    }

    #[test]
    fn test_config_from_toml_full() {
        let config = ClientConfig::from_toml(
            r#"
            base_url = "https://api.example.com"

            [http]
            timeout_secs = 20
            connect_timeout_secs = 8
            pool_max_idle_per_host = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.http.timeout_secs, 20);
        assert_eq!(config.http.connect_timeout_secs, 8);
        assert_eq!(config.http.pool_max_idle_per_host, 2);
    }

    #[test]
    fn test_config_from_invalid_toml_rejected() {
        let result = ClientConfig::from_toml("base_url = 42");
        assert!(matches!(result.unwrap_err(), PaystackError::Validation { .. }));
    }
}
