//! Secret key validation and handling.
//!
//! Paystack authenticates every private call with a bearer secret key. Keys
//! carry a mode marker in their prefix: `sk_test` for the sandbox, `sk_live`
//! for production. Construction fails immediately for anything else, before
//! any network call is attempted.

use std::fmt;

use crate::error::{ApiFailure, PaystackError, Result};

/// Environment a secret key belongs to, derived from its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    /// Sandbox key (`sk_test...`).
    Test,
    /// Production key (`sk_live...`).
    Live,
}

/// A validated Paystack secret key.
///
/// Immutable for the lifetime of the client. The `Debug` representation
/// masks everything but the prefix and the last four characters, so the key
/// never leaks into logs.
///
/// # Examples
///
/// ```
/// use paystack_client::{KeyMode, SecretKey};
///
/// let key = SecretKey::new("sk_test_8c3f21a9b0d44e02")?;
/// assert_eq!(key.mode(), KeyMode::Test);
/// # Ok::<(), paystack_client::PaystackError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    key: String,
    mode: KeyMode,
}

impl SecretKey {
    /// Validates and wraps a secret key.
    ///
    /// # Errors
    ///
    /// Returns [`PaystackError::Authentication`] when the key does not start
    /// with `sk_test` or `sk_live`.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let mode = if key.starts_with("sk_test") {
            KeyMode::Test
        } else if key.starts_with("sk_live") {
            KeyMode::Live
        } else {
            return Err(PaystackError::Authentication(ApiFailure::new(
                "Invalid secret key format. Key should start with 'sk_test' or 'sk_live'",
            )));
        };
        Ok(Self { key, mode })
    }

    /// Returns whether this key targets the sandbox or production.
    #[must_use]
    pub fn mode(&self) -> KeyMode {
        self.mode
    }

    /// Returns the `Authorization` header value for this key.
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.key)
    }

    /// Masked form safe for logs: prefix and last four characters only.
    #[must_use]
    pub fn masked(&self) -> String {
        if self.key.len() > 11
            && let (Some(prefix), Some(suffix)) =
                (self.key.get(..7), self.key.get(self.key.len() - 4..))
        {
            format!("{prefix}***{suffix}")
        } else {
            "***".to_owned()
        }
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("key", &self.masked())
            .field("mode", &self.mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_key_accepted() {
        let key = SecretKey::new("sk_test_abc123def456").unwrap();
        assert_eq!(key.mode(), KeyMode::Test);
    }

    #[test]
    fn test_live_key_accepted() {
        let key = SecretKey::new("sk_live_abc123def456").unwrap();
        assert_eq!(key.mode(), KeyMode::Live);
    }

    #[test]
    fn test_unrecognized_prefix_rejected() {
        let result = SecretKey::new("pk_test_abc123def456");
        assert!(matches!(result.unwrap_err(), PaystackError::Authentication(_)));
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = SecretKey::new("");
        assert!(matches!(result.unwrap_err(), PaystackError::Authentication(_)));
    }

    #[test]
    fn test_bare_prefix_accepted() {
        // The gate checks the prefix only; length is the provider's concern.
        assert!(SecretKey::new("sk_test").is_ok());
    }

    #[test]
    fn test_bearer_value() {
        let key = SecretKey::new("sk_test_abc").unwrap();
        assert_eq!(key.bearer(), "Bearer sk_test_abc");
    }

    #[test]
    fn test_debug_masks_key_material() {
        let key = SecretKey::new("sk_test_8c3f21a9b0d44e02").unwrap();
        let debug = format!("{key:?}");
        assert!(debug.contains("sk_test***4e02"));
        assert!(!debug.contains("8c3f21a9b0d4"));
    }

    #[test]
    fn test_debug_short_key_fully_masked() {
        let key = SecretKey::new("sk_test").unwrap();
        assert_eq!(key.masked(), "***");
    }
}
