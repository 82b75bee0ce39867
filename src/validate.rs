//! Pre-flight request validation.
//!
//! Cheap local checks performed before a request is issued, so obviously
//! invalid input fails without a network round trip. All checks are
//! synchronous and produce [`PaystackError::Validation`] with per-field
//! messages.

use std::collections::BTreeMap;

use crate::error::{ApiFailure, PaystackError, Result};

/// Maximum accepted email length.
const MAX_EMAIL_LEN: usize = 254;

/// Minimum amounts by currency, in the smallest currency unit.
const MIN_AMOUNTS: [(&str, u64); 3] = [
    ("NGN", 100), // ₦1.00 in kobo
    ("USD", 50),  // $0.50 in cents
    ("GHS", 100), // GH₵1.00 in pesewas
];

/// Fallback minimum for currencies not listed above.
const DEFAULT_MIN_AMOUNT: u64 = 100;

/// Checks that every named field is present and not blank.
///
/// `None`, the empty string, and whitespace-only strings are rejected
/// identically. The error names every missing field at once.
///
/// # Errors
///
/// Returns [`PaystackError::Validation`] listing the missing fields, with a
/// `"This field is required"` entry per field.
pub fn require_fields(fields: &[(&str, Option<&str>)]) -> Result<()> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(PaystackError::Validation {
        failure: ApiFailure::new(format!("Missing required parameters: {}", missing.join(", "))),
        field_errors: missing
            .into_iter()
            .map(|name| (name.to_owned(), "This field is required".to_owned()))
            .collect(),
    })
}

/// Validates an email address shape.
///
/// Accepts `local@domain.tld` where the local part uses
/// `[A-Za-z0-9._%+-]`, the domain is dotted, and the TLD is at least two
/// alphabetic characters. Bounded at 254 characters.
///
/// # Errors
///
/// Returns [`PaystackError::Validation`] with an `email` field error when
/// the address is empty or malformed.
pub fn validate_email(email: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(email_error("Email is required", "Email address is required"));
    }
    if !is_valid_email(email) {
        return Err(email_error("Invalid email format", "Please provide a valid email address"));
    }
    Ok(())
}

fn email_error(message: &str, field_message: &str) -> PaystackError {
    PaystackError::Validation {
        failure: ApiFailure::new(message),
        field_errors: BTreeMap::from([("email".to_owned(), field_message.to_owned())]),
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"._%+-".contains(&b))
    {
        return false;
    }
    if !domain
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'-')
    {
        return false;
    }
    let Some((head, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !head.is_empty() && tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Validates a monetary amount in the smallest currency unit.
///
/// Amounts must be strictly positive and meet the per-currency minimum
/// (NGN 100, USD 50, GHS 100; 100 subunits for anything else).
///
/// # Errors
///
/// Returns [`PaystackError::Validation`] with an `amount` field error.
pub fn validate_amount(amount: u64, currency: &str) -> Result<()> {
    if amount == 0 {
        return Err(amount_error("Amount must be a positive number", "Must be greater than zero"));
    }

    let minimum = MIN_AMOUNTS
        .iter()
        .find(|(code, _)| *code == currency)
        .map_or(DEFAULT_MIN_AMOUNT, |(_, min)| *min);

    if amount < minimum {
        return Err(amount_error(
            format!("Amount too small for {currency}"),
            format!("Minimum amount is {minimum} {currency} subunits"),
        ));
    }
    Ok(())
}

fn amount_error(message: impl Into<String>, field_message: impl Into<String>) -> PaystackError {
    PaystackError::Validation {
        failure: ApiFailure::new(message),
        field_errors: BTreeMap::from([("amount".to_owned(), field_message.into())]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_fields_accepts_non_blank_values() {
        assert!(require_fields(&[("email", Some("a@b.co")), ("reference", Some("ref-1"))]).is_ok());
    }

    #[test]
    fn test_require_fields_rejects_none_empty_and_whitespace_identically() {
        for value in [None, Some(""), Some("   "), Some("\t\n")] {
            let err = require_fields(&[("reference", value)]).unwrap_err();
            let PaystackError::Validation { failure, field_errors } = err else {
                unreachable!("expected Validation for {value:?}");
            };
            assert_eq!(failure.message, "Missing required parameters: reference");
            assert_eq!(
                field_errors.get("reference").map(String::as_str),
                Some("This field is required")
            );
        }
    }

    #[test]
    fn test_require_fields_names_every_missing_field() {
        let err = require_fields(&[
            ("email", None),
            ("amount", Some("100")),
            ("reference", Some("  ")),
        ])
        .unwrap_err();
        let PaystackError::Validation { failure, field_errors } = err else {
            unreachable!("expected Validation");
        };
        assert_eq!(failure.message, "Missing required parameters: email, reference");
        assert_eq!(field_errors.len(), 2);
    }

    #[test]
    fn test_valid_emails_accepted() {
        for email in [
            "user@example.com",
            "first.last@sub.domain.org",
            "user+tag@example.co",
            "u_%+-@example.ng",
        ] {
            assert!(validate_email(email).is_ok(), "{email}");
        }
    }

    #[test]
    fn test_invalid_emails_rejected() {
        for email in [
            "plainaddress",
            "@example.com",
            "user@",
            "user@domain",
            "user@.com",
            "user@domain.c",
            "user@domain.123",
            "user name@example.com",
            "user@exam ple.com",
        ] {
            let err = validate_email(email).unwrap_err();
            assert!(matches!(err, PaystackError::Validation { .. }), "{email}");
        }
    }

    #[test]
    fn test_empty_email_has_required_message() {
        let err = validate_email("").unwrap_err();
        let PaystackError::Validation { failure, .. } = err else {
            unreachable!("expected Validation");
        };
        assert_eq!(failure.message, "Email is required");
    }

    #[test]
    fn test_overlong_email_rejected() {
        let email = format!("{}@example.com", "a".repeat(250));
        assert!(validate_email(&email).is_err());
    }

    #[test]
    fn test_email_at_length_bound_accepted() {
        // 242 + 1 + 11 = 254 characters.
        let email = format!("{}@example.com", "a".repeat(242));
        assert_eq!(email.len(), 254);
        assert!(validate_email(&email).is_ok());
    }

    #[test]
    fn test_amount_zero_rejected() {
        let err = validate_amount(0, "NGN").unwrap_err();
        let PaystackError::Validation { field_errors, .. } = err else {
            unreachable!("expected Validation");
        };
        assert!(field_errors.contains_key("amount"));
    }

    #[test]
    fn test_amount_below_currency_minimum_rejected() {
        assert!(validate_amount(99, "NGN").is_err());
        assert!(validate_amount(49, "USD").is_err());
        assert!(validate_amount(99, "GHS").is_err());
    }

    #[test]
    fn test_amount_at_currency_minimum_accepted() {
        assert!(validate_amount(100, "NGN").is_ok());
        assert!(validate_amount(50, "USD").is_ok());
        assert!(validate_amount(100, "GHS").is_ok());
    }

    #[test]
    fn test_amount_unknown_currency_uses_default_minimum() {
        assert!(validate_amount(99, "KES").is_err());
        assert!(validate_amount(100, "KES").is_ok());
    }

    #[test]
    fn test_amount_minimum_error_names_currency() {
        let err = validate_amount(10, "USD").unwrap_err();
        let PaystackError::Validation { failure, field_errors } = err else {
            unreachable!("expected Validation");
        };
        assert_eq!(failure.message, "Amount too small for USD");
        assert_eq!(
            field_errors.get("amount").map(String::as_str),
            Some("Minimum amount is 50 USD subunits")
        );
    }
}
