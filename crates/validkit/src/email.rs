//! Email validation functions
//!
//! Two rules exist for historical reasons and are kept under distinct names
//! so callers never change behavior by accident. Both are deliberately
//! simple ASCII approximations, not RFC 5321 parsers.

use once_cell::sync::Lazy;
use regex::Regex;

// Canonical rule: top-level label capped at 64 letters
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$").unwrap()
});

// Legacy rule: top-level label of 2+ letters, no upper cap
static EMAIL_BASIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

/// Validates email format against the canonical rule.
///
/// The whole string must be: one or more of `[A-Za-z0-9._%+-]`, an `@`,
/// one or more of `[A-Za-z0-9.-]`, a dot, then 2 to 64 ASCII letters.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validates email format against the legacy rule.
///
/// Identical to [`is_valid_email`] except the final label accepts any
/// length of 2 or more ASCII letters.
pub fn is_valid_email_basic(email: &str) -> bool {
    EMAIL_BASIC_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name+tag@example.co"));
        assert!(is_valid_email("USER_99%x@sub.example-domain.org"));
        assert!(is_valid_email("a@b.io"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@example.c0m"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("user@example.com "));
    }

    #[test]
    fn test_variants_diverge_on_label_length() {
        let label_64 = "a".repeat(64);
        let label_65 = "a".repeat(65);

        assert!(is_valid_email(&format!("user@example.{label_64}")));
        assert!(is_valid_email_basic(&format!("user@example.{label_64}")));

        assert!(!is_valid_email(&format!("user@example.{label_65}")));
        assert!(is_valid_email_basic(&format!("user@example.{label_65}")));
    }

    #[test]
    fn test_basic_rejects_like_canonical() {
        assert!(is_valid_email_basic("user.name+tag@example.co"));
        assert!(!is_valid_email_basic("user@example"));
        assert!(!is_valid_email_basic("user@example.c"));
        assert!(!is_valid_email_basic(""));
    }
}
