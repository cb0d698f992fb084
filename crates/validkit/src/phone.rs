//! Phone number validation

use once_cell::sync::Lazy;
use regex::Regex;

// Explicit [0-9]: the regex crate's \d matches non-ASCII digits
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10,15}$").unwrap());

/// Validates a phone number: the entire string must be 10 to 15 ASCII
/// digits. No separators, no leading `+`, no whitespace.
pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone_numbers() {
        assert!(is_valid_phone_number("1234567890"));
        assert!(is_valid_phone_number("123456789012345"));
        assert!(is_valid_phone_number("0000000000"));
    }

    #[test]
    fn test_invalid_phone_numbers() {
        assert!(!is_valid_phone_number(""));
        assert!(!is_valid_phone_number("123"));
        assert!(!is_valid_phone_number("123456789"));
        assert!(!is_valid_phone_number("1234567890123456"));
        assert!(!is_valid_phone_number("12345678901234567"));
        assert!(!is_valid_phone_number("123-456-7890"));
        assert!(!is_valid_phone_number("+1234567890"));
        assert!(!is_valid_phone_number("12345 67890"));
        assert!(!is_valid_phone_number("١٢٣٤٥٦٧٨٩٠"));
    }
}
