//! String emptiness check

/// Returns `true` when no value was provided, or when the provided text
/// trims (whitespace and newlines) down to nothing.
///
/// Absence is meaningful input here, not an error: a missing optional form
/// field counts as empty.
pub fn is_empty(text: Option<&str>) -> bool {
    match text {
        None => true,
        Some(t) => t.trim().is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_empty() {
        assert!(is_empty(None));
    }

    #[test]
    fn test_blank_is_empty() {
        assert!(is_empty(Some("")));
        assert!(is_empty(Some("   ")));
        assert!(is_empty(Some("\n\t \r\n")));
    }

    #[test]
    fn test_content_is_not_empty() {
        assert!(!is_empty(Some(" a ")));
        assert!(!is_empty(Some("text")));
        assert!(!is_empty(Some("\n.\n")));
    }
}
