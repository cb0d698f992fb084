//! Password validation

/// Validates a password: at least 8 characters, ASCII letters and digits
/// only, with at least one uppercase letter, one lowercase letter, and one
/// digit.
///
/// Characters outside `[A-Za-z0-9]` reject the password outright, even
/// symbols that would intuitively make it stronger. The restrictive charset
/// is part of the contract; callers rely on it.
pub fn is_valid_password(password: &str) -> bool {
    if password.len() < 8 {
        return false;
    }
    if !password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }

    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    has_uppercase && has_lowercase && has_digit
}
