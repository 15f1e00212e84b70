//! Input validation utilities

use crate::constants::MIN_PASSWORD_LENGTH;

/// Rejection message for passwords under [`MIN_PASSWORD_LENGTH`] characters
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

/// True when a required field is absent or empty
pub fn is_missing(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// Validate the minimum admin password length.
///
/// Length is counted in characters, matching the server-side constraint.
pub fn validate_password_length(password: &str) -> Result<(), &'static str> {
    if (password.chars().count() as u64) < MIN_PASSWORD_LENGTH {
        return Err(PASSWORD_TOO_SHORT);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_missing() {
        assert!(is_missing(None));
        assert!(is_missing(Some("")));
        assert!(!is_missing(Some(" ")));
        assert!(!is_missing(Some("x")));
    }

    #[test]
    fn test_password_message_matches_minimum() {
        assert_eq!(
            PASSWORD_TOO_SHORT,
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters")
        );
    }

    #[test]
    fn test_validate_password_length() {
        assert!(validate_password_length("123456").is_ok());
        assert!(validate_password_length("12345").is_err());
        assert!(validate_password_length("").is_err());
        assert!(validate_password_length("ééééé").is_err());
        assert!(validate_password_length("éééééé").is_ok());
    }
}
