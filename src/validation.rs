// Validation utilities module
// Provides custom validation functions for account credentials

use validator::ValidationError;

/// Shortest accepted password, in characters
pub const PASSWORD_MIN_CHARS: usize = 8;

/// Longest accepted password, in characters
pub const PASSWORD_MAX_CHARS: usize = 24;

/// Validates that a password holds 8 to 24 characters.
/// Length is counted in Unicode scalar values, not bytes.
pub fn validate_password_length(password: &str) -> Result<(), ValidationError> {
    let chars = password.chars().count();
    if (PASSWORD_MIN_CHARS..=PASSWORD_MAX_CHARS).contains(&chars) {
        Ok(())
    } else {
        Err(ValidationError::new("password_length"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_password_length_boundaries() {
        assert!(validate_password_length(&"a".repeat(7)).is_err());
        assert!(validate_password_length(&"a".repeat(8)).is_ok());
        assert!(validate_password_length(&"a".repeat(24)).is_ok());
        assert!(validate_password_length(&"a".repeat(25)).is_err());
        assert!(validate_password_length("").is_err());
    }

    #[test]
    fn test_password_length_counts_characters() {
        // 8 characters, 16 bytes
        assert!(validate_password_length("éééééééé").is_ok());
        // 24 characters, 72 bytes
        assert!(validate_password_length(&"日".repeat(24)).is_ok());
        assert!(validate_password_length(&"日".repeat(25)).is_err());
    }

    proptest! {
        #[test]
        fn prop_accepts_lengths_in_range(password in "\\PC{8,24}") {
            prop_assert!(validate_password_length(&password).is_ok());
        }

        #[test]
        fn prop_rejects_short_passwords(password in "\\PC{0,7}") {
            prop_assert!(validate_password_length(&password).is_err());
        }

        #[test]
        fn prop_rejects_long_passwords(password in "\\PC{25,64}") {
            prop_assert!(validate_password_length(&password).is_err());
        }
    }
}
