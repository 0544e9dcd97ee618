use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;

#[derive(Debug, Clone, Default)]
pub struct BasicPasswordPolicy;

impl PasswordPolicy for BasicPasswordPolicy {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
        let length = password.chars().count();

        if length < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort(MIN_PASSWORD_LENGTH));
        }

        if length > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong(MAX_PASSWORD_LENGTH));
        }

        let has_letter = password.chars().any(|c| c.is_alphabetic());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        if !has_letter || !has_digit {
            return Err(PasswordPolicyError::TooWeak);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_letters_and_digits() {
        assert!(BasicPasswordPolicy.validate("Secret123").is_ok());
    }

    #[test]
    fn test_rejects_short_password() {
        assert_eq!(
            BasicPasswordPolicy.validate("abc12"),
            Err(PasswordPolicyError::TooShort(8))
        );
    }

    #[test]
    fn test_rejects_long_password() {
        let password = format!("a1{}", "x".repeat(127));
        assert_eq!(
            BasicPasswordPolicy.validate(&password),
            Err(PasswordPolicyError::TooLong(128))
        );
    }

    #[test]
    fn test_rejects_password_without_digit() {
        assert_eq!(
            BasicPasswordPolicy.validate("onlyletters"),
            Err(PasswordPolicyError::TooWeak)
        );
    }

    #[test]
    fn test_rejects_password_without_letter() {
        assert_eq!(
            BasicPasswordPolicy.validate("1234567890"),
            Err(PasswordPolicyError::TooWeak)
        );
    }
}
