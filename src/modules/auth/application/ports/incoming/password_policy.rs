pub trait PasswordPolicy: Send + Sync {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {0} characters long.")]
    TooShort(usize),

    #[error("Password must not exceed {0} characters.")]
    TooLong(usize),

    #[error("Password must contain at least one letter and one number.")]
    TooWeak,
}
