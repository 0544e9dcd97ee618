pub const VERIFICATION_TOKEN_TYPE: &str = "verification";
pub const RESET_PASSWORD_TOKEN_TYPE: &str = "reset password";

/// Which flow a signed token may be consumed by.
///
/// Carried in the `type` claim. Session tokens have no `type` claim at all,
/// so a login token can never satisfy a check for a typed purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPurpose {
    Session,
    Verification,
    PasswordReset,
}

impl TokenPurpose {
    pub fn claim(&self) -> Option<&'static str> {
        match self {
            TokenPurpose::Session => None,
            TokenPurpose::Verification => Some(VERIFICATION_TOKEN_TYPE),
            TokenPurpose::PasswordReset => Some(RESET_PASSWORD_TOKEN_TYPE),
        }
    }

    /// Returns `None` for an unknown `type` claim value.
    pub fn from_claim(claim: Option<&str>) -> Option<Self> {
        match claim {
            None => Some(TokenPurpose::Session),
            Some(VERIFICATION_TOKEN_TYPE) => Some(TokenPurpose::Verification),
            Some(RESET_PASSWORD_TOKEN_TYPE) => Some(TokenPurpose::PasswordReset),
            Some(_) => None,
        }
    }
}
