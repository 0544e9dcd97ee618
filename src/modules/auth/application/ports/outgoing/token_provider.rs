use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::auth::application::domain::entities::TokenPurpose;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    /// Bad signature, broken encoding or an unreadable claim set.
    #[error("Cannot decode the given token")]
    Malformed,

    #[error("Token cannot be used for this operation")]
    WrongPurpose,

    #[error("{0}")]
    Rejected(String),

    #[error("Token encoding error: {0}")]
    Encoding(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub exp: i64,
    #[serde(default)]
    pub iat: i64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl TokenClaims {
    pub fn purpose(&self) -> Option<TokenPurpose> {
        TokenPurpose::from_claim(self.token_type.as_deref())
    }
}

pub trait TokenProvider: Send + Sync {
    /// Session token with the configured lifetime.
    fn generate_session_token(&self, email: &str, username: &str) -> Result<String, TokenError>;

    fn generate_session_token_with_ttl(
        &self,
        email: &str,
        username: &str,
        ttl: Duration,
    ) -> Result<String, TokenError>;

    fn generate_verification_token(&self, email: &str) -> Result<String, TokenError>;

    fn generate_reset_token(&self, email: &str) -> Result<String, TokenError>;

    /// Checks signature and expiry only.
    fn decode_token(&self, token: &str) -> Result<TokenClaims, TokenError>;

    /// Decodes and requires the token's purpose to be one of `accepted`.
    fn decode_for(
        &self,
        token: &str,
        accepted: &[TokenPurpose],
    ) -> Result<TokenClaims, TokenError> {
        let claims = self.decode_token(token)?;
        match claims.purpose() {
            Some(purpose) if accepted.contains(&purpose) => Ok(claims),
            _ => Err(TokenError::WrongPurpose),
        }
    }
}
