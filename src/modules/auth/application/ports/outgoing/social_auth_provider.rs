use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthVersion {
    OAuth1,
    OAuth2,
}

/// Credentials a client obtained from a provider.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderToken {
    OAuth1 { token: String, token_secret: String },
    OAuth2 { access_token: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialIdentity {
    pub provider_uid: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SocialProviderError {
    #[error("Provider request failed: {0}")]
    Http(String),

    #[error("Provider rejected the credentials (status {0})")]
    Rejected(u16),

    #[error("Unexpected provider response: {0}")]
    InvalidResponse(String),

    #[error("Credentials do not match the provider's OAuth version")]
    TokenMismatch,
}

impl From<reqwest::Error> for SocialProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SocialProviderError::InvalidResponse(e.to_string())
        } else {
            SocialProviderError::Http(e.to_string())
        }
    }
}

/// A social identity backend able to exchange client credentials for the
/// provider's view of the user.
#[async_trait]
pub trait SocialAuthProvider: Send + Sync {
    fn name(&self) -> &str;

    fn oauth_version(&self) -> OAuthVersion;

    async fn fetch_identity(
        &self,
        token: &ProviderToken,
    ) -> Result<SocialIdentity, SocialProviderError>;
}
