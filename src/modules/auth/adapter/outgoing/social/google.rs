use async_trait::async_trait;
use serde::Deserialize;

use crate::auth::application::ports::outgoing::social_auth_provider::{
    OAuthVersion, ProviderToken, SocialAuthProvider, SocialIdentity, SocialProviderError,
};

pub const GOOGLE_PROVIDER: &str = "google-oauth2";
const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

#[derive(Debug, Deserialize)]
struct GoogleUserInfo {
    sub: String,
    email: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GoogleProvider {
    http_client: reqwest::Client,
    userinfo_url: String,
}

impl GoogleProvider {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_endpoint(http_client, GOOGLE_USERINFO_URL)
    }

    pub fn with_endpoint(http_client: reqwest::Client, userinfo_url: &str) -> Self {
        Self {
            http_client,
            userinfo_url: userinfo_url.to_string(),
        }
    }
}

#[async_trait]
impl SocialAuthProvider for GoogleProvider {
    fn name(&self) -> &str {
        GOOGLE_PROVIDER
    }

    fn oauth_version(&self) -> OAuthVersion {
        OAuthVersion::OAuth2
    }

    async fn fetch_identity(
        &self,
        token: &ProviderToken,
    ) -> Result<SocialIdentity, SocialProviderError> {
        let ProviderToken::OAuth2 { access_token } = token else {
            return Err(SocialProviderError::TokenMismatch);
        };

        let response = self
            .http_client
            .get(&self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?;

        let info: GoogleUserInfo = super::read_json(GOOGLE_PROVIDER, response).await?;

        Ok(SocialIdentity {
            provider_uid: info.sub,
            email: info.email,
            name: info.name,
        })
    }
}
