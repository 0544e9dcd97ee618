use async_trait::async_trait;
use serde::Deserialize;

use super::oauth1::{self, OAuth1Credentials as SigningCredentials};
use crate::auth::application::ports::outgoing::social_auth_provider::{
    OAuthVersion, ProviderToken, SocialAuthProvider, SocialIdentity, SocialProviderError,
};
use crate::shared::config::OAuth1Credentials;

pub const TWITTER_PROVIDER: &str = "twitter";
const VERIFY_CREDENTIALS_URL: &str = "https://api.twitter.com/1.1/account/verify_credentials.json";

const VERIFY_PARAMS: [(&str, &str); 2] = [("include_email", "true"), ("skip_status", "true")];

#[derive(Debug, Deserialize)]
struct TwitterUser {
    id_str: String,
    email: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TwitterProvider {
    http_client: reqwest::Client,
    consumer: OAuth1Credentials,
    verify_url: String,
}

impl TwitterProvider {
    pub fn new(http_client: reqwest::Client, consumer: OAuth1Credentials) -> Self {
        Self::with_endpoint(http_client, consumer, VERIFY_CREDENTIALS_URL)
    }

    pub fn with_endpoint(
        http_client: reqwest::Client,
        consumer: OAuth1Credentials,
        verify_url: &str,
    ) -> Self {
        Self {
            http_client,
            consumer,
            verify_url: verify_url.to_string(),
        }
    }
}

#[async_trait]
impl SocialAuthProvider for TwitterProvider {
    fn name(&self) -> &str {
        TWITTER_PROVIDER
    }

    fn oauth_version(&self) -> OAuthVersion {
        OAuthVersion::OAuth1
    }

    async fn fetch_identity(
        &self,
        token: &ProviderToken,
    ) -> Result<SocialIdentity, SocialProviderError> {
        let ProviderToken::OAuth1 {
            token,
            token_secret,
        } = token
        else {
            return Err(SocialProviderError::TokenMismatch);
        };

        let credentials = SigningCredentials {
            consumer_key: &self.consumer.consumer_key,
            consumer_secret: &self.consumer.consumer_secret,
            token,
            token_secret,
        };

        let authorization = oauth1::authorization_header(
            "GET",
            &self.verify_url,
            &VERIFY_PARAMS,
            &credentials,
            &oauth1::generate_nonce(),
            chrono::Utc::now().timestamp(),
        );

        let response = self
            .http_client
            .get(&self.verify_url)
            .query(&VERIFY_PARAMS)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .send()
            .await?;

        let user: TwitterUser = super::read_json(TWITTER_PROVIDER, response).await?;

        Ok(SocialIdentity {
            provider_uid: user.id_str,
            email: user.email,
            name: user.name,
        })
    }
}
