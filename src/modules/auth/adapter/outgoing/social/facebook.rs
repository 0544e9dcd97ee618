use async_trait::async_trait;
use serde::Deserialize;

use crate::auth::application::ports::outgoing::social_auth_provider::{
    OAuthVersion, ProviderToken, SocialAuthProvider, SocialIdentity, SocialProviderError,
};

pub const FACEBOOK_PROVIDER: &str = "facebook";
const FACEBOOK_ME_URL: &str = "https://graph.facebook.com/v19.0/me";

#[derive(Debug, Deserialize)]
struct FacebookUser {
    id: String,
    email: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FacebookProvider {
    http_client: reqwest::Client,
    me_url: String,
}

impl FacebookProvider {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_endpoint(http_client, FACEBOOK_ME_URL)
    }

    pub fn with_endpoint(http_client: reqwest::Client, me_url: &str) -> Self {
        Self {
            http_client,
            me_url: me_url.to_string(),
        }
    }
}

#[async_trait]
impl SocialAuthProvider for FacebookProvider {
    fn name(&self) -> &str {
        FACEBOOK_PROVIDER
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
            .get(&self.me_url)
            .query(&[
                ("fields", "id,name,email"),
                ("access_token", access_token.as_str()),
            ])
            .send()
            .await?;

        let user: FacebookUser = super::read_json(FACEBOOK_PROVIDER, response).await?;

        Ok(SocialIdentity {
            provider_uid: user.id,
            email: user.email,
            name: user.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> FacebookProvider {
        FacebookProvider::with_endpoint(reqwest::Client::new(), &format!("{}/me", server.uri()))
    }

    #[tokio::test]
    async fn test_fetch_identity_requests_email_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .and(query_param("fields", "id,name,email"))
            .and(query_param("access_token", "EAAB"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "10158",
                "name": "Bob",
                "email": "bob@example.com"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let identity = provider_for(&server)
            .fetch_identity(&ProviderToken::OAuth2 {
                access_token: "EAAB".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(identity.provider_uid, "10158");
        assert_eq!(identity.email.as_deref(), Some("bob@example.com"));
    }

    #[tokio::test]
    async fn test_identity_without_email() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "id": "10158", "name": "Bob" })),
            )
            .mount(&server)
            .await;

        let identity = provider_for(&server)
            .fetch_identity(&ProviderToken::OAuth2 {
                access_token: "EAAB".to_string(),
            })
            .await
            .unwrap();

        assert!(identity.email.is_none());
    }

    #[tokio::test]
    async fn test_unexpected_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = provider_for(&server)
            .fetch_identity(&ProviderToken::OAuth2 {
                access_token: "EAAB".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(SocialProviderError::InvalidResponse(_))
        ));
    }
}
