pub mod facebook;
pub mod google;
mod oauth1;
pub mod twitter;

pub use facebook::FacebookProvider;
pub use google::GoogleProvider;
pub use twitter::TwitterProvider;

use serde::de::DeserializeOwned;

use crate::auth::application::ports::outgoing::social_auth_provider::SocialProviderError;

/// Non-2xx responses mean the provider refused the credentials.
async fn read_json<T: DeserializeOwned>(
    provider: &str,
    response: reqwest::Response,
) -> Result<T, SocialProviderError> {
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(provider, status = status.as_u16(), "Provider rejected credentials");
        return Err(SocialProviderError::Rejected(status.as_u16()));
    }

    Ok(response.json::<T>().await?)
}
