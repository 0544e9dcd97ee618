use async_trait::async_trait;
use chrono::Duration;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::validation::{
    is_username_char, MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH,
};
use crate::auth::application::ports::outgoing::{
    password_hasher::PasswordHasher,
    social_account_repository::{SocialAccountError, SocialAccountLink, SocialAccountRepository},
    social_auth_provider::{OAuthVersion, ProviderToken},
    token_provider::TokenProvider,
    user_query::{UserQuery, UserQueryResult},
    user_repository::{CreateUserData, UserRepository, UserResult},
    UserRepositoryError,
};
use crate::auth::application::services::social::SocialProviderRegistry;

/// Social sessions outlive regular ones.
pub const SOCIAL_SESSION_DAYS: i64 = 20;

const USERNAME_SUFFIX_LENGTH: usize = 6;
const GENERATED_PASSWORD_LENGTH: usize = 32;
const USERNAME_ATTEMPTS: usize = 5;

#[derive(Debug, Clone)]
pub struct SocialAuthInput {
    pub provider: String,
    pub access_token: String,
    pub access_token_secret: Option<String>,
    /// Email of the caller when the request carried a valid session token.
    pub current_user_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialAuthOutput {
    pub email: String,
    pub username: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SocialAuthError {
    #[error("Please provide a valid social provider")]
    UnknownProvider,

    #[error("Please provide a secret token")]
    MissingTokenSecret,

    #[error("Invalid token")]
    Provider(String),

    #[error("The social account did not share an email address.")]
    EmailUnavailable,

    #[error("You are already logged in with another service")]
    AlreadyAssociated,

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenFailed(String),
}

#[async_trait]
pub trait ISocialAuthUseCase: Send + Sync {
    async fn execute(&self, input: SocialAuthInput) -> Result<SocialAuthOutput, SocialAuthError>;
}

pub struct SocialAuthUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    providers: SocialProviderRegistry,
    social_accounts: Arc<dyn SocialAccountRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

fn repository_error(e: impl ToString) -> SocialAuthError {
    SocialAuthError::Repository(e.to_string())
}

fn into_user(user: UserQueryResult) -> UserResult {
    UserResult {
        id: user.id,
        email: user.email,
        username: user.username,
        is_verified: user.is_verified,
        is_active: user.is_active,
    }
}

fn random_alphanumeric(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Username candidate from the local part of an email address, reduced to
/// allowed characters and shortened so a suffix still fits.
pub(crate) fn username_base(email: &str) -> String {
    email
        .split('@')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| is_username_char(*c))
        .take(MAX_USERNAME_LENGTH - USERNAME_SUFFIX_LENGTH - 1)
        .collect()
}

impl<Q, R> SocialAuthUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        providers: SocialProviderRegistry,
        social_accounts: Arc<dyn SocialAccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            repository,
            providers,
            social_accounts,
            password_hasher,
            token_provider,
        }
    }

    async fn current_user(
        &self,
        email: Option<&str>,
    ) -> Result<Option<UserQueryResult>, SocialAuthError> {
        match email {
            Some(email) => self
                .query
                .find_by_email(email)
                .await
                .map_err(repository_error),
            None => Ok(None),
        }
    }

    async fn available_username(&self, email: &str) -> Result<String, SocialAuthError> {
        let base = username_base(email);

        if base.chars().count() >= MIN_USERNAME_LENGTH
            && self
                .query
                .find_by_username(&base)
                .await
                .map_err(repository_error)?
                .is_none()
        {
            return Ok(base);
        }

        for _ in 0..USERNAME_ATTEMPTS {
            let candidate = format!("{}_{}", base, random_alphanumeric(USERNAME_SUFFIX_LENGTH));
            let taken = self
                .query
                .find_by_username(&candidate)
                .await
                .map_err(repository_error)?;
            if taken.is_none() {
                return Ok(candidate);
            }
        }

        Err(SocialAuthError::Repository(format!(
            "no free username derived from {}",
            base
        )))
    }

    /// New account for an email seen for the first time. The password is
    /// random and never disclosed, so the account is social-only until reset.
    async fn provision(&self, email: &str) -> Result<UserResult, SocialAuthError> {
        let username = self.available_username(email).await?;

        let password_hash = self
            .password_hasher
            .hash_password(&random_alphanumeric(GENERATED_PASSWORD_LENGTH))
            .await
            .map_err(|e| SocialAuthError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create_user(CreateUserData {
                email: email.to_string(),
                username,
                password_hash,
                is_active: true,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => SocialAuthError::AlreadyAssociated,
                other => repository_error(other),
            })?;

        tracing::info!(user_id = %user.id, "Provisioned user from social login");
        Ok(user)
    }

    async fn link(&self, provider: &str, provider_uid: &str, user_id: Uuid) -> Result<(), SocialAuthError> {
        self.social_accounts
            .create_link(SocialAccountLink {
                provider: provider.to_string(),
                provider_uid: provider_uid.to_string(),
                user_id,
            })
            .await
            .map_err(|e| match e {
                SocialAccountError::AlreadyLinked => SocialAuthError::AlreadyAssociated,
                other => repository_error(other),
            })
    }
}

#[async_trait]
impl<Q, R> ISocialAuthUseCase for SocialAuthUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: SocialAuthInput) -> Result<SocialAuthOutput, SocialAuthError> {
        // 1️⃣ Resolve provider and shape the credentials for it
        let provider = self
            .providers
            .load(&input.provider)
            .ok_or(SocialAuthError::UnknownProvider)?;

        let token = match provider.oauth_version() {
            OAuthVersion::OAuth1 => ProviderToken::OAuth1 {
                token: input.access_token,
                token_secret: input
                    .access_token_secret
                    .ok_or(SocialAuthError::MissingTokenSecret)?,
            },
            OAuthVersion::OAuth2 => ProviderToken::OAuth2 {
                access_token: input.access_token,
            },
        };

        // 2️⃣ Ask the provider who this is
        let identity = provider.fetch_identity(&token).await.map_err(|e| {
            tracing::warn!(provider = %input.provider, error = %e, "Social identity lookup failed");
            SocialAuthError::Provider(e.to_string())
        })?;

        let email = identity
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or(SocialAuthError::EmailUnavailable)?
            .to_string();

        // 3️⃣ Existing link, checked against whoever is already signed in
        let current = self
            .current_user(input.current_user_email.as_deref())
            .await?;

        let existing_link = self
            .social_accounts
            .find_link(provider.name(), &identity.provider_uid)
            .await
            .map_err(repository_error)?;

        if let (Some(link), Some(current)) = (&existing_link, &current) {
            if link.user_id != current.id {
                return Err(SocialAuthError::AlreadyAssociated);
            }
        }

        // 4️⃣ Resolve or create the local user
        let user = match existing_link {
            Some(link) => self
                .query
                .find_by_id(link.user_id)
                .await
                .map_err(repository_error)?
                .map(into_user)
                .ok_or_else(|| {
                    SocialAuthError::Repository(format!("linked user {} is missing", link.user_id))
                })?,
            None => {
                let user = match current {
                    Some(current) => into_user(current),
                    None => match self
                        .query
                        .find_by_email(&email)
                        .await
                        .map_err(repository_error)?
                    {
                        Some(user) => into_user(user),
                        None => self.provision(&email).await?,
                    },
                };
                self.link(provider.name(), &identity.provider_uid, user.id)
                    .await?;
                user
            }
        };

        // 5️⃣ Social sign-in always leaves the account active
        let user = if user.is_active {
            user
        } else {
            self.repository
                .activate_user(user.id)
                .await
                .map_err(repository_error)?
        };

        let token = self
            .token_provider
            .generate_session_token_with_ttl(
                &user.email,
                &user.username,
                Duration::days(SOCIAL_SESSION_DAYS),
            )
            .map_err(|e| SocialAuthError::TokenFailed(e.to_string()))?;

        tracing::info!(user_id = %user.id, provider = %input.provider, "Social login");

        Ok(SocialAuthOutput {
            email: user.email,
            username: user.username,
            token,
        })
    }
}
