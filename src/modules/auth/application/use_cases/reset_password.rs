use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::TokenPurpose;
use crate::auth::application::domain::validation::validate_password;
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::outgoing::{
    password_hasher::PasswordHasher,
    token_provider::{TokenError, TokenProvider},
    user_query::UserQuery,
    user_repository::UserRepository,
    UserRepositoryError,
};
use crate::email::application::ports::outgoing::UserEmailNotifier;

#[derive(Debug, Clone)]
pub struct ResetPasswordInput {
    pub token: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("Passwords do not match")]
    PasswordsDoNotMatch,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Cannot decode the given token")]
    TokenUndecodable,

    #[error("{0}")]
    TokenRejected(String),

    #[error("Something went wrong try again")]
    WrongTokenType,

    #[error("{0}")]
    InvalidPassword(String),

    #[error("User does not exist.")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IResetPasswordUseCase: Send + Sync {
    async fn execute(&self, input: ResetPasswordInput) -> Result<(), ResetPasswordError>;
}

pub struct ResetPasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: Arc<dyn PasswordPolicy>,
    token_provider: Arc<dyn TokenProvider>,
    email_notifier: Arc<dyn UserEmailNotifier>,
}

impl<Q, R> ResetPasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        password_policy: Arc<dyn PasswordPolicy>,
        token_provider: Arc<dyn TokenProvider>,
        email_notifier: Arc<dyn UserEmailNotifier>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            password_policy,
            token_provider,
            email_notifier,
        }
    }
}

#[async_trait]
impl<Q, R> IResetPasswordUseCase for ResetPasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: ResetPasswordInput) -> Result<(), ResetPasswordError> {
        // 1️⃣ Mismatch is reported before the token is even looked at
        if input.password != input.confirm_password {
            return Err(ResetPasswordError::PasswordsDoNotMatch);
        }

        // 2️⃣ Decode
        let claims = self
            .token_provider
            .decode_token(&input.token)
            .map_err(|e| match e {
                TokenError::Expired => ResetPasswordError::TokenExpired,
                TokenError::Malformed => ResetPasswordError::TokenUndecodable,
                other => ResetPasswordError::TokenRejected(other.to_string()),
            })?;

        // 3️⃣ Only reset tokens may change a password here
        if claims.purpose() != Some(TokenPurpose::PasswordReset) {
            return Err(ResetPasswordError::WrongTokenType);
        }

        // 4️⃣ Password policy
        let password = validate_password(&input.password, self.password_policy.as_ref())
            .map_err(ResetPasswordError::InvalidPassword)?;

        // 5️⃣ Resolve user
        let user = self
            .query
            .find_by_email(&claims.email)
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?
            .ok_or(ResetPasswordError::UserNotFound)?;

        // 6️⃣ Hash, store, notify
        let password_hash = self
            .password_hasher
            .hash_password(&password)
            .await
            .map_err(|e| ResetPasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .update_password(user.id, password_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ResetPasswordError::UserNotFound,
                other => ResetPasswordError::RepositoryError(other.to_string()),
            })?;

        if let Err(e) = self
            .email_notifier
            .send_password_reset_done_email(&user.email)
            .await
        {
            tracing::warn!(email = %user.email, error = %e, "Password reset notification failed");
        }

        tracing::info!(email = %user.email, "Password reset");
        Ok(())
    }
}
