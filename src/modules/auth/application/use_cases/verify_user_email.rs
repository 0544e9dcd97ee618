use crate::auth::application::domain::entities::TokenPurpose;
use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};
use crate::modules::auth::application::ports::outgoing::{
    user_query::UserQuery, user_repository::UserRepository, UserRepositoryError,
};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerifyUserEmailError {
    #[error("Token has expired.")]
    TokenExpired,

    #[error("Invalid token.")]
    TokenInvalid,

    #[error("User does not exist.")]
    UserNotFound,

    #[error("Email already verified.")]
    AlreadyVerified,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait IVerifyUserEmailUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<(), VerifyUserEmailError>;
}

pub struct VerifyUserEmailUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> VerifyUserEmailUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            query,
            repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IVerifyUserEmailUseCase for VerifyUserEmailUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<(), VerifyUserEmailError> {
        // Only the emailed token proves the mailbox
        let claims = self
            .token_provider
            .decode_for(token, &[TokenPurpose::Verification])
            .map_err(|e| match e {
                TokenError::Expired => VerifyUserEmailError::TokenExpired,
                _ => VerifyUserEmailError::TokenInvalid,
            })?;

        let user = self
            .query
            .find_by_email(&claims.email)
            .await
            .map_err(|e| VerifyUserEmailError::DatabaseError(e.to_string()))?
            .ok_or(VerifyUserEmailError::UserNotFound)?;

        if user.is_verified {
            return Err(VerifyUserEmailError::AlreadyVerified);
        }

        self.repository
            .mark_verified(user.id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => VerifyUserEmailError::UserNotFound,
                other => VerifyUserEmailError::DatabaseError(other.to_string()),
            })?;

        tracing::info!(email = %user.email, "Email verified");
        Ok(())
    }
}
