use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::validation::is_plain_email;
use crate::auth::application::ports::outgoing::{
    token_provider::TokenProvider, user_query::UserQuery,
};
use crate::email::application::ports::outgoing::UserEmailNotifier;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResendVerificationError {
    #[error("Enter a valid email and do not leave field blank.")]
    InvalidEmail,

    #[error("User does not exist.")]
    UserNotFound,

    #[error("User already verified.")]
    AlreadyVerified,

    #[error("Token generation failed: {0}")]
    TokenFailed(String),

    #[error("Email sending failed: {0}")]
    EmailFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IResendVerificationUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<(), ResendVerificationError>;
}

pub struct ResendVerificationUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    token_provider: Arc<dyn TokenProvider>,
    email_notifier: Arc<dyn UserEmailNotifier>,
}

impl<Q> ResendVerificationUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        token_provider: Arc<dyn TokenProvider>,
        email_notifier: Arc<dyn UserEmailNotifier>,
    ) -> Self {
        Self {
            query,
            token_provider,
            email_notifier,
        }
    }
}

#[async_trait]
impl<Q> IResendVerificationUseCase for ResendVerificationUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, email: &str) -> Result<(), ResendVerificationError> {
        let email = email.trim();
        if !is_plain_email(email) {
            return Err(ResendVerificationError::InvalidEmail);
        }

        let user = self
            .query
            .find_by_email(email)
            .await
            .map_err(|e| ResendVerificationError::QueryError(e.to_string()))?
            .ok_or(ResendVerificationError::UserNotFound)?;

        if user.is_verified {
            return Err(ResendVerificationError::AlreadyVerified);
        }

        let token = self
            .token_provider
            .generate_verification_token(&user.email)
            .map_err(|e| ResendVerificationError::TokenFailed(e.to_string()))?;

        // Send verification email
        self.email_notifier
            .resend_verification_email(&user.email, &user.username, &token)
            .await
            .map_err(|e| ResendVerificationError::EmailFailed(e.to_string()))?;

        Ok(())
    }
}
