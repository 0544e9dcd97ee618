use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::validation::validate_email;
use crate::auth::application::ports::outgoing::{
    token_provider::TokenProvider, user_query::UserQuery,
};
use crate::email::application::ports::outgoing::UserEmailNotifier;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForgotPasswordError {
    #[error("{0}")]
    InvalidEmail(String),

    #[error("Account with the email does not exist.")]
    UserNotFound,

    #[error("Token generation failed: {0}")]
    TokenFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IForgotPasswordUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<(), ForgotPasswordError>;
}

pub struct ForgotPasswordUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    token_provider: Arc<dyn TokenProvider>,
    email_notifier: Arc<dyn UserEmailNotifier>,
}

impl<Q> ForgotPasswordUseCase<Q>
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
impl<Q> IForgotPasswordUseCase for ForgotPasswordUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, email: &str) -> Result<(), ForgotPasswordError> {
        let email = validate_email(email).map_err(ForgotPasswordError::InvalidEmail)?;

        let user = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| ForgotPasswordError::QueryError(e.to_string()))?
            .ok_or(ForgotPasswordError::UserNotFound)?;

        let token = self
            .token_provider
            .generate_reset_token(&user.email)
            .map_err(|e| ForgotPasswordError::TokenFailed(e.to_string()))?;

        if let Err(e) = self
            .email_notifier
            .send_password_reset_email(&user.email, &token)
            .await
        {
            tracing::warn!(email = %user.email, error = %e, "Password reset email failed");
        }

        Ok(())
    }
}
