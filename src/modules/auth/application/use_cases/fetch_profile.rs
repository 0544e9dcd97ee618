use async_trait::async_trait;

use crate::auth::application::ports::outgoing::user_query::UserQueryError;

#[derive(Clone, Debug, PartialEq)]
pub struct FetchUserOutput {
    pub email: String,
    pub username: String,
    pub is_verified: bool,
    /// Freshly issued session token
    pub token: String,
}

#[derive(Debug, thiserror::Error, Clone)]
pub enum FetchUserError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Token generation failed: {0}")]
    TokenFailed(String),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

/// Looks up the authenticated user by the email carried in their token.
#[async_trait]
pub trait FetchUserProfileUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<FetchUserOutput, FetchUserError>;
}
