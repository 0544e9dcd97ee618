use async_trait::async_trait;

use crate::auth::application::domain::validation::ValidationErrors;

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateUserOutput {
    pub email: String,
    pub username: String,
    pub is_verified: bool,
    pub token: String,
}

/// Absent fields are left unchanged.
#[derive(Clone, Debug, Default)]
pub struct UpdateUserInput {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, thiserror::Error, Clone)]
pub enum UpdateUserError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateUserProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        current_email: &str,
        data: UpdateUserInput,
    ) -> Result<UpdateUserOutput, UpdateUserError>;
}
