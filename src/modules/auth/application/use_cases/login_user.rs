use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{
    password_hasher::PasswordHasher, token_provider::TokenProvider, UserQuery,
};

// ========================= Login Request =========================
/// Credentials that passed the presence checks.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    pub fn new(email: Option<String>, password: Option<String>) -> Result<Self, LoginError> {
        let email = email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .ok_or(LoginError::MissingEmail)?;

        let password = password
            .filter(|p| !p.is_empty())
            .ok_or(LoginError::MissingPassword)?;

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginError {
    #[error("An email address is required to log in.")]
    MissingEmail,

    #[error("A password is required to log in.")]
    MissingPassword,

    #[error("A user with this email and password was not found.")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, PartialEq)]
pub struct LoginUserResponse {
    pub email: String,
    pub username: String,
    pub token: String,
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

pub struct LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        // 1️⃣ Find user by email, or by username when there is no '@'
        let identifier = request.email();
        let found = if identifier.contains('@') {
            self.query.find_by_email(identifier).await
        } else {
            self.query.find_by_username(identifier).await
        };

        let user = found
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        // 2️⃣ Verify password; unverified accounts may still log in
        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        // 3️⃣ Issue a session token
        let token = self
            .token_provider
            .generate_session_token(&user.email, &user.username)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginUserResponse {
            email: user.email,
            username: user.username,
            token,
        })
    }
}
