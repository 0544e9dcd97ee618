use crate::auth::application::{
    domain::validation::{validate_email, validate_password, validate_username, ValidationErrors},
    ports::incoming::password_policy::PasswordPolicy,
    ports::outgoing::{
        password_hasher::PasswordHasher,
        token_provider::TokenProvider,
        user_repository::{UpdateUserData, UserResult},
        UserQuery, UserRepository, UserRepositoryError,
    },
    use_cases::update_profile::{
        UpdateUserError, UpdateUserInput, UpdateUserOutput, UpdateUserProfileUseCase,
    },
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct UpdateUserProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    user_query: Q,
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: Arc<dyn PasswordPolicy>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> UpdateUserProfileService<Q, R>
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
    ) -> Self {
        Self {
            user_query: query,
            user_repository: repository,
            password_hasher,
            password_policy,
            token_provider,
        }
    }

    fn query_error(e: impl ToString) -> UpdateUserError {
        UpdateUserError::RepositoryError(e.to_string())
    }

    /// Same rules as registration; uniqueness ignores the user's own row.
    async fn validate(
        &self,
        user_id: Uuid,
        data: UpdateUserInput,
    ) -> Result<(Option<String>, Option<String>, Option<String>), UpdateUserError> {
        let mut errors = ValidationErrors::new();

        let email = match data.email.as_deref().map(validate_email) {
            Some(Ok(email)) => {
                let owner = self
                    .user_query
                    .find_by_email(&email)
                    .await
                    .map_err(Self::query_error)?;
                if owner.is_some_and(|u| u.id != user_id) {
                    errors.add("email", "user with this email already exists.");
                }
                Some(email)
            }
            Some(Err(msg)) => {
                errors.add("email", msg);
                None
            }
            None => None,
        };

        let username = match data.username.as_deref().map(validate_username) {
            Some(Ok(username)) => {
                let owner = self
                    .user_query
                    .find_by_username(&username)
                    .await
                    .map_err(Self::query_error)?;
                if owner.is_some_and(|u| u.id != user_id) {
                    errors.add("username", "user with this username already exists.");
                }
                Some(username)
            }
            Some(Err(msg)) => {
                errors.add("username", msg);
                None
            }
            None => None,
        };

        let password = match data
            .password
            .as_deref()
            .map(|p| validate_password(p, self.password_policy.as_ref()))
        {
            Some(Ok(password)) => Some(password),
            Some(Err(msg)) => {
                errors.add("password", msg);
                None
            }
            None => None,
        };

        errors.into_result().map_err(UpdateUserError::Validation)?;
        Ok((email, username, password))
    }

    fn into_output(&self, user: UserResult) -> Result<UpdateUserOutput, UpdateUserError> {
        let token = self
            .token_provider
            .generate_session_token(&user.email, &user.username)
            .map_err(|e| UpdateUserError::TokenFailed(e.to_string()))?;

        Ok(UpdateUserOutput {
            email: user.email,
            username: user.username,
            is_verified: user.is_verified,
            token,
        })
    }
}

#[async_trait]
impl<Q, R> UpdateUserProfileUseCase for UpdateUserProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        current_email: &str,
        data: UpdateUserInput,
    ) -> Result<UpdateUserOutput, UpdateUserError> {
        let current = self
            .user_query
            .find_by_email(current_email)
            .await
            .map_err(Self::query_error)?
            .ok_or(UpdateUserError::UserNotFound)?;

        let (email, username, password) = self.validate(current.id, data).await?;

        let password_hash = match password {
            Some(password) => Some(
                self.password_hasher
                    .hash_password(&password)
                    .await
                    .map_err(|e| UpdateUserError::HashingFailed(e.to_string()))?,
            ),
            None => None,
        };

        let changes = UpdateUserData {
            email,
            username,
            password_hash,
        };

        if changes.is_empty() {
            return self.into_output(UserResult {
                id: current.id,
                email: current.email,
                username: current.username,
                is_verified: current.is_verified,
                is_active: current.is_active,
            });
        }

        let user = self
            .user_repository
            .update_profile(current.id, changes)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
                UserRepositoryError::UserAlreadyExists => {
                    UpdateUserError::Validation(ValidationErrors::single(
                        "email",
                        "user with this email or username already exists.",
                    ))
                }
                other => UpdateUserError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "Profile updated");
        self.into_output(user)
    }
}
