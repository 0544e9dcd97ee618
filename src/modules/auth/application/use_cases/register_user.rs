use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::validation::{
    validate_email, validate_password, validate_username, ValidationErrors,
};
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::outgoing::{
    password_hasher::PasswordHasher,
    token_provider::TokenProvider,
    user_query::UserQuery,
    user_repository::{CreateUserData, UserRepository},
    UserRepositoryError,
};
use crate::email::application::ports::outgoing::UserEmailNotifier;

#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterUserOutput {
    pub email: String,
    pub username: String,
    /// Session token, usable right away
    pub token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(
        &self,
        input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError>;
}

pub struct RegisterUserUseCase<Q, R>
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

impl<Q, R> RegisterUserUseCase<Q, R>
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

    /// Field rules first, then uniqueness for the fields that passed.
    async fn validate(
        &self,
        input: RegisterUserInput,
    ) -> Result<RegisterUserInput, RegisterUserError> {
        let mut errors = ValidationErrors::new();

        let email = validate_email(&input.email)
            .map_err(|msg| errors.add("email", msg))
            .ok();
        let username = validate_username(&input.username)
            .map_err(|msg| errors.add("username", msg))
            .ok();
        let password = validate_password(&input.password, self.password_policy.as_ref())
            .map_err(|msg| errors.add("password", msg))
            .ok();

        if let Some(email) = &email {
            let existing = self
                .query
                .find_by_email(email)
                .await
                .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
            if existing.is_some() {
                errors.add("email", "user with this email already exists.");
            }
        }

        if let Some(username) = &username {
            let existing = self
                .query
                .find_by_username(username)
                .await
                .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
            if existing.is_some() {
                errors.add("username", "user with this username already exists.");
            }
        }

        match (email, username, password) {
            (Some(email), Some(username), Some(password)) if errors.is_empty() => {
                Ok(RegisterUserInput {
                    email,
                    username,
                    password,
                })
            }
            _ => Err(RegisterUserError::Validation(errors)),
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        let input = self.validate(input).await?;

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        // Accounts stay inactive until the email address is verified
        let user = self
            .repository
            .create_user(CreateUserData {
                email: input.email,
                username: input.username,
                password_hash,
                is_active: false,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterUserError::Validation(
                    ValidationErrors::single("email", "user with this email already exists."),
                ),
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        let token = self
            .token_provider
            .generate_session_token(&user.email, &user.username)
            .map_err(|e| RegisterUserError::TokenFailed(e.to_string()))?;

        let verification_token = self
            .token_provider
            .generate_verification_token(&user.email)
            .map_err(|e| RegisterUserError::TokenFailed(e.to_string()))?;

        if let Err(e) = self
            .email_notifier
            .send_verification_email(&user.email, &user.username, &verification_token)
            .await
        {
            tracing::warn!(
                email = %user.email,
                error = %e,
                "User registered but verification email failed"
            );
        }

        Ok(RegisterUserOutput {
            email: user.email,
            username: user.username,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::TokenPurpose;
    use crate::auth::application::ports::outgoing::user_query::UserQueryError;
    use crate::auth::application::ports::outgoing::user_repository::UserResult;
    use crate::auth::application::services::password::BasicPasswordPolicy;
    use crate::email::application::ports::outgoing::UserEmailNotificationError;
    use crate::tests::support::auth_helper::test_helpers::{create_test_jwt_service, stored_user};
    use crate::tests::support::mocks::{
        MockEmailNotifierMock, MockUserQueryMock, MockUserRepositoryMock, PlainHasher,
    };
    use mockall::predicate::*;
    use std::sync::Mutex;
    use uuid::Uuid;

    fn input() -> RegisterUserInput {
        RegisterUserInput {
            email: "a@x.com".to_string(),
            username: "a_writer".to_string(),
            password: "Secret123".to_string(),
        }
    }

    fn empty_query() -> MockUserQueryMock {
        let mut query = MockUserQueryMock::new();
        query.expect_find_by_email().returning(|_| Ok(None));
        query.expect_find_by_username().returning(|_| Ok(None));
        query
    }

    fn echo_repository() -> MockUserRepositoryMock {
        let mut repository = MockUserRepositoryMock::new();
        repository
            .expect_create_user()
            .withf(|data| {
                data.email == "a@x.com"
                    && data.password_hash == "hashed:Secret123"
                    && !data.is_active
            })
            .times(1)
            .returning(|data| {
                Ok(UserResult {
                    id: Uuid::new_v4(),
                    email: data.email,
                    username: data.username,
                    is_verified: false,
                    is_active: data.is_active,
                })
            });
        repository
    }

    fn use_case(
        query: MockUserQueryMock,
        repository: MockUserRepositoryMock,
        notifier: MockEmailNotifierMock,
    ) -> RegisterUserUseCase<MockUserQueryMock, MockUserRepositoryMock> {
        RegisterUserUseCase::new(
            query,
            repository,
            Arc::new(PlainHasher),
            Arc::new(BasicPasswordPolicy),
            Arc::new(create_test_jwt_service()),
            Arc::new(notifier),
        )
    }

    #[tokio::test]
    async fn test_register_success_sends_one_verification_email() {
        let jwt = create_test_jwt_service();
        let sent_token = Arc::new(Mutex::new(String::new()));
        let captured = sent_token.clone();

        let mut notifier = MockEmailNotifierMock::new();
        notifier
            .expect_send_verification_email()
            .with(eq("a@x.com"), eq("a_writer"), always())
            .times(1)
            .returning(move |_, _, token| {
                *captured.lock().unwrap() = token.to_string();
                Ok(())
            });

        let output = use_case(empty_query(), echo_repository(), notifier)
            .execute(input())
            .await
            .unwrap();

        assert_eq!(output.email, "a@x.com");
        assert_eq!(output.username, "a_writer");

        let session = jwt.decode_token(&output.token).unwrap();
        assert_eq!(session.purpose(), Some(TokenPurpose::Session));

        let emailed = jwt.decode_token(&sent_token.lock().unwrap()).unwrap();
        assert_eq!(emailed.purpose(), Some(TokenPurpose::Verification));
        assert_eq!(emailed.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_email_failure_does_not_fail_registration() {
        let mut notifier = MockEmailNotifierMock::new();
        notifier
            .expect_send_verification_email()
            .times(1)
            .returning(|_, _, _| {
                Err(UserEmailNotificationError::EmailSendingFailed(
                    "SMTP down".to_string(),
                ))
            });

        let result = use_case(empty_query(), echo_repository(), notifier)
            .execute(input())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_duplicate_email_and_username_are_reported_per_field() {
        let mut query = MockUserQueryMock::new();
        query
            .expect_find_by_email()
            .returning(|_| Ok(Some(stored_user("a@x.com", "other"))));
        query
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user("b@x.com", "a_writer"))));

        let mut repository = MockUserRepositoryMock::new();
        repository.expect_create_user().times(0);
        let mut notifier = MockEmailNotifierMock::new();
        notifier.expect_send_verification_email().times(0);

        let result = use_case(query, repository, notifier).execute(input()).await;

        match result {
            Err(RegisterUserError::Validation(errors)) => {
                assert!(errors.field("email").is_some());
                assert!(errors.field("username").is_some());
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_fields_skip_lookups() {
        let mut query = MockUserQueryMock::new();
        query.expect_find_by_email().times(0);
        query.expect_find_by_username().times(0);

        let result = use_case(
            query,
            MockUserRepositoryMock::new(),
            MockEmailNotifierMock::new(),
        )
        .execute(RegisterUserInput {
            email: "not-an-email".to_string(),
            username: "a b".to_string(),
            password: "short".to_string(),
        })
        .await;

        match result {
            Err(RegisterUserError::Validation(errors)) => {
                assert!(errors.field("email").is_some());
                assert!(errors.field("username").is_some());
                assert!(errors.field("password").is_some());
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_store_level_conflict_maps_to_validation() {
        let mut repository = MockUserRepositoryMock::new();
        repository
            .expect_create_user()
            .returning(|_| Err(UserRepositoryError::UserAlreadyExists));

        let result = use_case(empty_query(), repository, MockEmailNotifierMock::new())
            .execute(input())
            .await;

        assert!(matches!(result, Err(RegisterUserError::Validation(_))));
    }

    #[tokio::test]
    async fn test_query_failure_is_repository_error() {
        let mut query = MockUserQueryMock::new();
        query
            .expect_find_by_email()
            .returning(|_| Err(UserQueryError::DatabaseError("down".to_string())));

        let result = use_case(
            query,
            MockUserRepositoryMock::new(),
            MockEmailNotifierMock::new(),
        )
        .execute(input())
        .await;

        assert!(matches!(result, Err(RegisterUserError::RepositoryError(_))));
    }
}
