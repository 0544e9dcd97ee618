use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    ports::outgoing::{token_provider::TokenProvider, UserQuery},
    use_cases::fetch_profile::{FetchUserError, FetchUserOutput, FetchUserProfileUseCase},
};

pub struct FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    user_query: Q,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            user_query: query,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> FetchUserProfileUseCase for FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, email: &str) -> Result<FetchUserOutput, FetchUserError> {
        let user = self
            .user_query
            .find_by_email(email)
            .await?
            .ok_or_else(|| FetchUserError::UserNotFound(email.to_string()))?;

        let token = self
            .token_provider
            .generate_session_token(&user.email, &user.username)
            .map_err(|e| FetchUserError::TokenFailed(e.to_string()))?;

        Ok(FetchUserOutput {
            email: user.email,
            username: user.username,
            is_verified: user.is_verified,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::user_query::{UserQueryError, UserQueryResult};
    use crate::tests::support::auth_helper::test_helpers::{create_test_jwt_service, stored_user};
    use uuid::Uuid;

    struct MockUserQuery {
        result: Result<Option<UserQueryResult>, UserQueryError>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(
            &self,
            _user_id: Uuid,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            unimplemented!()
        }

        async fn find_by_email(
            &self,
            _email: &str,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            self.result.clone()
        }

        async fn find_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            unimplemented!()
        }
    }

    fn service(
        result: Result<Option<UserQueryResult>, UserQueryError>,
    ) -> FetchUserProfileService<MockUserQuery> {
        FetchUserProfileService::new(
            MockUserQuery { result },
            Arc::new(create_test_jwt_service()),
        )
    }

    #[tokio::test]
    async fn test_execute_success() {
        let user = UserQueryResult {
            is_verified: true,
            ..stored_user("test@example.com", "testuser")
        };

        let output = service(Ok(Some(user)))
            .execute("test@example.com")
            .await
            .unwrap();

        assert_eq!(output.email, "test@example.com");
        assert_eq!(output.username, "testuser");
        assert!(output.is_verified);

        let claims = create_test_jwt_service().decode_token(&output.token).unwrap();
        assert_eq!(claims.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_execute_user_not_found() {
        let error = service(Ok(None))
            .execute("gone@example.com")
            .await
            .unwrap_err();

        assert!(matches!(error, FetchUserError::UserNotFound(_)));
        assert!(error.to_string().contains("gone@example.com"));
    }

    #[tokio::test]
    async fn test_execute_query_error() {
        let result = service(Err(UserQueryError::DatabaseError(
            "Connection failed".to_string(),
        )))
        .execute("test@example.com")
        .await;

        assert!(matches!(result, Err(FetchUserError::QueryError(_))));
    }
}
