#[cfg(test)]
pub mod test_helpers {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::ports::outgoing::user_query::UserQueryResult;
    use crate::auth::application::ports::outgoing::user_repository::UserResult;

    pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only_0123456789";

    pub fn create_test_jwt_service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: TEST_JWT_SECRET.to_string(),
            session_token_expiry: 3600,
            verification_token_expiry: 86400,
            reset_token_expiry: 3600,
        })
    }

    /// Issues tokens that are already an hour past expiry.
    pub fn create_expired_jwt_service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: TEST_JWT_SECRET.to_string(),
            session_token_expiry: -3600,
            verification_token_expiry: -3600,
            reset_token_expiry: -3600,
        })
    }

    pub fn stored_user(email: &str, username: &str) -> UserQueryResult {
        UserQueryResult {
            id: Uuid::new_v4(),
            email: email.to_string(),
            username: username.to_string(),
            password_hash: "$argon2id$stored".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            is_verified: false,
            is_active: false,
        }
    }

    pub fn user_result(user: &UserQueryResult) -> UserResult {
        UserResult {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            is_verified: user.is_verified,
            is_active: user.is_active,
        }
    }
}
