use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;

use crate::auth::application::domain::entities::TokenPurpose;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("config", &"JwtConfig")
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate_token(
        &self,
        email: &str,
        username: Option<&str>,
        purpose: TokenPurpose,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let now = Utc::now();

        let claims = TokenClaims {
            email: email.to_string(),
            username: username.map(str::to_string),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            token_type: purpose.claim().map(str::to_string),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_session_token(&self, email: &str, username: &str) -> Result<String, TokenError> {
        let ttl = Duration::seconds(self.config.session_token_expiry);
        self.generate_session_token_with_ttl(email, username, ttl)
    }

    fn generate_session_token_with_ttl(
        &self,
        email: &str,
        username: &str,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        self.generate_token(email, Some(username), TokenPurpose::Session, ttl)
    }

    fn generate_verification_token(&self, email: &str) -> Result<String, TokenError> {
        let ttl = Duration::seconds(self.config.verification_token_expiry);
        self.generate_token(email, None, TokenPurpose::Verification, ttl)
    }

    fn generate_reset_token(&self, email: &str) -> Result<String, TokenError> {
        let ttl = Duration::seconds(self.config.reset_token_expiry);
        self.generate_token(email, None, TokenPurpose::PasswordReset, ttl)
    }

    fn decode_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::Expired
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::warn!("Security alert: Invalid token signature detected");
                        TokenError::Malformed
                    }
                    ErrorKind::InvalidToken
                    | ErrorKind::Base64(_)
                    | ErrorKind::Json(_)
                    | ErrorKind::Utf8(_) => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::Malformed
                    }
                    _ => {
                        tracing::warn!(error = %e, "Token verification failed");
                        TokenError::Rejected(e.to_string())
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose, Engine as _};

    const TEST_SECRET: &str = "FAKE_JWT_SECRET_DO_NOT_USE_IN_PRODUCTION";

    fn create_test_jwt_service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: TEST_SECRET.to_string(),
            session_token_expiry: 3600,
            verification_token_expiry: 86400,
            reset_token_expiry: 3600,
        })
    }

    #[test]
    fn test_session_token_carries_email_and_username_without_type() {
        let service = create_test_jwt_service();

        let token = service
            .generate_session_token("a@x.com", "a")
            .expect("Token should be generated");

        let claims = service.decode_token(&token).expect("Token should be valid");
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.username.as_deref(), Some("a"));
        assert_eq!(claims.token_type, None);
        assert_eq!(claims.purpose(), Some(TokenPurpose::Session));
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_reset_token_has_reset_password_type() {
        let service = create_test_jwt_service();

        let token = service.generate_reset_token("a@x.com").unwrap();
        let claims = service.decode_token(&token).unwrap();

        assert_eq!(claims.token_type.as_deref(), Some("reset password"));
        assert_eq!(claims.username, None);
    }

    #[test]
    fn test_decode_for_rejects_wrong_purpose() {
        let service = create_test_jwt_service();
        let session = service.generate_session_token("a@x.com", "a").unwrap();

        let result = service.decode_for(&session, &[TokenPurpose::PasswordReset]);
        assert_eq!(result, Err(TokenError::WrongPurpose));

        let verification = service.generate_verification_token("a@x.com").unwrap();
        let accepted = service.decode_for(
            &verification,
            &[TokenPurpose::Verification, TokenPurpose::Session],
        );
        assert!(accepted.is_ok());
    }

    #[test]
    fn test_decode_for_rejects_unknown_type_claim() {
        let service = create_test_jwt_service();
        let claims = TokenClaims {
            email: "a@x.com".to_string(),
            username: None,
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
            iat: Utc::now().timestamp(),
            token_type: Some("reset_password".to_string()),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        let result = service.decode_for(&token, &[TokenPurpose::PasswordReset]);
        assert_eq!(result, Err(TokenError::WrongPurpose));
    }

    #[test]
    fn test_social_session_ttl_is_respected() {
        let service = create_test_jwt_service();

        let token = service
            .generate_session_token_with_ttl("a@x.com", "a", Duration::days(20))
            .unwrap();
        let claims = service.decode_token(&token).unwrap();

        let expected = (Utc::now() + Duration::days(20)).timestamp();
        assert!((claims.exp - expected).abs() <= 5);
    }

    #[test]
    fn test_expired_token() {
        let service = JwtTokenService::new(JwtConfig {
            secret_key: TEST_SECRET.to_string(),
            session_token_expiry: -3600,
            verification_token_expiry: 86400,
            reset_token_expiry: 3600,
        });

        let token = service.generate_session_token("a@x.com", "a").unwrap();

        assert_eq!(service.decode_token(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_invalid_token_is_malformed() {
        let service = create_test_jwt_service();

        assert_eq!(
            service.decode_token("invalid.jwt.token"),
            Err(TokenError::Malformed)
        );
        assert_eq!(
            service.decode_token("not.a.valid@base64.token!"),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_token_with_invalid_json_payload() {
        let service = create_test_jwt_service();

        let header = general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = general_purpose::URL_SAFE_NO_PAD.encode("not valid json");
        let token = format!("{}.{}.fakesignature", header, payload);

        assert!(service.decode_token(&token).is_err());
    }

    #[test]
    fn test_invalid_signature() {
        let service = create_test_jwt_service();
        let other = JwtTokenService::new(JwtConfig {
            secret_key: format!("{}_DIFFERENT", TEST_SECRET),
            session_token_expiry: 3600,
            verification_token_expiry: 86400,
            reset_token_expiry: 3600,
        });

        let token = other.generate_reset_token("a@x.com").unwrap();

        assert_eq!(service.decode_token(&token), Err(TokenError::Malformed));
    }

    #[test]
    fn test_tampered_token() {
        let service = create_test_jwt_service();
        let mut token = service.generate_verification_token("a@x.com").unwrap();
        token.push('x');

        assert!(service.decode_token(&token).is_err());
    }

    #[test]
    fn test_token_without_exp_is_malformed() {
        #[derive(serde::Serialize)]
        struct NoExp<'a> {
            email: &'a str,
        }

        let service = create_test_jwt_service();
        let token = encode(
            &Header::new(Algorithm::HS256),
            &NoExp { email: "a@x.com" },
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            service.decode_token(&token),
            Err(TokenError::Malformed)
        ));
    }

    #[test]
    fn test_unaccepted_algorithm_is_rejected_with_message() {
        #[derive(serde::Serialize)]
        struct Claims<'a> {
            email: &'a str,
            exp: i64,
        }

        let service = create_test_jwt_service();
        let token = encode(
            &Header::new(Algorithm::HS512),
            &Claims {
                email: "a@x.com",
                exp: Utc::now().timestamp() + 3600,
            },
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        match service.decode_token(&token) {
            Err(TokenError::Rejected(message)) => assert_eq!(message, "InvalidAlgorithm"),
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_jwt_service_debug_hides_secret() {
        let service = create_test_jwt_service();
        let debug_str = format!("{:?}", service);
        assert!(debug_str.contains("JwtTokenService"));
        assert!(!debug_str.contains(TEST_SECRET));
    }
}
