use async_trait::async_trait;
use mockall::mock;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};
use crate::auth::application::ports::outgoing::social_account_repository::{
    SocialAccountError, SocialAccountLink, SocialAccountRepository,
};
use crate::auth::application::ports::outgoing::social_auth_provider::{
    OAuthVersion, ProviderToken, SocialAuthProvider, SocialIdentity, SocialProviderError,
};
use crate::auth::application::ports::outgoing::user_query::{
    UserQuery, UserQueryError, UserQueryResult,
};
use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UpdateUserData, UserRepository, UserRepositoryError, UserResult,
};
use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotificationError, UserEmailNotifier,
};

mock! {
    pub UserQueryMock {}
    #[async_trait]
    impl UserQuery for UserQueryMock {
        async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError>;
        async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError>;
        async fn find_by_username(&self, username: &str) -> Result<Option<UserQueryResult>, UserQueryError>;
    }
}

mock! {
    pub UserRepositoryMock {}
    #[async_trait]
    impl UserRepository for UserRepositoryMock {
        async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError>;
        async fn mark_verified(&self, user_id: Uuid) -> Result<UserResult, UserRepositoryError>;
        async fn activate_user(&self, user_id: Uuid) -> Result<UserResult, UserRepositoryError>;
        async fn update_password(&self, user_id: Uuid, new_password_hash: String) -> Result<(), UserRepositoryError>;
        async fn update_profile(&self, user_id: Uuid, data: UpdateUserData) -> Result<UserResult, UserRepositoryError>;
    }
}

mock! {
    pub PasswordHasherMock {}
    #[async_trait]
    impl PasswordHasher for PasswordHasherMock {
        async fn hash_password(&self, password: &str) -> Result<String, HashError>;
        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
    }
}

mock! {
    pub EmailNotifierMock {}
    #[async_trait]
    impl UserEmailNotifier for EmailNotifierMock {
        async fn send_verification_email(&self, email: &str, username: &str, token: &str) -> Result<(), UserEmailNotificationError>;
        async fn resend_verification_email(&self, email: &str, username: &str, token: &str) -> Result<(), UserEmailNotificationError>;
        async fn send_password_reset_email(&self, email: &str, token: &str) -> Result<(), UserEmailNotificationError>;
        async fn send_password_reset_done_email(&self, email: &str) -> Result<(), UserEmailNotificationError>;
    }
}

mock! {
    pub SocialAccountRepositoryMock {}
    #[async_trait]
    impl SocialAccountRepository for SocialAccountRepositoryMock {
        async fn find_link(&self, provider: &str, provider_uid: &str) -> Result<Option<SocialAccountLink>, SocialAccountError>;
        async fn create_link(&self, link: SocialAccountLink) -> Result<(), SocialAccountError>;
    }
}

/// Hasher that prefixes instead of hashing; keeps use case tests fast.
pub struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{}", password))
    }
}

/// Provider returning a canned identity and counting calls.
pub struct StubSocialProvider {
    name: &'static str,
    version: OAuthVersion,
    outcome: Result<SocialIdentity, SocialProviderError>,
    calls: AtomicUsize,
}

impl StubSocialProvider {
    pub fn new(
        name: &'static str,
        version: OAuthVersion,
        outcome: Result<SocialIdentity, SocialProviderError>,
    ) -> Self {
        Self {
            name,
            version,
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn returning(name: &'static str, version: OAuthVersion, uid: &str, email: Option<&str>) -> Self {
        Self::new(
            name,
            version,
            Ok(SocialIdentity {
                provider_uid: uid.to_string(),
                email: email.map(str::to_string),
                name: None,
            }),
        )
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SocialAuthProvider for StubSocialProvider {
    fn name(&self) -> &str {
        self.name
    }

    fn oauth_version(&self) -> OAuthVersion {
        self.version
    }

    async fn fetch_identity(
        &self,
        _token: &ProviderToken,
    ) -> Result<SocialIdentity, SocialProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}
