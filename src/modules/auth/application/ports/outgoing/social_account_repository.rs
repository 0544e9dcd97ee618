use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct SocialAccountLink {
    pub provider: String,
    pub provider_uid: String,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SocialAccountError {
    #[error("Social account is already linked")]
    AlreadyLinked,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SocialAccountRepository: Send + Sync {
    async fn find_link(
        &self,
        provider: &str,
        provider_uid: &str,
    ) -> Result<Option<SocialAccountLink>, SocialAccountError>;

    async fn create_link(&self, link: SocialAccountLink) -> Result<(), SocialAccountError>;
}
