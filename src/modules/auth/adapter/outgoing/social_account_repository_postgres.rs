use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::social_account_repository::{
    SocialAccountError, SocialAccountLink, SocialAccountRepository,
};

use super::sea_orm_entity::social_accounts::{
    ActiveModel as SocialAccountActiveModel, Column as SocialAccountColumn,
    Entity as SocialAccountEntity,
};
use super::user_repository_postgres::is_unique_violation;

#[derive(Clone, Debug)]
pub struct SocialAccountRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SocialAccountRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SocialAccountRepository for SocialAccountRepositoryPostgres {
    async fn find_link(
        &self,
        provider: &str,
        provider_uid: &str,
    ) -> Result<Option<SocialAccountLink>, SocialAccountError> {
        let link = SocialAccountEntity::find()
            .filter(SocialAccountColumn::Provider.eq(provider))
            .filter(SocialAccountColumn::ProviderUid.eq(provider_uid))
            .one(&*self.db)
            .await
            .map_err(|e| SocialAccountError::DatabaseError(e.to_string()))?;

        Ok(link.map(|model| SocialAccountLink {
            provider: model.provider,
            provider_uid: model.provider_uid,
            user_id: model.user_id,
        }))
    }

    async fn create_link(&self, link: SocialAccountLink) -> Result<(), SocialAccountError> {
        let active_link = SocialAccountActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(link.user_id),
            provider: Set(link.provider),
            provider_uid: Set(link.provider_uid),
            created_at: NotSet,
        };

        active_link.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return SocialAccountError::AlreadyLinked;
            }
            tracing::error!(error = %e, "Failed to store social account link");
            SocialAccountError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}
