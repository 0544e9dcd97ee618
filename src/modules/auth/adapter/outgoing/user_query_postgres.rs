use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::ports::outgoing::user_query::{UserQueryError, UserQueryResult};
use crate::auth::application::ports::outgoing::UserQuery;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Select};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_query_result(model: UserModel) -> UserQueryResult {
        UserQueryResult {
            id: model.id,
            email: model.email,
            username: model.username,
            password_hash: model.password_hash,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
            is_verified: model.is_verified,
            is_active: model.is_active,
        }
    }

    async fn fetch_one(
        &self,
        select: Select<UserEntity>,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = select.one(&*self.db).await.map_err(|e| {
            tracing::error!(error = %e, "User lookup failed");
            UserQueryError::DatabaseError(e.to_string())
        })?;

        Ok(user.map(Self::map_to_query_result))
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.fetch_one(UserEntity::find_by_id(user_id)).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.fetch_one(UserEntity::find().filter(UserColumn::Email.eq(email)))
            .await
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.fetch_one(UserEntity::find().filter(UserColumn::Username.eq(username)))
            .await
    }
}
