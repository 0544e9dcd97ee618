use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UpdateUserData, UserRepository, UserRepositoryError, UserResult,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

/// True when the database rejected a write on a unique index.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    let err_str = err.to_string().to_lowercase();
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user_result(model: UserModel) -> UserResult {
        UserResult {
            id: model.id,
            email: model.email,
            username: model.username,
            is_verified: model.is_verified,
            is_active: model.is_active,
        }
    }

    fn map_write_error(e: DbErr) -> UserRepositoryError {
        if is_unique_violation(&e) {
            return UserRepositoryError::UserAlreadyExists;
        }
        tracing::error!(error = %e, "User write failed");
        UserRepositoryError::DatabaseError(e.to_string())
    }

    async fn load(&self, user_id: Uuid) -> Result<UserActiveModel, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        Ok(user.into())
    }

    async fn save(&self, active_user: UserActiveModel) -> Result<UserResult, UserRepositoryError> {
        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(Self::map_to_user_result(updated))
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            created_at: NotSet,
            updated_at: NotSet,
            is_verified: Set(false),
            is_active: Set(user.is_active),
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(Self::map_to_user_result(inserted))
    }

    async fn mark_verified(&self, user_id: Uuid) -> Result<UserResult, UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        active_user.is_verified = Set(true);
        active_user.is_active = Set(true);

        self.save(active_user).await
    }

    async fn activate_user(&self, user_id: Uuid) -> Result<UserResult, UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        active_user.is_active = Set(true);

        self.save(active_user).await
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        active_user.password_hash = Set(new_password_hash);

        self.save(active_user).await.map(|_| ())
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: UpdateUserData,
    ) -> Result<UserResult, UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;

        if let Some(email) = data.email {
            active_user.email = Set(email);
        }
        if let Some(username) = data.username {
            active_user.username = Set(username);
        }
        if let Some(password_hash) = data.password_hash {
            active_user.password_hash = Set(password_hash);
        }

        self.save(active_user).await
    }
}
