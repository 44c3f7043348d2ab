use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{common::entities::app_errors::CoreError, user::{entities::User, ports::UserRepository}},
    entity::users::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, user: User) -> Result<User, CoreError> {
        let active_model = ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            rating_sum: Set(user.rating_sum),
            rating_count: Set(user.rating_count),
            trust_score: Set(user.trust_score),
            items_shared: Set(user.items_shared),
            items_received: Set(user.items_received),
            created_at: Set(user.created_at.fixed_offset()),
            updated_at: Set(user.updated_at.fixed_offset()),
        };

        // Two racing first-sight registrations for the same subject id are
        // both fine; the second insert is a no-op and the read below sees
        // the winner's row.
        Entity::insert(active_model)
            .on_conflict(OnConflict::column(Column::Id).do_nothing().to_owned())
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create user: {}", e);
                CoreError::InternalServerError
            })?;

        let created = Entity::find()
            .filter(Column::Id.eq(user.id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load created user: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or(CoreError::InternalServerError)?;

        Ok(User::from(created))
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = Entity::find()
            .filter(Column::Id.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }
}
