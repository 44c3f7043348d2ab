use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, QuerySelect, sea_query::Expr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        food_item::{
            entities::{FoodItem, FoodItemStatus},
            ports::FoodItemRepository,
            value_objects::GetFoodItemsFilter,
        },
    },
    entity::food_items::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresFoodItemRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FoodItemRepository for PostgresFoodItemRepository {
    async fn create_item(&self, item: FoodItem) -> Result<FoodItem, CoreError> {
        let active_model = ActiveModel {
            id: Set(item.id),
            owner_id: Set(item.owner_id),
            title: Set(item.title.clone()),
            description: Set(item.description.clone()),
            quantity: Set(item.quantity),
            unit: Set(item.unit.clone()),
            category: Set(item.category.clone()),
            is_vegetarian: Set(item.dietary.vegetarian),
            is_vegan: Set(item.dietary.vegan),
            is_gluten_free: Set(item.dietary.gluten_free),
            is_dairy_free: Set(item.dietary.dairy_free),
            price: Set(item.price),
            original_price: Set(item.original_price),
            is_free: Set(item.is_free),
            pickup_only: Set(item.pickup_only),
            expires_at: Set(item.expires_at.fixed_offset()),
            latitude: Set(item.latitude),
            longitude: Set(item.longitude),
            address: Set(item.address.clone()),
            image_urls: Set(serde_json::to_value(&item.image_urls).unwrap_or_default()),
            status: Set(item.status.as_str().to_string()),
            is_available: Set(item.is_available),
            created_at: Set(item.created_at.fixed_offset()),
            updated_at: Set(item.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create food item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(FoodItem::from(created))
    }

    async fn get_by_id(&self, item_id: Uuid) -> Result<Option<FoodItem>, CoreError> {
        let item = Entity::find()
            .filter(Column::Id.eq(item_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get food item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(item.map(FoodItem::from))
    }

    async fn get_all(&self, filter: GetFoodItemsFilter) -> Result<Vec<FoodItem>, CoreError> {
        let mut query = Entity::find();

        let mut condition = Condition::all();

        if let Some(status) = filter.status {
            condition = condition.add(Column::Status.eq(status.as_str()));
        }

        if let Some(ref category) = filter.category {
            condition = condition.add(Column::Category.eq(category.clone()));
        }

        if let Some(ref categories) = filter.category_in
            && !categories.is_empty()
        {
            condition = condition.add(Column::Category.is_in(categories.clone()));
        }

        if let Some(owner_id) = filter.owner_id {
            condition = condition.add(Column::OwnerId.eq(owner_id));
        }

        if let Some(is_free) = filter.is_free {
            condition = condition.add(Column::IsFree.eq(is_free));
        }

        if let Some(pickup_only) = filter.pickup_only {
            condition = condition.add(Column::PickupOnly.eq(pickup_only));
        }

        if let Some(expires_before) = filter.expires_before {
            condition = condition.add(Column::ExpiresAt.lte(expires_before.fixed_offset()));
        }

        query = query.filter(condition);

        if let Some(ref sort_str) = filter.sort {
            for sort_part in sort_str.split(',') {
                let sort_part = sort_part.trim();
                let (field, order) = match sort_part.strip_prefix('-') {
                    Some(field) => (field, Order::Desc),
                    None => (sort_part, Order::Asc),
                };
                match field {
                    "created_at" => query = query.order_by(Column::CreatedAt, order),
                    "expires_at" => query = query.order_by(Column::ExpiresAt, order),
                    "price" => query = query.order_by(Column::Price, order),
                    "title" => query = query.order_by(Column::Title, order),
                    _ => {}
                }
            }
        } else {
            query = query.order_by_desc(Column::CreatedAt);
        }

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        let items = query.all(&self.db).await.map_err(|e| {
            error!("Failed to get food items: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(items.iter().map(FoodItem::from).collect())
    }

    async fn expire_due(&self, now: DateTime<Utc>) -> Result<u64, CoreError> {
        // Single conditional update: only `available` rows past their
        // deadline are eligible, so reserved and completed items are never
        // expired out from under a live swap.
        let result = Entity::update_many()
            .col_expr(
                Column::Status,
                Expr::value(FoodItemStatus::Expired.as_str()),
            )
            .col_expr(Column::IsAvailable, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(now.fixed_offset()))
            .filter(Column::Status.eq(FoodItemStatus::Available.as_str()))
            .filter(Column::ExpiresAt.lte(now.fixed_offset()))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to expire food items: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}
