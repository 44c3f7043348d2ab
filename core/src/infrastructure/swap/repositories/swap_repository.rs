use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    Order, QueryFilter, QueryOrder, QuerySelect, TransactionTrait, sea_query::Expr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_timestamp},
        food_item::entities::FoodItemStatus,
        swap::{
            entities::{ChatMessage, Swap, SwapStatus},
            ports::SwapRepository,
            value_objects::{GetSwapsFilter, ReviewTarget, SwapRole},
        },
        user::{entities::ReputationDelta, trust::trust_score},
    },
    entity::{
        food_items,
        swap_messages::{
            ActiveModel as MessageActiveModel, Column as MessageColumn, Entity as MessageEntity,
        },
        swaps::{ActiveModel, Column, Entity},
        users,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresSwapRepository {
    pub db: DatabaseConnection,
}

impl PostgresSwapRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Conditional status flip on a food item. The `from` filter makes this the
/// compare-and-swap the whole claim protocol hangs on: a return of 0 means
/// some other writer (a rival claim or the expiry sweeper) got there first.
async fn flip_item_status<C: ConnectionTrait>(
    conn: &C,
    item_id: Uuid,
    from: FoodItemStatus,
    to: FoodItemStatus,
    now: DateTime<Utc>,
) -> Result<u64, CoreError> {
    let result = food_items::Entity::update_many()
        .col_expr(food_items::Column::Status, Expr::value(to.as_str()))
        .col_expr(
            food_items::Column::IsAvailable,
            Expr::value(to == FoodItemStatus::Available),
        )
        .col_expr(
            food_items::Column::UpdatedAt,
            Expr::value(now.fixed_offset()),
        )
        .filter(food_items::Column::Id.eq(item_id))
        .filter(food_items::Column::Status.eq(from.as_str()))
        .exec(conn)
        .await
        .map_err(|e| {
            error!("Failed to flip food item status: {}", e);
            CoreError::InternalServerError
        })?;

    Ok(result.rows_affected)
}

async fn apply_reputation_delta<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    delta: ReputationDelta,
    now: DateTime<Utc>,
) -> Result<(), CoreError> {
    users::Entity::update_many()
        .col_expr(
            users::Column::ItemsShared,
            Expr::col(users::Column::ItemsShared).add(delta.items_shared),
        )
        .col_expr(
            users::Column::ItemsReceived,
            Expr::col(users::Column::ItemsReceived).add(delta.items_received),
        )
        .col_expr(users::Column::UpdatedAt, Expr::value(now.fixed_offset()))
        .filter(users::Column::Id.eq(user_id))
        .exec(conn)
        .await
        .map_err(|e| {
            error!("Failed to update reputation counters: {}", e);
            CoreError::InternalServerError
        })?;

    Ok(())
}

async fn rollback(txn: sea_orm::DatabaseTransaction) {
    if let Err(e) = txn.rollback().await {
        error!("Failed to roll back transaction: {}", e);
    }
}

impl SwapRepository for PostgresSwapRepository {
    async fn create_pending(&self, swap: Swap) -> Result<Swap, CoreError> {
        let (now, _) = generate_timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            CoreError::InternalServerError
        })?;

        // Reserve the primary item. Whoever's conditional update lands
        // first wins the claim; the loser sees zero rows and backs out.
        let reserved = flip_item_status(
            &txn,
            swap.food_item_id,
            FoodItemStatus::Available,
            FoodItemStatus::Reserved,
            now,
        )
        .await?;

        if reserved == 0 {
            rollback(txn).await;
            return Err(CoreError::ItemUnavailable);
        }

        if let Some(offered_item_id) = swap.offered_item_id {
            let reserved = flip_item_status(
                &txn,
                offered_item_id,
                FoodItemStatus::Available,
                FoodItemStatus::Reserved,
                now,
            )
            .await?;

            if reserved == 0 {
                rollback(txn).await;
                return Err(CoreError::OfferedItemUnavailable);
            }
        }

        let active_model = ActiveModel {
            id: Set(swap.id),
            requester_id: Set(swap.requester_id),
            provider_id: Set(swap.provider_id),
            food_item_id: Set(swap.food_item_id),
            offered_item_id: Set(swap.offered_item_id),
            message: Set(swap.message.clone()),
            status: Set(swap.status.as_str().to_string()),
            is_swap: Set(swap.is_swap),
            is_purchase: Set(swap.is_purchase),
            amount: Set(swap.amount),
            requester_rating: Set(swap.requester_rating),
            provider_rating: Set(swap.provider_rating),
            requester_review: Set(swap.requester_review.clone()),
            provider_review: Set(swap.provider_review.clone()),
            created_at: Set(swap.created_at.fixed_offset()),
            updated_at: Set(swap.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&txn)
            .await
            .map_err(|e| {
                error!("Failed to create swap: {}", e);
                CoreError::InternalServerError
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit swap creation: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Swap::from(created))
    }

    async fn get_by_id(&self, swap_id: Uuid) -> Result<Option<Swap>, CoreError> {
        let swap = Entity::find()
            .filter(Column::Id.eq(swap_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get swap: {}", e);
                CoreError::InternalServerError
            })?;

        if let Some(swap_model) = swap {
            let message_models = MessageEntity::find()
                .filter(MessageColumn::SwapId.eq(swap_model.id))
                .order_by_asc(MessageColumn::SentAt)
                .all(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to load swap messages: {}", e);
                    CoreError::InternalServerError
                })?;

            let mut result = Swap::from(swap_model);
            result.messages = message_models.iter().map(ChatMessage::from).collect();
            Ok(Some(result))
        } else {
            Ok(None)
        }
    }

    async fn get_all(&self, filter: GetSwapsFilter) -> Result<Vec<Swap>, CoreError> {
        let mut query = Entity::find();

        let mut condition = Condition::all();

        if let Some(participant) = filter.participant {
            condition = condition.add(match filter.role {
                Some(SwapRole::Requester) => {
                    Condition::all().add(Column::RequesterId.eq(participant))
                }
                Some(SwapRole::Provider) => {
                    Condition::all().add(Column::ProviderId.eq(participant))
                }
                None => Condition::any()
                    .add(Column::RequesterId.eq(participant))
                    .add(Column::ProviderId.eq(participant)),
            });
        }

        if let Some(status) = filter.status {
            condition = condition.add(Column::Status.eq(status.as_str()));
        }

        if let Some(ref statuses) = filter.status_in
            && !statuses.is_empty()
        {
            let statuses: Vec<&str> = statuses.iter().map(|s| s.as_str()).collect();
            condition = condition.add(Column::Status.is_in(statuses));
        }

        if let Some(food_item_id) = filter.food_item_id {
            condition = condition.add(Column::FoodItemId.eq(food_item_id));
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
                    "updated_at" => query = query.order_by(Column::UpdatedAt, order),
                    "status" => query = query.order_by(Column::Status, order),
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

        let swaps = query.all(&self.db).await.map_err(|e| {
            error!("Failed to get swaps: {}", e);
            CoreError::InternalServerError
        })?;

        // Load messages for all swaps in one query and group them.
        let swap_ids: Vec<Uuid> = swaps.iter().map(|s| s.id).collect();
        let all_messages = if !swap_ids.is_empty() {
            MessageEntity::find()
                .filter(MessageColumn::SwapId.is_in(swap_ids))
                .order_by_asc(MessageColumn::SentAt)
                .all(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to load swap messages: {}", e);
                    CoreError::InternalServerError
                })?
        } else {
            Vec::new()
        };

        let mut messages_map: HashMap<Uuid, Vec<ChatMessage>> = HashMap::new();
        for message in all_messages {
            messages_map
                .entry(message.swap_id)
                .or_default()
                .push(ChatMessage::from(message));
        }

        let result: Vec<Swap> = swaps
            .iter()
            .map(|model| {
                let mut swap = Swap::from(model);
                swap.messages = messages_map.remove(&swap.id).unwrap_or_default();
                swap
            })
            .collect();

        Ok(result)
    }

    async fn set_status(&self, swap: Swap, new_status: SwapStatus) -> Result<Swap, CoreError> {
        let (now, _) = generate_timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            CoreError::InternalServerError
        })?;

        // Guarded on the status the caller validated against, so a
        // concurrent transition cannot be silently overwritten.
        let result = Entity::update_many()
            .col_expr(Column::Status, Expr::value(new_status.as_str()))
            .col_expr(Column::UpdatedAt, Expr::value(now.fixed_offset()))
            .filter(Column::Id.eq(swap.id))
            .filter(Column::Status.eq(swap.status.as_str()))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to update swap status: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            rollback(txn).await;
            return Err(CoreError::InvalidTransition {
                from: swap.status.as_str().to_string(),
                to: new_status.as_str().to_string(),
            });
        }

        match new_status {
            SwapStatus::Rejected | SwapStatus::Cancelled => {
                flip_item_status(
                    &txn,
                    swap.food_item_id,
                    FoodItemStatus::Reserved,
                    FoodItemStatus::Available,
                    now,
                )
                .await?;
                if let Some(offered_item_id) = swap.offered_item_id {
                    flip_item_status(
                        &txn,
                        offered_item_id,
                        FoodItemStatus::Reserved,
                        FoodItemStatus::Available,
                        now,
                    )
                    .await?;
                }
            }
            SwapStatus::Completed => {
                flip_item_status(
                    &txn,
                    swap.food_item_id,
                    FoodItemStatus::Reserved,
                    FoodItemStatus::Completed,
                    now,
                )
                .await?;
                if let Some(offered_item_id) = swap.offered_item_id {
                    flip_item_status(
                        &txn,
                        offered_item_id,
                        FoodItemStatus::Reserved,
                        FoodItemStatus::Completed,
                        now,
                    )
                    .await?;
                }

                let (requester_delta, provider_delta) = swap.completion_deltas();
                apply_reputation_delta(&txn, swap.requester_id, requester_delta, now).await?;
                apply_reputation_delta(&txn, swap.provider_id, provider_delta, now).await?;
            }
            SwapStatus::Pending | SwapStatus::Accepted => {}
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit status update: {}", e);
            CoreError::InternalServerError
        })?;

        self.get_by_id(swap.id)
            .await?
            .ok_or(CoreError::InternalServerError)
    }

    async fn record_review(
        &self,
        swap: Swap,
        side: ReviewTarget,
        rating: i32,
        review: Option<String>,
    ) -> Result<Swap, CoreError> {
        let (now, _) = generate_timestamp();

        let (rating_col, review_col, rated_user_id) = match side {
            ReviewTarget::Provider => (
                Column::ProviderRating,
                Column::ProviderReview,
                swap.provider_id,
            ),
            ReviewTarget::Requester => (
                Column::RequesterRating,
                Column::RequesterReview,
                swap.requester_id,
            ),
        };

        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            CoreError::InternalServerError
        })?;

        // "Rating still zero" is part of the update predicate, so two
        // racing submissions for the same side can never both count.
        let result = Entity::update_many()
            .col_expr(rating_col, Expr::value(rating))
            .col_expr(review_col, Expr::value(review.clone()))
            .col_expr(Column::UpdatedAt, Expr::value(now.fixed_offset()))
            .filter(Column::Id.eq(swap.id))
            .filter(Column::Status.eq(SwapStatus::Completed.as_str()))
            .filter(rating_col.eq(0))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to write review: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            rollback(txn).await;
            return Err(CoreError::AlreadyReviewed);
        }

        users::Entity::update_many()
            .col_expr(
                users::Column::RatingSum,
                Expr::col(users::Column::RatingSum).add(rating as i64),
            )
            .col_expr(
                users::Column::RatingCount,
                Expr::col(users::Column::RatingCount).add(1),
            )
            .col_expr(users::Column::UpdatedAt, Expr::value(now.fixed_offset()))
            .filter(users::Column::Id.eq(rated_user_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to update rating counters: {}", e);
                CoreError::InternalServerError
            })?;

        // Full recompute from the post-increment counters.
        let rated = users::Entity::find()
            .filter(users::Column::Id.eq(rated_user_id))
            .one(&txn)
            .await
            .map_err(|e| {
                error!("Failed to load rated user: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or(CoreError::InternalServerError)?;

        let score = trust_score(
            rated.rating_sum,
            rated.rating_count,
            rated.items_shared,
            rated.items_received,
        );

        users::Entity::update_many()
            .col_expr(users::Column::TrustScore, Expr::value(score))
            .filter(users::Column::Id.eq(rated_user_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to write trust score: {}", e);
                CoreError::InternalServerError
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit review: {}", e);
            CoreError::InternalServerError
        })?;

        self.get_by_id(swap.id)
            .await?
            .ok_or(CoreError::InternalServerError)
    }

    async fn append_message(
        &self,
        swap_id: Uuid,
        message: ChatMessage,
    ) -> Result<ChatMessage, CoreError> {
        let active_model = MessageActiveModel {
            id: Set(message.id),
            swap_id: Set(swap_id),
            sender_id: Set(message.sender_id),
            content: Set(message.content.clone()),
            sent_at: Set(message.sent_at.fixed_offset()),
        };

        let created = MessageEntity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to append swap message: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ChatMessage::from(created))
    }
}
