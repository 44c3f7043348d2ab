use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_item::{entities::FoodItem, value_objects::{CreateFoodItemInput, GetFoodItemsFilter}},
    user::value_objects::Identity,
};

/// Repository trait for the food item store.
///
/// Status flips that belong to the swap lifecycle (`available <-> reserved
/// -> completed`) are NOT exposed here: they happen inside the swap ledger's
/// transactions so the status check and the flip stay atomic.
#[cfg_attr(test, mockall::automock)]
pub trait FoodItemRepository: Send + Sync {
    fn create_item(
        &self,
        item: FoodItem,
    ) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn get_by_id(
        &self,
        item_id: Uuid,
    ) -> impl Future<Output = Result<Option<FoodItem>, CoreError>> + Send;

    fn get_all(
        &self,
        filter: GetFoodItemsFilter,
    ) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;

    /// One conditional update: `available` items past `now` become
    /// `expired`. Returns how many rows were flipped. Items in any other
    /// status are never touched, whatever their deadline.
    fn expire_due(
        &self,
        now: DateTime<Utc>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

/// Service trait for listing operations.
#[cfg_attr(test, mockall::automock)]
pub trait FoodItemService: Send + Sync {
    fn create_food_item(
        &self,
        identity: Identity,
        input: CreateFoodItemInput,
    ) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn get_food_item(
        &self,
        item_id: Uuid,
    ) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn list_food_items(
        &self,
        filter: GetFoodItemsFilter,
    ) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;

    fn expire_due_listings(
        &self,
        now: DateTime<Utc>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
