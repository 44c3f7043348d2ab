use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::food_item::entities::{DietaryFlags, FoodItemStatus};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFoodItemInput {
    pub title: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub unit: String,
    pub category: String,
    pub dietary: DietaryFlags,
    pub price: f64,
    pub original_price: Option<f64>,
    pub pickup_only: bool,
    pub expires_at: DateTime<Utc>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub image_urls: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetFoodItemsFilter {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<FoodItemStatus>,
    pub category: Option<String>,
    pub category_in: Option<Vec<String>>,
    pub owner_id: Option<Uuid>,
    pub is_free: Option<bool>,
    pub pickup_only: Option<bool>,
    pub expires_before: Option<DateTime<Utc>>,
    pub sort: Option<String>, // e.g. "-created_at" or "expires_at,title"
}
