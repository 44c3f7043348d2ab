use foodswap_core::domain::food_item::entities::DietaryFlags;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateFoodItemRequest {
    #[validate(length(min = 1, max = 120, message = "title must be between 1 and 120 characters"))]
    pub title: String,
    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
    pub description: Option<String>,
    pub quantity: i32,
    #[validate(length(min = 1, max = 30, message = "unit must be between 1 and 30 characters"))]
    pub unit: String,
    #[validate(length(
        min = 1,
        max = 50,
        message = "category must be between 1 and 50 characters"
    ))]
    pub category: String,
    #[serde(default)]
    pub dietary: DietaryFlags,
    #[serde(default)]
    pub price: f64,
    pub original_price: Option<f64>,
    #[serde(default)]
    pub pickup_only: bool,
    pub expires_at: chrono::DateTime<chrono::Utc>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[validate(length(max = 300, message = "address must be at most 300 characters"))]
    pub address: Option<String>,
    #[serde(default)]
    #[validate(length(max = 10, message = "at most 10 images per listing"))]
    pub image_urls: Vec<String>,
}
