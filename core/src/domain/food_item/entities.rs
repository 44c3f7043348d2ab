use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Listing lifecycle. The status doubles as the concurrency gate for swap
/// creation: only the swap ledger moves items between `Available`,
/// `Reserved` and `Completed`, and only the expiry sweeper moves
/// `Available` items to `Expired`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FoodItemStatus {
    Available,
    Reserved,
    Completed,
    Expired,
}

impl FoodItemStatus {
    pub fn as_str(&self) -> &str {
        match self {
            FoodItemStatus::Available => "available",
            FoodItemStatus::Reserved => "reserved",
            FoodItemStatus::Completed => "completed",
            FoodItemStatus::Expired => "expired",
        }
    }
}

impl From<&str> for FoodItemStatus {
    fn from(s: &str) -> Self {
        match s {
            "available" => FoodItemStatus::Available,
            "reserved" => FoodItemStatus::Reserved,
            "completed" => FoodItemStatus::Completed,
            _ => FoodItemStatus::Expired,
        }
    }
}

/// Dietary tags attached to a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DietaryFlags {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub dairy_free: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub unit: String,
    pub category: String,
    pub dietary: DietaryFlags,
    pub price: f64,
    pub original_price: Option<f64>,
    pub is_free: bool,
    pub pickup_only: bool,
    pub expires_at: DateTime<Utc>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub image_urls: Vec<String>,
    pub status: FoodItemStatus,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FoodItemConfig {
    pub owner_id: Uuid,
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

impl FoodItem {
    pub fn new(config: FoodItemConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            owner_id: config.owner_id,
            title: config.title,
            description: config.description,
            quantity: config.quantity,
            unit: config.unit,
            category: config.category,
            dietary: config.dietary,
            is_free: config.price == 0.0,
            price: config.price,
            original_price: config.original_price,
            pickup_only: config.pickup_only,
            expires_at: config.expires_at,
            latitude: config.latitude,
            longitude: config.longitude,
            address: config.address,
            image_urls: config.image_urls,
            status: FoodItemStatus::Available,
            is_available: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_claimable(&self) -> bool {
        self.status == FoodItemStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn config(owner: Uuid) -> FoodItemConfig {
        FoodItemConfig {
            owner_id: owner,
            title: "Sourdough loaf".to_string(),
            description: None,
            quantity: 1,
            unit: "piece".to_string(),
            category: "bakery".to_string(),
            dietary: DietaryFlags::default(),
            price: 0.0,
            original_price: Some(4.5),
            pickup_only: true,
            expires_at: Utc::now() + Duration::days(2),
            latitude: None,
            longitude: None,
            address: None,
            image_urls: vec![],
        }
    }

    #[test]
    fn new_listing_is_available_and_free() {
        let item = FoodItem::new(config(Uuid::new_v4()));
        assert_eq!(item.status, FoodItemStatus::Available);
        assert!(item.is_available);
        assert!(item.is_free);
        assert!(item.is_claimable());
    }

    #[test]
    fn priced_listing_is_not_free() {
        let mut cfg = config(Uuid::new_v4());
        cfg.price = 3.0;
        let item = FoodItem::new(cfg);
        assert!(!item.is_free);
    }

    #[test]
    fn only_available_items_are_claimable() {
        let mut item = FoodItem::new(config(Uuid::new_v4()));
        for status in [
            FoodItemStatus::Reserved,
            FoodItemStatus::Completed,
            FoodItemStatus::Expired,
        ] {
            item.status = status;
            assert!(!item.is_claimable());
        }
    }
}
