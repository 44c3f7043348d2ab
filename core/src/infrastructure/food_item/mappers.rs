use crate::{
    domain::food_item::entities::{DietaryFlags, FoodItem},
    entity::food_items,
};

impl From<&food_items::Model> for FoodItem {
    fn from(model: &food_items::Model) -> Self {
        Self {
            id: model.id,
            owner_id: model.owner_id,
            title: model.title.clone(),
            description: model.description.clone(),
            quantity: model.quantity,
            unit: model.unit.clone(),
            category: model.category.clone(),
            dietary: DietaryFlags {
                vegetarian: model.is_vegetarian,
                vegan: model.is_vegan,
                gluten_free: model.is_gluten_free,
                dairy_free: model.is_dairy_free,
            },
            price: model.price,
            original_price: model.original_price,
            is_free: model.is_free,
            pickup_only: model.pickup_only,
            expires_at: model.expires_at.to_utc(),
            latitude: model.latitude,
            longitude: model.longitude,
            address: model.address.clone(),
            image_urls: serde_json::from_value(model.image_urls.clone()).unwrap_or_default(),
            status: model.status.as_str().into(),
            is_available: model.is_available,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<food_items::Model> for FoodItem {
    fn from(model: food_items::Model) -> Self {
        Self::from(&model)
    }
}
