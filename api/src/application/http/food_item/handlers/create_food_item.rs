use axum::{Json, extract::State};
use foodswap_core::domain::food_item::{
    entities::FoodItem, ports::FoodItemService, value_objects::CreateFoodItemInput,
};
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        food_item::validators::CreateFoodItemRequest,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/food-items",
    tag = "food-item",
    summary = "Create listing",
    description = "List a surplus food item; it starts in the available status",
    request_body = CreateFoodItemRequest,
    responses(
        (status = 201, body = FoodItem, description = "Listing created"),
        (status = 400, description = "Malformed listing"),
        (status = 401, description = "Missing identity")
    )
)]
pub async fn create_food_item(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(request): Json<CreateFoodItemRequest>,
) -> Result<Response<FoodItem>, ApiError> {
    request.validate()?;

    let created = state
        .service
        .create_food_item(
            identity,
            CreateFoodItemInput {
                title: request.title,
                description: request.description,
                quantity: request.quantity,
                unit: request.unit,
                category: request.category,
                dietary: request.dietary,
                price: request.price,
                original_price: request.original_price,
                pickup_only: request.pickup_only,
                expires_at: request.expires_at,
                latitude: request.latitude,
                longitude: request.longitude,
                address: request.address,
                image_urls: request.image_urls,
            },
        )
        .await?;

    Ok(Response::Created(created))
}
