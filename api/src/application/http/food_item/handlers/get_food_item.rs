use axum::extract::{Path, State};
use foodswap_core::domain::food_item::{entities::FoodItem, ports::FoodItemService};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/food-items/{item_id}",
    tag = "food-item",
    summary = "Get listing",
    params(
        ("item_id" = Uuid, Path, description = "Food item ID"),
    ),
    responses(
        (status = 200, body = FoodItem),
        (status = 404, description = "Listing not found")
    )
)]
pub async fn get_food_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<FoodItem>, ApiError> {
    let item = state.service.get_food_item(item_id).await?;

    Ok(Response::Ok(item))
}
