use axum::{Json, extract::State};
use foodswap_core::domain::swap::{
    entities::Swap, ports::SwapService, value_objects::RequestSwapInput,
};
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        swap::validators::CreateSwapRequest,
    },
};

#[utoipa::path(
    post,
    path = "/swaps",
    tag = "swap",
    summary = "Request a swap",
    description = "Claim an available listing. The listing (and any offered item) is reserved atomically; a concurrent claim on the same item fails with a conflict.",
    request_body = CreateSwapRequest,
    responses(
        (status = 201, body = Swap, description = "Pending swap created"),
        (status = 400, description = "Malformed request or self-claim"),
        (status = 404, description = "Listing not found"),
        (status = 409, description = "Item is no longer available")
    )
)]
pub async fn request_swap(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(request): Json<CreateSwapRequest>,
) -> Result<Response<Swap>, ApiError> {
    request.validate()?;

    let created = state
        .service
        .request_swap(
            identity,
            RequestSwapInput {
                food_item_id: request.food_item_id,
                offered_item_id: request.offered_item_id,
                message: request.message,
                is_swap: request.is_swap,
                is_purchase: request.is_purchase,
            },
        )
        .await?;

    Ok(Response::Created(created))
}
