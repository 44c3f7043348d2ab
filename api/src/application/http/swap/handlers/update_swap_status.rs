use axum::{
    Json,
    extract::{Path, State},
};
use foodswap_core::domain::swap::{
    entities::{Swap, SwapStatus},
    ports::SwapService,
};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        swap::validators::UpdateSwapStatusRequest,
    },
};

#[utoipa::path(
    put,
    path = "/swaps/{swap_id}/status",
    tag = "swap",
    summary = "Update swap status",
    description = "Drive the swap through its lifecycle: the provider accepts or rejects a pending request, the requester completes an accepted one, either participant cancels.",
    params(
        ("swap_id" = Uuid, Path, description = "Swap ID"),
    ),
    request_body = UpdateSwapStatusRequest,
    responses(
        (status = 200, body = Swap),
        (status = 400, description = "Unknown status value"),
        (status = 403, description = "Actor not allowed for this transition"),
        (status = 404, description = "Swap not found"),
        (status = 409, description = "Transition not permitted from the current status")
    )
)]
pub async fn update_swap_status(
    Path(swap_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(request): Json<UpdateSwapStatusRequest>,
) -> Result<Response<Swap>, ApiError> {
    let new_status = SwapStatus::parse(&request.status)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown swap status '{}'", request.status)))?;

    let updated = state
        .service
        .update_status(identity, swap_id, new_status)
        .await?;

    Ok(Response::Ok(updated))
}
