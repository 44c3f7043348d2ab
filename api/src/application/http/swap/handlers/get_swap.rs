use axum::extract::{Path, State};
use foodswap_core::domain::swap::{entities::Swap, ports::SwapService};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/swaps/{swap_id}",
    tag = "swap",
    summary = "Get swap",
    params(
        ("swap_id" = Uuid, Path, description = "Swap ID"),
    ),
    responses(
        (status = 200, body = Swap),
        (status = 403, description = "Caller is not a participant"),
        (status = 404, description = "Swap not found")
    )
)]
pub async fn get_swap(
    Path(swap_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Swap>, ApiError> {
    let swap = state.service.get_swap(identity, swap_id).await?;

    Ok(Response::Ok(swap))
}
