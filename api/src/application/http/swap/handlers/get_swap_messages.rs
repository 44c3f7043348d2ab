use axum::extract::{Path, State};
use foodswap_core::domain::swap::{entities::ChatMessage, ports::SwapService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetSwapMessagesResponse {
    pub items: Vec<ChatMessage>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/swaps/{swap_id}/messages",
    tag = "swap",
    summary = "Read the message thread",
    params(
        ("swap_id" = Uuid, Path, description = "Swap ID"),
    ),
    responses(
        (status = 200, body = GetSwapMessagesResponse),
        (status = 403, description = "Caller is not a participant"),
        (status = 404, description = "Swap not found")
    )
)]
pub async fn get_swap_messages(
    Path(swap_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetSwapMessagesResponse>, ApiError> {
    let items = state.service.get_messages(identity, swap_id).await?;

    Ok(Response::Ok(GetSwapMessagesResponse {
        count: items.len(),
        items,
    }))
}
