use axum::{
    Json,
    extract::{Path, State},
};
use foodswap_core::domain::swap::{entities::ChatMessage, ports::SwapService};
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        swap::validators::PostMessageRequest,
    },
};

#[utoipa::path(
    post,
    path = "/swaps/{swap_id}/messages",
    tag = "swap",
    summary = "Post a message",
    description = "Append to the swap's coordination thread. Only participants may post, and only once the swap is accepted (the thread stays open after completion).",
    params(
        ("swap_id" = Uuid, Path, description = "Swap ID"),
    ),
    request_body = PostMessageRequest,
    responses(
        (status = 201, body = ChatMessage),
        (status = 400, description = "Swap not accepted yet or empty content"),
        (status = 403, description = "Caller is not a participant"),
        (status = 404, description = "Swap not found")
    )
)]
pub async fn post_swap_message(
    Path(swap_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(request): Json<PostMessageRequest>,
) -> Result<Response<ChatMessage>, ApiError> {
    request.validate()?;

    let message = state
        .service
        .post_message(identity, swap_id, request.content)
        .await?;

    Ok(Response::Created(message))
}
