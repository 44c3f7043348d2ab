use axum::{
    Json,
    extract::{Path, State},
};
use foodswap_core::domain::swap::{
    entities::Swap,
    ports::SwapService,
    value_objects::{ReviewTarget, SubmitReviewInput},
};
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        swap::validators::SubmitReviewRequest,
    },
};

#[utoipa::path(
    put,
    path = "/swaps/{swap_id}/review",
    tag = "swap",
    summary = "Review a completed swap",
    description = "The requester may rate the provider on any completed swap; the provider may rate the requester only on a true item-for-item exchange. Each side is rated at most once and the rated user's trust score is recomputed.",
    params(
        ("swap_id" = Uuid, Path, description = "Swap ID"),
    ),
    request_body = SubmitReviewRequest,
    responses(
        (status = 200, body = Swap),
        (status = 400, description = "Malformed review"),
        (status = 403, description = "Caller may not review this side"),
        (status = 404, description = "Swap not found"),
        (status = 409, description = "Swap not completed or side already reviewed")
    )
)]
pub async fn submit_review(
    Path(swap_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(request): Json<SubmitReviewRequest>,
) -> Result<Response<Swap>, ApiError> {
    request.validate()?;

    let review_for = ReviewTarget::parse(&request.review_for).ok_or_else(|| {
        ApiError::BadRequest(format!(
            "review_for must be 'provider' or 'requester', got '{}'",
            request.review_for
        ))
    })?;

    let updated = state
        .service
        .submit_review(
            identity,
            SubmitReviewInput {
                swap_id,
                review_for,
                rating: request.rating,
                review: request.review,
            },
        )
        .await?;

    Ok(Response::Ok(updated))
}
