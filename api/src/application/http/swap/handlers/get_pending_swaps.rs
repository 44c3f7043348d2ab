use axum::extract::{Query, State};
use foodswap_core::domain::swap::{ports::SwapService, value_objects::GetSwapsFilter};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        swap::{handlers::get_my_swaps::GetSwapsResponse, validators::GetPendingSwapsParams},
    },
};

#[utoipa::path(
    get,
    path = "/swaps/pending",
    tag = "swap",
    summary = "List pending requests",
    description = "Provider inbox: pending claims on the caller's listings, awaiting accept or reject",
    params(GetPendingSwapsParams),
    responses(
        (status = 200, body = GetSwapsResponse)
    )
)]
pub async fn get_pending_swaps(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(params): Query<GetPendingSwapsParams>,
) -> Result<Response<GetSwapsResponse>, ApiError> {
    let items = state
        .service
        .get_pending_swaps(
            identity,
            GetSwapsFilter {
                offset: params.offset,
                limit: params.limit,
                ..Default::default()
            },
        )
        .await?;

    Ok(Response::Ok(GetSwapsResponse {
        count: items.len(),
        items,
    }))
}
