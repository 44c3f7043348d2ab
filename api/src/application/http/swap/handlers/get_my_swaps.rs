use axum::extract::{Query, State};
use foodswap_core::domain::swap::{
    entities::{Swap, SwapStatus},
    ports::SwapService,
    value_objects::{GetSwapsFilter, SwapRole},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        swap::validators::GetMySwapsParams,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetSwapsResponse {
    pub items: Vec<Swap>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/swaps/my-swaps",
    tag = "swap",
    summary = "List my swaps",
    description = "Swaps the caller participates in, optionally narrowed by role and status",
    params(GetMySwapsParams),
    responses(
        (status = 200, body = GetSwapsResponse),
        (status = 400, description = "Unknown role or status value")
    )
)]
pub async fn get_my_swaps(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(params): Query<GetMySwapsParams>,
) -> Result<Response<GetSwapsResponse>, ApiError> {
    let role = params
        .role
        .as_deref()
        .map(|value| {
            SwapRole::parse(value)
                .ok_or_else(|| ApiError::BadRequest(format!("unknown role '{value}'")))
        })
        .transpose()?;

    let status = params
        .status
        .as_deref()
        .map(|value| {
            SwapStatus::parse(value)
                .ok_or_else(|| ApiError::BadRequest(format!("unknown swap status '{value}'")))
        })
        .transpose()?;

    let items = state
        .service
        .get_my_swaps(
            identity,
            GetSwapsFilter {
                offset: params.offset,
                limit: params.limit,
                role,
                status,
                ..Default::default()
            },
        )
        .await?;

    Ok(Response::Ok(GetSwapsResponse {
        count: items.len(),
        items,
    }))
}
