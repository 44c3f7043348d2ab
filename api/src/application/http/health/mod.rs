use axum::{Router, extract::State, routing::get};
use foodswap_core::domain::health::{ports::HealthCheckService, services::HealthStatus};
use utoipa::OpenApi;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(health))]
pub struct HealthApiDoc;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Service health",
    responses(
        (status = 200, body = HealthStatus),
        (status = 500, description = "Database unreachable")
    )
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<HealthStatus>, ApiError> {
    let status = state.service.readiness().await?;

    Ok(Response::Ok(status))
}

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/health", state.args.server.root_path),
        get(health),
    )
}
