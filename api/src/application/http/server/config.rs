use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AppConfigResponse {
    pub version: String,
    pub root_path: String,
    pub sweep_interval_seconds: u64,
}

/// Public runtime configuration consumed by the browser client.
pub async fn get_config(State(state): State<AppState>) -> Json<AppConfigResponse> {
    Json(AppConfigResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        root_path: state.args.server.root_path.clone(),
        sweep_interval_seconds: state.args.sweep_interval_seconds,
    })
}
