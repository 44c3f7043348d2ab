use super::handlers::{
    get_my_swaps::{__path_get_my_swaps, get_my_swaps},
    get_pending_swaps::{__path_get_pending_swaps, get_pending_swaps},
    get_swap::{__path_get_swap, get_swap},
    get_swap_messages::{__path_get_swap_messages, get_swap_messages},
    post_swap_message::{__path_post_swap_message, post_swap_message},
    request_swap::{__path_request_swap, request_swap},
    submit_review::{__path_submit_review, submit_review},
    update_swap_status::{__path_update_swap_status, update_swap_status},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    request_swap,
    get_my_swaps,
    get_pending_swaps,
    get_swap,
    update_swap_status,
    submit_review,
    post_swap_message,
    get_swap_messages
))]
pub struct SwapApiDoc;

pub fn swap_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/swaps"), post(request_swap))
        .route(&format!("{root_path}/swaps/my-swaps"), get(get_my_swaps))
        .route(&format!("{root_path}/swaps/pending"), get(get_pending_swaps))
        .route(&format!("{root_path}/swaps/{{swap_id}}"), get(get_swap))
        .route(
            &format!("{root_path}/swaps/{{swap_id}}/status"),
            put(update_swap_status),
        )
        .route(
            &format!("{root_path}/swaps/{{swap_id}}/review"),
            put(submit_review),
        )
        .route(
            &format!("{root_path}/swaps/{{swap_id}}/messages"),
            post(post_swap_message).get(get_swap_messages),
        )
}
