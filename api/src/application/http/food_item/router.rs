use super::handlers::{
    create_food_item::{__path_create_food_item, create_food_item},
    get_food_item::{__path_get_food_item, get_food_item},
    get_food_items::{__path_get_food_items, get_food_items},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_food_item, get_food_items, get_food_item))]
pub struct FoodItemApiDoc;

pub fn food_item_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/food-items", state.args.server.root_path),
            post(create_food_item).get(get_food_items),
        )
        .route(
            &format!("{}/food-items/{{item_id}}", state.args.server.root_path),
            get(get_food_item),
        )
}
