use utoipa::OpenApi;

use crate::application::http::{
    food_item::router::FoodItemApiDoc, health::HealthApiDoc, swap::router::SwapApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "foodswap API",
        description = "Food-sharing marketplace: list surplus food, claim or exchange it, build reputation.",
    ),
    tags(
        (name = "swap", description = "Swap lifecycle: claims, status transitions, reviews, messages"),
        (name = "food-item", description = "Surplus food listings"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document: the shared info/tags plus every feature router's
    /// paths and schemas.
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut doc = ApiDoc::openapi();
        doc.merge(SwapApiDoc::openapi());
        doc.merge(FoodItemApiDoc::openapi());
        doc.merge(HealthApiDoc::openapi());
        doc
    }
}
