use axum::extract::State;
use foodswap_core::domain::food_item::{
    entities::{FoodItem, FoodItemStatus},
    ports::FoodItemService,
    value_objects::GetFoodItemsFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    query_extractor::QueryParamsExtractor,
    query_params::FilterOperator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetFoodItemsResponse {
    pub items: Vec<FoodItem>,
    pub offset: i64,
    pub limit: i64,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/food-items",
    tag = "food-item",
    summary = "List listings",
    description = "Browse listings with filtering (`filter[status]=available`, `filter[category][in]=bakery,produce`, `filter[is_free]=true`), sorting (`sort=-created_at`) and pagination (`offset`, `limit`)",
    responses(
        (status = 200, body = GetFoodItemsResponse)
    )
)]
pub async fn get_food_items(
    State(state): State<AppState>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<GetFoodItemsResponse>, ApiError> {
    let mut filter = GetFoodItemsFilter {
        offset: Some(query_params.pagination.offset as u32),
        limit: Some(query_params.pagination.limit as u32),
        sort: query_params.sort.clone(),
        ..Default::default()
    };

    for cond in &query_params.filter.conditions {
        match (cond.field.as_str(), cond.operator) {
            ("status", FilterOperator::Eq) => {
                filter.status = match cond.value.as_str() {
                    "available" => Some(FoodItemStatus::Available),
                    "reserved" => Some(FoodItemStatus::Reserved),
                    "completed" => Some(FoodItemStatus::Completed),
                    "expired" => Some(FoodItemStatus::Expired),
                    other => {
                        return Err(ApiError::BadRequest(format!(
                            "unknown food item status '{other}'"
                        )));
                    }
                };
            }
            ("category", FilterOperator::Eq) => {
                filter.category = Some(cond.value.clone());
            }
            ("category", FilterOperator::In) => {
                filter.category_in = Some(
                    cond.value
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .collect(),
                );
            }
            ("owner_id", FilterOperator::Eq) => {
                if let Ok(uuid) = Uuid::parse_str(&cond.value) {
                    filter.owner_id = Some(uuid);
                }
            }
            ("is_free", FilterOperator::Eq) => {
                filter.is_free = cond.value.parse::<bool>().ok();
            }
            ("pickup_only", FilterOperator::Eq) => {
                filter.pickup_only = cond.value.parse::<bool>().ok();
            }
            ("expires_at", FilterOperator::Lte) => {
                filter.expires_before = chrono::DateTime::parse_from_rfc3339(&cond.value)
                    .ok()
                    .map(|dt| dt.with_timezone(&chrono::Utc));
            }
            _ => {}
        }
    }

    let items = state.service.list_food_items(filter).await?;

    Ok(Response::Ok(GetFoodItemsResponse {
        offset: query_params.pagination.offset,
        limit: query_params.pagination.limit,
        count: items.len(),
        items,
    }))
}
