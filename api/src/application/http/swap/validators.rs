use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateSwapRequest {
    pub food_item_id: Uuid,
    /// Item of the requester offered in exchange; makes this a true
    /// item-for-item swap together with `is_swap`.
    pub offered_item_id: Option<Uuid>,
    #[validate(length(max = 500, message = "message must be at most 500 characters"))]
    pub message: Option<String>,
    #[serde(default)]
    pub is_swap: bool,
    #[serde(default)]
    pub is_purchase: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateSwapStatusRequest {
    /// One of: accepted, rejected, completed, cancelled.
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SubmitReviewRequest {
    /// "provider" or "requester".
    pub review_for: String,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
    #[validate(length(max = 1000, message = "review must be at most 1000 characters"))]
    pub review: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct PostMessageRequest {
    #[validate(length(
        min = 1,
        max = 1000,
        message = "content must be between 1 and 1000 characters"
    ))]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetMySwapsParams {
    #[schema(example = 0)]
    pub offset: Option<u32>,
    #[schema(example = 20)]
    pub limit: Option<u32>,
    /// Restrict to swaps where the caller is "requester" or "provider".
    pub role: Option<String>,
    /// Restrict to one status (pending, accepted, rejected, completed,
    /// cancelled).
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetPendingSwapsParams {
    #[schema(example = 0)]
    pub offset: Option<u32>,
    #[schema(example = 20)]
    pub limit: Option<u32>,
}
