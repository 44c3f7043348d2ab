use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::swap::entities::SwapStatus;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RequestSwapInput {
    pub food_item_id: Uuid,
    pub offered_item_id: Option<Uuid>,
    pub message: Option<String>,
    pub is_swap: bool,
    pub is_purchase: bool,
}

/// Which side of a completed swap a review targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReviewTarget {
    Provider,
    Requester,
}

impl ReviewTarget {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "provider" => Some(ReviewTarget::Provider),
            "requester" => Some(ReviewTarget::Requester),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitReviewInput {
    pub swap_id: Uuid,
    pub review_for: ReviewTarget,
    pub rating: i32,
    pub review: Option<String>,
}

/// Role of the caller relative to a swap, for "my swaps" filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SwapRole {
    Requester,
    Provider,
}

impl SwapRole {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "requester" => Some(SwapRole::Requester),
            "provider" => Some(SwapRole::Provider),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetSwapsFilter {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    /// Matches swaps where this user is requester or provider, narrowed by
    /// `role` when set.
    pub participant: Option<Uuid>,
    pub role: Option<SwapRole>,
    pub status: Option<SwapStatus>,
    pub status_in: Option<Vec<SwapStatus>>,
    pub food_item_id: Option<Uuid>,
    pub sort: Option<String>, // e.g. "-created_at"
}
