use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Marketplace participant. Only the reputation fields are owned by this
/// core; profile attributes beyond username/email live with the account
/// collaborator.
///
/// `trust_score` is derived: it is only ever written as
/// `trust::trust_score(rating_sum, rating_count, items_shared,
/// items_received)` and never decremented independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub rating_sum: i64,
    pub rating_count: i64,
    pub trust_score: i32,
    pub items_shared: i64,
    pub items_received: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// A brand-new user starts with an empty reputation.
    pub fn new(id: Uuid, username: String, email: String) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id,
            username,
            email,
            rating_sum: 0,
            rating_count: 0,
            trust_score: 0,
            items_shared: 0,
            items_received: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Per-user counter increments applied when a swap completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReputationDelta {
    pub items_shared: i64,
    pub items_received: i64,
}
