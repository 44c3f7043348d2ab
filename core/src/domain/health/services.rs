use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_item::ports::FoodItemRepository,
    health::ports::{HealthCheckRepository, HealthCheckService},
    swap::ports::SwapRepository,
    user::ports::UserRepository,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub database: bool,
    pub latency_ms: u64,
}

impl<F, S, U, H> HealthCheckService for Service<F, S, U, H>
where
    F: FoodItemRepository,
    S: SwapRepository,
    U: UserRepository,
    H: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<HealthStatus, CoreError> {
        let latency_ms = self.health_repository.check().await?;

        Ok(HealthStatus {
            database: true,
            latency_ms,
        })
    }
}
