use crate::domain::{
    food_item::ports::FoodItemRepository, health::ports::HealthCheckRepository,
    swap::ports::SwapRepository, user::ports::UserRepository,
};

/// Aggregate service owning one repository per store. The domain service
/// traits (`SwapService`, `FoodItemService`, ...) are implemented on this
/// struct, generic over the repository ports.
#[derive(Debug, Clone)]
pub struct Service<F, S, U, H>
where
    F: FoodItemRepository,
    S: SwapRepository,
    U: UserRepository,
    H: HealthCheckRepository,
{
    pub food_item_repository: F,
    pub swap_repository: S,
    pub user_repository: U,
    pub health_repository: H,
}

impl<F, S, U, H> Service<F, S, U, H>
where
    F: FoodItemRepository,
    S: SwapRepository,
    U: UserRepository,
    H: HealthCheckRepository,
{
    pub fn new(
        food_item_repository: F,
        swap_repository: S,
        user_repository: U,
        health_repository: H,
    ) -> Self {
        Self {
            food_item_repository,
            swap_repository,
            user_repository,
            health_repository,
        }
    }
}
