use tracing::info;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_item::ports::FoodItemRepository,
    health::ports::HealthCheckRepository,
    swap::ports::SwapRepository,
    user::{
        entities::User,
        ports::{UserRepository, UserService},
        value_objects::{Identity, RegisterUserInput},
    },
};

impl<F, S, U, H> UserService for Service<F, S, U, H>
where
    F: FoodItemRepository,
    S: SwapRepository,
    U: UserRepository,
    H: HealthCheckRepository,
{
    /// Resolves a bearer identity to a user row, creating it on first sight.
    /// Token verification happens upstream; the subject id is trusted here.
    async fn get_or_register(&self, input: RegisterUserInput) -> Result<Identity, CoreError> {
        if let Some(user) = self.user_repository.get_by_id(input.id).await? {
            return Ok(Identity::new(user));
        }

        let username = input
            .username
            .unwrap_or_else(|| format!("user_{}", input.id.simple()));
        let email = input
            .email
            .unwrap_or_else(|| format!("{}@accounts.foodswap.local", input.id.simple()));

        let user = self
            .user_repository
            .create_user(User::new(input.id, username, email))
            .await?;

        info!(user_id = %user.id, "registered first-seen user");

        Ok(Identity::new(user))
    }

    async fn get_user(&self, user_id: Uuid) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}
