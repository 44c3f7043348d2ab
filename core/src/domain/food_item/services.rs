use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_item::{
        entities::{FoodItem, FoodItemConfig},
        ports::{FoodItemRepository, FoodItemService},
        value_objects::{CreateFoodItemInput, GetFoodItemsFilter},
    },
    health::ports::HealthCheckRepository,
    swap::ports::SwapRepository,
    user::{ports::UserRepository, value_objects::Identity},
};

impl<F, S, U, H> FoodItemService for Service<F, S, U, H>
where
    F: FoodItemRepository,
    S: SwapRepository,
    U: UserRepository,
    H: HealthCheckRepository,
{
    async fn create_food_item(
        &self,
        identity: Identity,
        input: CreateFoodItemInput,
    ) -> Result<FoodItem, CoreError> {
        if input.quantity < 1 {
            return Err(CoreError::Validation(
                "quantity must be at least 1".to_string(),
            ));
        }
        if input.price < 0.0 {
            return Err(CoreError::Validation(
                "price must not be negative".to_string(),
            ));
        }
        if input.expires_at <= Utc::now() {
            return Err(CoreError::Validation(
                "expires_at must be in the future".to_string(),
            ));
        }

        let item = FoodItem::new(FoodItemConfig {
            owner_id: identity.id(),
            title: input.title,
            description: input.description,
            quantity: input.quantity,
            unit: input.unit,
            category: input.category,
            dietary: input.dietary,
            price: input.price,
            original_price: input.original_price,
            pickup_only: input.pickup_only,
            expires_at: input.expires_at,
            latitude: input.latitude,
            longitude: input.longitude,
            address: input.address,
            image_urls: input.image_urls,
        });

        let created = self.food_item_repository.create_item(item).await?;

        info!(item_id = %created.id, owner_id = %created.owner_id, "created listing");

        Ok(created)
    }

    async fn get_food_item(&self, item_id: Uuid) -> Result<FoodItem, CoreError> {
        self.food_item_repository
            .get_by_id(item_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn list_food_items(&self, filter: GetFoodItemsFilter) -> Result<Vec<FoodItem>, CoreError> {
        self.food_item_repository.get_all(filter).await
    }

    async fn expire_due_listings(&self, now: DateTime<Utc>) -> Result<u64, CoreError> {
        self.food_item_repository.expire_due(now).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        food_item::{entities::DietaryFlags, ports::MockFoodItemRepository},
        health::ports::MockHealthCheckRepository,
        swap::ports::MockSwapRepository,
        user::{entities::User, ports::MockUserRepository},
    };
    use chrono::Duration;

    type TestService = Service<
        MockFoodItemRepository,
        MockSwapRepository,
        MockUserRepository,
        MockHealthCheckRepository,
    >;

    fn service(food_items: MockFoodItemRepository) -> TestService {
        Service::new(
            food_items,
            MockSwapRepository::new(),
            MockUserRepository::new(),
            MockHealthCheckRepository::new(),
        )
    }

    fn identity() -> Identity {
        Identity::new(User::new(
            Uuid::new_v4(),
            "maya".to_string(),
            "maya@example.net".to_string(),
        ))
    }

    fn input() -> CreateFoodItemInput {
        CreateFoodItemInput {
            title: "Crate of apples".to_string(),
            description: Some("Slightly bruised, fine for juicing".to_string()),
            quantity: 1,
            unit: "crate".to_string(),
            category: "produce".to_string(),
            dietary: DietaryFlags {
                vegetarian: true,
                vegan: true,
                ..Default::default()
            },
            price: 0.0,
            original_price: None,
            pickup_only: true,
            expires_at: Utc::now() + Duration::days(3),
            latitude: None,
            longitude: None,
            address: Some("12 Mill Lane".to_string()),
            image_urls: vec![],
        }
    }

    #[tokio::test]
    async fn create_food_item_starts_available() {
        let mut repo = MockFoodItemRepository::new();
        repo.expect_create_item().returning(|item| {
            Box::pin(async move { Ok(item) })
        });

        let created = service(repo)
            .create_food_item(identity(), input())
            .await
            .unwrap();

        assert!(created.is_claimable());
        assert!(created.is_free);
    }

    #[tokio::test]
    async fn create_food_item_rejects_past_expiry() {
        let mut bad = input();
        bad.expires_at = Utc::now() - Duration::hours(1);

        let err = service(MockFoodItemRepository::new())
            .create_food_item(identity(), bad)
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn create_food_item_rejects_zero_quantity() {
        let mut bad = input();
        bad.quantity = 0;

        let err = service(MockFoodItemRepository::new())
            .create_food_item(identity(), bad)
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn expiry_sweep_reports_flipped_count() {
        let mut repo = MockFoodItemRepository::new();
        repo.expect_expire_due()
            .returning(|_| Box::pin(async { Ok(3) }));

        let swept = service(repo)
            .expire_due_listings(Utc::now())
            .await
            .unwrap();

        assert_eq!(swept, 3);
    }
}
