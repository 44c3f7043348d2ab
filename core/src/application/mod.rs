pub mod sweeper;

use crate::{
    domain::common::{FoodswapConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        food_item::PostgresFoodItemRepository,
        health::PostgresHealthCheckRepository,
        swap::PostgresSwapRepository,
        user::PostgresUserRepository,
    },
};

pub type FoodswapService = Service<
    PostgresFoodItemRepository,
    PostgresSwapRepository,
    PostgresUserRepository,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: FoodswapConfig) -> Result<FoodswapService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );

    let postgres = Postgres::new(PostgresConfig { database_url }).await?;

    Ok(Service::new(
        PostgresFoodItemRepository::new(postgres.get_db()),
        PostgresSwapRepository::new(postgres.get_db()),
        PostgresUserRepository::new(postgres.get_db()),
        PostgresHealthCheckRepository::new(postgres.get_db()),
    ))
}
