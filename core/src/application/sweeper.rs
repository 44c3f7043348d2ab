use std::time::Duration;

use chrono::Utc;
use tokio::{task::JoinHandle, time::MissedTickBehavior};
use tracing::{error, info};

use crate::{application::FoodswapService, domain::food_item::ports::FoodItemService};

/// Spawns the background pass that expires overdue listings.
///
/// Each tick issues one conditional update, so the sweeper can lose a race
/// against a concurrent claim without ever clobbering a reserved item.
pub fn spawn_expiry_sweeper(service: FoodswapService, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(interval_seconds = interval.as_secs(), "expiry sweeper started");

        loop {
            ticker.tick().await;

            match service.expire_due_listings(Utc::now()).await {
                Ok(0) => {}
                Ok(expired) => info!(expired, "expiry sweep marked listings expired"),
                Err(e) => error!("expiry sweep failed: {}", e),
            }
        }
    })
}
