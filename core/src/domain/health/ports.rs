use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, health::services::HealthStatus};

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckRepository: Send + Sync {
    /// Pings the data store, returning the observed latency in
    /// milliseconds.
    fn check(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn readiness(&self) -> impl Future<Output = Result<HealthStatus, CoreError>> + Send;
}
