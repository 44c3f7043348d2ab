use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::User,
        value_objects::{Identity, RegisterUserInput},
    },
};

/// Repository trait for the user/reputation store.
///
/// The reputation counters themselves are incremented inside the swap
/// ledger's transactions; this port only covers reads and account rows.
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn create_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_by_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;
}

/// Service trait resolving bearer identities to marketplace users.
#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn get_or_register(
        &self,
        input: RegisterUserInput,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;

    fn get_user(&self, user_id: Uuid) -> impl Future<Output = Result<User, CoreError>> + Send;
}
