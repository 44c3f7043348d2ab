use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::user::entities::User;

/// Authenticated actor resolved from the bearer identity supplied by the
/// upstream auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    pub user: User,
}

impl Identity {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn id(&self) -> Uuid {
        self.user.id
    }
}

/// Identity attributes carried by the bearer token payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserInput {
    pub id: Uuid,
    pub username: Option<String>,
    pub email: Option<String>,
}
