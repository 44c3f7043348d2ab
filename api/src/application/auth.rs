use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use base64::{Engine, engine::general_purpose};
use foodswap_core::domain::user::{
    ports::UserService,
    value_objects::{Identity, RegisterUserInput},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Claims carried by the bearer token. The gateway in front of this API
/// verifies the signature; this layer only needs the subject identity.
#[derive(Debug, Serialize, Deserialize)]
pub struct BearerClaims {
    pub sub: Uuid,
    #[serde(default)]
    pub preferred_username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, ApiError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| ApiError::Unauthorized("Token not found".to_string()))?;

    Ok(bearer.token().to_string())
}

fn decode_claims(token: &str) -> Result<BearerClaims, ApiError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(ApiError::Unauthorized("Invalid token".to_string()));
    }

    let decoded = general_purpose::URL_SAFE_NO_PAD
        .decode(segments[1])
        .map_err(|e| {
            tracing::error!("Failed to decode token payload: {:?}", e);
            ApiError::Unauthorized("Invalid token".to_string())
        })?;

    let payload = String::from_utf8(decoded).map_err(|e| {
        tracing::error!("Failed to decode token payload: {:?}", e);
        ApiError::Unauthorized("Invalid token".to_string())
    })?;

    serde_json::from_str(&payload).map_err(|e| {
        tracing::error!("Failed to deserialize token claims: {:?}", e);
        ApiError::Unauthorized("Invalid token".to_string())
    })
}

/// Extractor resolving the bearer identity to a marketplace user, creating
/// the user row on first sight.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>().cloned() {
            return Ok(RequiredIdentity(identity));
        }

        let token = extract_token_from_bearer(parts).await?;
        let claims = decode_claims(&token)?;

        let app_state = AppState::from_ref(state);

        let identity = app_state
            .service
            .get_or_register(RegisterUserInput {
                id: claims.sub,
                username: claims.preferred_username,
                email: claims.email,
            })
            .await
            .map_err(|e| {
                tracing::error!("Failed to resolve identity: {}", e);
                ApiError::from(e)
            })?;

        parts.extensions.insert(identity.clone());

        Ok(RequiredIdentity(identity))
    }
}
