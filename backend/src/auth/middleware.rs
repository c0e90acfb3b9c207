//! Authentication middleware
//!
//! Provides the axum extractor that authenticates protected routes.
//!
//! Every failure mode (missing header, bad scheme, invalid or expired
//! token, unknown subject) produces the same 401 detail so that user
//! existence is never leaked.

use crate::error::ApiError;
use crate::repositories::UserRepository;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

const INVALID_CREDENTIALS: &str = "Invalid authentication credentials";

/// Authenticated user resolved from the bearer token
///
/// Validates the JWT, then resolves the subject to a `users` row. A token
/// whose subject no longer exists is rejected the same way as a bad token.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        // Check Bearer prefix
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        // Use pre-computed JWT service from state
        let claims = app_state
            .jwt()
            .verify(token)
            .map_err(|_| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        // Parse user ID from claims
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        // Resolve the subject; a vanished user is indistinguishable from a
        // bad token (Unauthorized, not NotFound).
        let user = UserRepository::find_by_id(app_state.db(), user_id)
            .await
            .map_err(ApiError::Database)?
            .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        Ok(CurrentUser {
            id: user.id,
            username: user.username,
        })
    }
}
