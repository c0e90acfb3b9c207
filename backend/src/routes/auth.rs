//! Authentication routes
//!
//! Provides the login endpoint. Password verification is offloaded to the
//! blocking thread pool; token issuance uses the pre-computed keys from
//! `AppState`.

use crate::error::{ApiError, ApiResult};
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{rejection::FormRejection, State},
    routing::post,
    Form, Json, Router,
};
use stockroom_shared::types::{LoginForm, TokenResponse};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/", post(login))
}

/// Login with username and password
///
/// POST /api/v1/auth (form-encoded)
///
/// A missing or undecodable form surfaces as a validation error (422)
/// rather than axum's default form rejection.
async fn login(
    State(state): State<AppState>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Form(form) = form.map_err(|e| ApiError::Validation(e.body_text()))?;

    let tokens = UserService::login(&state.db, state.jwt(), &form.username, &form.password).await?;
    Ok(Json(tokens))
}

#[cfg(test)]
mod tests {
    // Endpoint tests live in backend/tests/auth_integration_test.rs
}
