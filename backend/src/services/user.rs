//! User service for authentication
//!
//! Password verification runs on the blocking thread pool; the JWT
//! service is passed by reference with its pre-computed keys.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::UserRepository;
use sqlx::PgPool;
use stockroom_shared::types::TokenResponse;

const BAD_CREDENTIALS: &str = "Incorrect username or password";

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Authenticate with username and password, issuing an access token
    ///
    /// An unknown username and a wrong password are indistinguishable to
    /// the caller: both fail with the same Unauthorized detail.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        username: &str,
        password: &str,
    ) -> Result<TokenResponse, ApiError> {
        let user = UserRepository::find_by_username(pool, username)
            .await
            .map_err(ApiError::Database)?
            .ok_or_else(|| ApiError::Unauthorized(BAD_CREDENTIALS.to_string()))?;

        // Verify password on blocking thread pool (CPU-intensive)
        let valid = PasswordService::verify_async(password.to_string(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::Unauthorized(BAD_CREDENTIALS.to_string()));
        }

        let access_token = jwt_service.issue(user.id).map_err(ApiError::Internal)?;

        Ok(TokenResponse {
            access_token,
            token_type: "bearer".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see backend/tests/
}
