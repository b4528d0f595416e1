//! `AuthAccount` extractor for authenticated routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use rosterhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated caller context available in handlers.
///
/// Extraction runs the full validation chain: bearer header present,
/// signature and expiry valid, and the token's ID still present in the
/// session registry. A handler taking this parameter is an authenticated
/// route.
#[derive(Debug, Clone)]
pub struct AuthAccount {
    /// Email of the authenticated account.
    pub email: String,
    /// Registry ID of the presented access token.
    pub access_id: Uuid,
}

impl FromRequestParts<AppState> for AuthAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let claims = state.auth_gateway.authenticate(token).await?;

        Ok(AuthAccount {
            email: claims.sub,
            access_id: claims.access_id,
        })
    }
}
