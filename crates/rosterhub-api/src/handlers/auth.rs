//! Auth handlers: login, logout, refresh.

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use rosterhub_auth::jwt::TokenDetail;
use rosterhub_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, MessageResponse, TokenResponse};
use crate::error::ApiResult;
use crate::extractors::AuthAccount;
use crate::state::AppState;

/// Name of the refresh token cookie.
const REFRESH_COOKIE: &str = "refresh_token";
/// The cookie only travels to API routes, never to static assets.
const REFRESH_COOKIE_PATH: &str = "/api/v1";

type TokenReply = (
    CookieJar,
    [(header::HeaderName, String); 1],
    Json<ApiResponse<TokenResponse>>,
);

/// Builds the three-part token reply: refresh cookie, Authorization
/// response header, and JSON body.
fn token_reply(jar: CookieJar, detail: TokenDetail, refresh_ttl_hours: u64) -> TokenReply {
    let cookie = Cookie::build((REFRESH_COOKIE, detail.refresh_token.clone()))
        .path(REFRESH_COOKIE_PATH)
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::hours(refresh_ttl_hours as i64))
        .build();

    let bearer = [(
        header::AUTHORIZATION,
        format!("Bearer {}", detail.access_token),
    )];

    let body = ApiResponse::ok(TokenResponse {
        access_token: detail.access_token,
        refresh_token: detail.refresh_token,
        access_expires_at: detail.access_expires_at,
        refresh_expires_at: detail.refresh_expires_at,
    });

    (jar.add(cookie), bearer, Json(body))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> ApiResult<TokenReply> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let detail = state.auth_gateway.login(&req.email, &req.password).await?;

    Ok(token_reply(jar, detail, state.config.auth.refresh_ttl_hours))
}

/// POST /api/v1/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    auth: AuthAccount,
) -> ApiResult<(CookieJar, Json<ApiResponse<MessageResponse>>)> {
    state.auth_gateway.logout(auth.access_id).await?;

    let jar = jar.remove(Cookie::build((REFRESH_COOKIE, "")).path(REFRESH_COOKIE_PATH));
    Ok((
        jar,
        Json(ApiResponse::ok(MessageResponse::new(
            "Logged out successfully",
        ))),
    ))
}

/// GET /api/v1/auth/refresh
pub async fn refresh(State(state): State<AppState>, jar: CookieJar) -> ApiResult<TokenReply> {
    let refresh_token = jar
        .get(REFRESH_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or_else(|| AppError::authentication("Missing refresh token cookie"))?;

    let detail = state.auth_gateway.refresh(&refresh_token).await?;

    Ok(token_reply(jar, detail, state.config.auth.refresh_ttl_hours))
}
