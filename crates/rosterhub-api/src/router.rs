//! Route definitions for the Rosterhub HTTP API.
//!
//! All routes are mounted under `/api/v1`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(account_routes())
        .merge(role_routes())
        .route("/health", get(handlers::health::health));

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login, logout, refresh.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/refresh", get(handlers::auth::refresh))
}

/// Account CRUD endpoints. `add` is open; the rest require a bearer token.
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/account/add", post(handlers::account::add))
        .route("/account/get_by_id", get(handlers::account::get_by_id))
        .route(
            "/account/get_by_email",
            get(handlers::account::get_by_email),
        )
        .route("/account/get_all", post(handlers::account::get_all))
        .route("/account/update", put(handlers::account::update))
        .route("/account/delete", delete(handlers::account::delete))
}

/// Role CRUD endpoints, all authenticated.
fn role_routes() -> Router<AppState> {
    Router::new()
        .route("/role/add", post(handlers::role::add))
        .route("/role/get_by_id", get(handlers::role::get_by_id))
        .route("/role/get_all", post(handlers::role::get_all))
        .route("/role/update", put(handlers::role::update))
        .route("/role/delete", delete(handlers::role::delete))
}
