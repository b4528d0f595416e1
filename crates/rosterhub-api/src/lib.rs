//! # rosterhub-api
//!
//! HTTP API layer for Rosterhub built on Axum.
//!
//! Provides the REST endpoints under `/api/v1`, middleware (CORS, logging),
//! extractors, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use state::AppState;
