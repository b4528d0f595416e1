//! HTTP handlers grouped by domain.

pub mod account;
pub mod auth;
pub mod health;
pub mod role;
