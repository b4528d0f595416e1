//! # rosterhub-cache
//!
//! Cache providers for Rosterhub: a Redis backend for deployments and an
//! in-memory backend for development and tests, both behind the
//! `CacheProvider` trait from `rosterhub-core`.

pub mod keys;
pub mod memory;
pub mod provider;
pub mod redis;

pub use provider::CacheManager;
