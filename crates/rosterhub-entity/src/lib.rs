//! # rosterhub-entity
//!
//! Domain entity models for Rosterhub: accounts and roles.

pub mod account;
pub mod role;

pub use account::Account;
pub use role::{Role, RoleTag};
