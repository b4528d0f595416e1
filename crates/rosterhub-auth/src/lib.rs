//! # rosterhub-auth
//!
//! Token issuance, validation, session tracking, and the login/logout/refresh
//! flows for the Rosterhub management service.
//!
//! ## Modules
//!
//! - `jwt` — JWT token pair creation and validation with per-class secrets
//! - `password` — Argon2id password hashing and verification
//! - `session` — Server-side session registry and the auth gateway
//! - `credentials` — Lookup seam between the gateway and account storage

pub mod credentials;
pub mod jwt;
pub mod password;
pub mod session;

pub use credentials::CredentialStore;
pub use jwt::{AccessClaims, JwtDecoder, JwtEncoder, RefreshClaims, TokenDetail};
pub use password::PasswordHasher;
pub use session::{AuthGateway, SessionRegistry};
