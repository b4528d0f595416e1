//! Server-side session tracking and the login/logout/refresh flows.

pub mod gateway;
pub mod registry;

pub use gateway::AuthGateway;
pub use registry::SessionRegistry;
