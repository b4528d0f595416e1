//! JWT token creation and validation.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{AccessClaims, RefreshClaims};
pub use decoder::JwtDecoder;
pub use encoder::{JwtEncoder, TokenDetail};
