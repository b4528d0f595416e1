//! Account domain entities.

pub mod model;

pub use model::{Account, CreateAccount, UpdateAccount};
