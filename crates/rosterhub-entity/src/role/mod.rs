//! Role domain entities.

pub mod model;
pub mod tag;

pub use model::{CreateRole, Role, UpdateRole};
pub use tag::RoleTag;
