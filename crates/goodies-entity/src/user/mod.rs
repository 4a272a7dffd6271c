//! User entity, role, and identity.

pub mod identity;
pub mod model;
pub mod role;

pub use identity::Identity;
pub use model::{ProfileUpdate, User};
pub use role::UserRole;
