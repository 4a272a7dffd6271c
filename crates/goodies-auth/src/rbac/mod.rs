//! Role-based gate: admin or not.

pub mod enforcer;

pub use enforcer::RoleAuthorizer;
