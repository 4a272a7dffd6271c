//! # goodies-auth
//!
//! Token-based authentication and the single role check for Goodies.
//!
//! ## Modules
//!
//! - `jwt`: credential issuance ([`JwtEncoder`]) and verification
//!   ([`JwtDecoder`])
//! - `rbac`: the admin gate ([`RoleAuthorizer`])

pub mod jwt;
pub mod rbac;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use rbac::RoleAuthorizer;
