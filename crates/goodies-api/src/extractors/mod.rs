//! Request extractors. Adding a gate extractor to a handler's arguments
//! puts the gate in front of it.

pub mod admin;
pub mod auth;
pub mod body;

pub use admin::AdminUser;
pub use auth::{AuthUser, authorization_header};
pub use body::JsonBody;
