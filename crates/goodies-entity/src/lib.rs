//! # goodies-entity
//!
//! Domain entities shared by the store, auth, and API layers. Resource
//! documents (parts, reviews, orders) are schemaless and have no entity
//! type; only the user record carries fields the service reads.

pub mod user;

pub use user::{Identity, User, UserRole};
