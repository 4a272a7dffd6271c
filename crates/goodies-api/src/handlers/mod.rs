//! HTTP request handlers organized by collection.

pub mod health;
pub mod orders;
pub mod parts;
pub mod reviews;
pub mod users;
