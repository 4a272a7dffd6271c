//! # goodies-core
//!
//! Core crate for the Goodies API. Contains configuration schemas, the
//! document store trait, shared document types, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other Goodies crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
