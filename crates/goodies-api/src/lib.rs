//! # goodies-api
//!
//! HTTP API layer for Goodies built on Axum.
//!
//! Provides the REST endpoints over parts, reviews, users and orders, the
//! credential and admin gates (as extractors), CORS and request logging
//! middleware, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
