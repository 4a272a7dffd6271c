//! # goodies-database
//!
//! Document store backends (PostgreSQL JSONB and in-memory), connection
//! pool management, migrations, and the repositories handlers use to reach
//! the four collections.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::StoreManager;
