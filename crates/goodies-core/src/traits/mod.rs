//! Core traits defined in `goodies-core` and implemented by other crates.

pub mod store;

pub use store::DocumentStore;
