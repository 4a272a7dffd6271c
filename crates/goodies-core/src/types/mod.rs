//! Core type definitions used across the Goodies workspace.

pub mod collection;
pub mod document;
pub mod outcome;

pub use collection::Collection;
pub use document::{Document, Filter, ID_FIELD};
pub use outcome::{DeleteResult, InsertOneResult, UpdateResult};
