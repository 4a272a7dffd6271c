//! Repositories over the document store, one per access pattern.

pub mod document;
pub mod user;

pub use document::DocumentRepository;
pub use user::UserRepository;
