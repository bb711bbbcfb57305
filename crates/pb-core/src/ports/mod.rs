//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure
//! that implements them. The document store is the only external system;
//! repositories give it typed pantry and idea operations.

mod clock;
pub mod document_store;
pub mod errors;
pub mod idea_repository;
pub mod pantry_repository;

pub use clock::*;
pub use document_store::DocumentStorePort;
pub use errors::DocumentStoreError;
pub use idea_repository::{DeleteIdeaOptions, IdeaListOptions, IdeaRepositoryPort};
pub use pantry_repository::PantryRepositoryPort;
