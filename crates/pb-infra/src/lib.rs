//! # pb-infra
//!
//! Infrastructure adapters for Pantrybook: the SQLite document store, the
//! repositories built on it and the system clock.

pub mod db;
pub mod document_store;
pub mod repositories;
pub mod time;

pub use document_store::DieselDocumentStore;
pub use repositories::{DocumentIdeaRepository, DocumentPantryRepository};
pub use time::SystemClock;
