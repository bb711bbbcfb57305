//! Repository adapters over [`DocumentStorePort`](pb_core::ports::DocumentStorePort).

mod idea_repo;
mod pantry_repo;

pub use idea_repo::DocumentIdeaRepository;
pub use pantry_repo::DocumentPantryRepository;
