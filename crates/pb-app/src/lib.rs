//! Pantrybook application layer
//!
//! Use cases over the repository ports of `pb-core`. Every use case takes its
//! ports explicitly; [`AppDeps`] only groups them for wiring.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
