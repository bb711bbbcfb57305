//! # pb-core
//!
//! Core domain models and business logic for Pantrybook.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies: the pantry grouping, the idea readiness classifier, the
//! document store model and the ports implemented by `pb-infra`.

pub mod config;
pub mod document;
pub mod idea;
pub mod ids;
pub mod observe;
pub mod pantry;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::{AppConfig, StoreLimits};
pub use idea::{classify, Idea, IdeaDraft, IdeaIngredient, Readiness, ReadinessTier};
pub use ids::{IdeaId, IngredientId, PantryItemId};
pub use observe::{combine_latest, Signal, Snapshots};
pub use pantry::{group_pantry_items, Category, PantryGroup, PantryItem};
