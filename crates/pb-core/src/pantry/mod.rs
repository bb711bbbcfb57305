//! Pantry domain: items, categories and the grouped pantry view.

pub mod category;
pub mod grouping;
pub mod model;

pub use category::{Category, UnknownCategory, DEFAULT_CATEGORY};
pub use grouping::{filter_items, group_pantry_items, NameCollator, PantryGroup};
pub use model::{NewPantryItem, PantryItem, PantryItemPatch, StorageLocation};
