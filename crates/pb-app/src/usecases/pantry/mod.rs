pub mod prune_pantry;
pub mod quick_add_pantry_item;
pub mod remove_pantry_items;
pub mod save_pantry_item_edit;
pub mod watch_pantry_groups;
pub mod watch_pantry_items;

#[cfg(test)]
pub(crate) mod test_support;

pub use prune_pantry::PrunePantry;
pub use quick_add_pantry_item::QuickAddPantryItem;
pub use remove_pantry_items::{RemovePantryItem, RemovePantryItems};
pub use save_pantry_item_edit::SavePantryItemEdit;
pub use watch_pantry_groups::WatchPantryGroups;
pub use watch_pantry_items::{WatchPantryItem, WatchPantryItems};
