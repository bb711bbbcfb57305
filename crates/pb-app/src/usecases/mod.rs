//! Business logic use cases
//!
//! Pantry:
//!   WatchPantryGroups / WatchPantryItems → list and search
//!   QuickAddPantryItem / SavePantryItemEdit → inline editing
//!   RemovePantryItem(s) / PrunePantry → cleanup
//!
//! Ideas:
//!   ListIdeas / GetIdeaDetail → browsing
//!   SaveIdea / ReplaceIdeaIngredients → writes (readiness classified on save)
//!   DeleteIdea / PruneIdeas → cleanup
//!   WatchPantrySuggestions → ingredient hints for the idea form

pub mod ideas;
pub mod pantry;

pub use ideas::{
    DeleteIdea, GetIdeaDetail, IdeaDetail, ListIdeas, PruneIdeas, ReplaceIdeaIngredients,
    SaveIdea, WatchPantrySuggestions,
};
pub use pantry::{
    PrunePantry, QuickAddPantryItem, RemovePantryItem, RemovePantryItems, SavePantryItemEdit,
    WatchPantryGroups, WatchPantryItem, WatchPantryItems,
};
