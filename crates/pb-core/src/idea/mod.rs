//! Recipe ideas: readiness classification, ideas, their ingredients and the
//! preferences used to browse them.

pub mod filters;
pub mod ingredient;
pub mod model;
pub mod readiness;

pub use filters::{pantry_name_suggestions, IdeaFilters};
pub use ingredient::{count_missing, IdeaIngredient, SubstituteSource, SubstituteSuggestion};
pub use model::{Difficulty, Idea, IdeaDraft, ScoreBreakdown};
pub use readiness::{classify, Readiness, ReadinessTier, MAX_STORED_MISSING};
