pub mod delete_idea;
pub mod get_idea_detail;
pub mod list_ideas;
pub mod prune_ideas;
pub mod replace_idea_ingredients;
pub mod save_idea;
pub mod watch_pantry_suggestions;

#[cfg(test)]
pub(crate) mod test_support;

pub use delete_idea::DeleteIdea;
pub use get_idea_detail::{GetIdeaDetail, IdeaDetail};
pub use list_ideas::ListIdeas;
pub use prune_ideas::PruneIdeas;
pub use replace_idea_ingredients::ReplaceIdeaIngredients;
pub use save_idea::SaveIdea;
pub use watch_pantry_suggestions::WatchPantrySuggestions;
