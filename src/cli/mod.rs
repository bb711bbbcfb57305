//! Command-line surface of Pantrybook.

mod args;
mod render;
mod run;

pub use args::{Cli, Command, IdeasCommand, PantryCommand, SaveIdeaArgs};
pub use render::{render_groups, render_idea_detail, render_ideas, render_items};
pub use run::run;
