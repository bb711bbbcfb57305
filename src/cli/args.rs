use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pb_core::pantry::Category;

#[derive(Debug, Parser)]
#[command(name = "pantrybook")]
#[command(version, about = "Track your pantry and keep recipe ideas ranked by what you have")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "PANTRYBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Data directory (database, logs, default config file)
    #[arg(long, env = "PANTRYBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Database file (overrides config file); `:memory:` for a throwaway store
    #[arg(long, env = "PANTRYBOOK_DATABASE")]
    pub database: Option<PathBuf>,

    /// Debug logging regardless of build profile
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pantry items
    #[command(subcommand)]
    Pantry(PantryCommand),

    /// Recipe ideas
    #[command(subcommand)]
    Ideas(IdeasCommand),
}

#[derive(Debug, Subcommand)]
pub enum PantryCommand {
    /// Show items grouped by category
    List {
        /// Case-insensitive name filter
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only items carrying this tag (flat list)
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Keep printing the grouped view as the pantry changes
    Watch {
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Add an item
    Add {
        name: String,

        #[arg(short, long, default_value = "Other")]
        category: Category,
    },

    /// Rename an item and move it to a category
    Edit {
        id: String,

        name: String,

        #[arg(short, long, default_value = "Other")]
        category: Category,
    },

    /// Remove one or more items
    Remove {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Keep only the most recently updated items
    Prune {
        #[arg(short, long)]
        keep: usize,
    },
}

#[derive(Debug, Subcommand)]
pub enum IdeasCommand {
    /// List ideas, best score first
    List {
        /// READY, N1 or N2
        #[arg(long)]
        tier: Option<String>,

        #[arg(short, long)]
        limit: Option<usize>,

        /// Hide ideas missing more than this many ingredients (0-2)
        #[arg(long)]
        max_missing: Option<u32>,

        /// Hide ideas taking longer than this many minutes
        #[arg(long)]
        minutes: Option<u32>,
    },

    /// Show one idea with its ingredients
    Show { id: String },

    /// Create or update an idea
    Save(SaveIdeaArgs),

    /// Replace the ingredient list of an idea
    ReplaceIngredients {
        id: String,

        /// Ingredients available in the pantry
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,

        /// Ingredients that still need buying
        #[arg(long = "missing-ingredient")]
        missing_ingredients: Vec<String>,
    },

    /// Delete an idea
    Delete {
        id: String,

        /// Also delete its ingredient documents
        #[arg(long)]
        with_ingredients: bool,
    },

    /// Keep only the newest ideas
    Prune {
        #[arg(short, long)]
        keep: usize,
    },

    /// Pantry names usable as a star ingredient
    Suggest,
}

#[derive(Debug, Args)]
pub struct SaveIdeaArgs {
    /// Existing idea to update
    #[arg(long)]
    pub id: Option<String>,

    #[arg(long, default_value = "")]
    pub title: String,

    #[arg(long, default_value = "")]
    pub prompt: String,

    #[arg(long)]
    pub description: Option<String>,

    /// Raw missing-ingredient count; defaults to the number of missing ingredients
    #[arg(long, allow_negative_numbers = true)]
    pub missing: Option<f64>,

    #[arg(long, default_value_t = 0.0)]
    pub score: f64,

    #[arg(long)]
    pub servings: Option<u32>,

    #[arg(long)]
    pub minutes: Option<u32>,

    #[arg(long)]
    pub allow_substitutions: bool,

    #[arg(long = "ingredient")]
    pub ingredients: Vec<String>,

    #[arg(long = "missing-ingredient")]
    pub missing_ingredients: Vec<String>,
}
