//! Idea generation preferences and pantry-name suggestions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::model::Idea;
use super::readiness::MAX_STORED_MISSING;
use crate::pantry::PantryItem;

/// Preferences used when asking for and browsing recipe ideas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaFilters {
    pub prompt: String,
    /// Highest acceptable number of missing ingredients, `0..=2`.
    pub max_missing: u32,
    /// Preferred total time in minutes, `None` for no preference.
    pub time_minutes: Option<u32>,
    pub cuisines: BTreeSet<String>,
    pub star_ingredient: Option<String>,
}

impl Default for IdeaFilters {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            max_missing: 1,
            time_minutes: None,
            cuisines: BTreeSet::new(),
            star_ingredient: None,
        }
    }
}

impl IdeaFilters {
    pub fn set_max_missing(&mut self, max_missing: u32) {
        self.max_missing = max_missing.min(MAX_STORED_MISSING);
    }

    pub fn toggle_cuisine(&mut self, cuisine: &str) {
        if !self.cuisines.remove(cuisine) {
            self.cuisines.insert(cuisine.to_string());
        }
    }

    /// Star the trimmed input. Blank input leaves the current star untouched.
    pub fn set_star(&mut self, input: &str) -> bool {
        let value = input.trim();
        if value.is_empty() {
            return false;
        }
        self.star_ingredient = Some(value.to_string());
        true
    }

    pub fn clear_star(&mut self) {
        self.star_ingredient = None;
    }

    /// Whether a stored idea satisfies the missing-count and time preferences.
    pub fn admits(&self, idea: &Idea) -> bool {
        if idea.missing_count > self.max_missing {
            return false;
        }
        match (self.time_minutes, idea.total_time_minutes) {
            (Some(limit), Some(total)) => total <= limit,
            _ => true,
        }
    }
}

/// Pantry names offered as ingredient suggestions: trimmed, blanks dropped,
/// sorted.
pub fn pantry_name_suggestions(items: &[PantryItem]) -> Vec<String> {
    let mut names: Vec<String> = items
        .iter()
        .map(|item| item.name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    names.sort();
    names
}
