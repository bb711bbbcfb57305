use serde::{Deserialize, Serialize};

use crate::ids::IngredientId;

/// Provenance of a substitute suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubstituteSource {
    /// From the user's own pantry substitutes.
    Local,
    /// From a shared substitution table.
    Global,
    /// Produced by a language model.
    Model,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstituteSuggestion {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_ingredient_id: Option<String>,
    pub source: SubstituteSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

/// Snapshot of an `ideas/{id}/ingredients` document.
///
/// `id` is always set on snapshots read from the store. On writes a missing
/// id makes the store allocate one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaIngredient {
    #[serde(default, skip_serializing)]
    pub id: Option<IngredientId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_ingredient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_pantry_item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub is_missing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_substitutes: Option<Vec<SubstituteSuggestion>>,
}

impl IdeaIngredient {
    /// An ingredient without an id, quantities or pantry match.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            canonical_ingredient_id: None,
            required_quantity: None,
            required_unit: None,
            matched_pantry_item_id: None,
            matched_quantity: None,
            match_score: None,
            is_missing: false,
            suggested_substitutes: None,
        }
    }

    pub fn missing(mut self) -> Self {
        self.is_missing = true;
        self
    }
}

/// Number of ingredients flagged as missing.
pub fn count_missing(ingredients: &[IdeaIngredient]) -> usize {
    ingredients.iter().filter(|i| i.is_missing).count()
}
