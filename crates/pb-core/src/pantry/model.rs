use serde::{Deserialize, Serialize};

use super::category::{Category, DEFAULT_CATEGORY};
use crate::ids::PantryItemId;

/// Where an item is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageLocation {
    Fridge,
    Freezer,
    Pantry,
    Other,
}

/// Snapshot of a `pantryItems` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryItem {
    #[serde(skip_serializing)]
    pub id: PantryItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_ingredient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_before_date: Option<String>,
    #[serde(default, rename = "acquiredAt", skip_serializing_if = "Option::is_none")]
    pub acquired_at_ms: Option<i64>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at_ms: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freshness_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageLocation>,
    #[serde(default)]
    pub substitutes: Vec<String>,
}

impl PantryItem {
    /// Grouping key: the first tag when present and non-empty, else `Other`.
    pub fn category(&self) -> &str {
        match self.tags.first() {
            Some(tag) if !tag.is_empty() => tag,
            _ => DEFAULT_CATEGORY.label(),
        }
    }

    /// Category offered when the item is edited. Tags outside the known
    /// list fall back to the default category.
    pub fn edit_category(&self) -> Category {
        Category::from_label(self.category()).unwrap_or(DEFAULT_CATEGORY)
    }
}

/// Fields of a pantry item to create. `updatedAt` is stamped by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPantryItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_ingredient_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_before_date: Option<String>,
    #[serde(rename = "acquiredAt", skip_serializing_if = "Option::is_none")]
    pub acquired_at_ms: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freshness_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageLocation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub substitutes: Vec<String>,
}

impl NewPantryItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn in_category(mut self, category: Category) -> Self {
        self.tags = vec![category.label().to_string()];
        self
    }
}

/// Partial pantry item used by merge-upserts and patch-updates.
/// Only the fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_ingredient_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_before_date: Option<String>,
    #[serde(rename = "acquiredAt", skip_serializing_if = "Option::is_none")]
    pub acquired_at_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freshness_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitutes: Option<Vec<String>>,
}

impl PantryItemPatch {
    /// Patch written by an inline edit: new name, tags replaced by the category.
    pub fn rename_and_categorize(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: Some(name.into()),
            tags: Some(vec![category.label().to_string()]),
            ..Default::default()
        }
    }
}
