//! Pantry grouping: filter by name, bucket by category, order groups and items.

use std::cmp::Ordering;
use std::collections::HashMap;

use icu_collator::{Collator, CollatorOptions};
use serde::Serialize;

use super::category::Category;
use super::model::PantryItem;

/// One category bucket of the pantry view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PantryGroup {
    pub category: String,
    pub items: Vec<PantryItem>,
}

/// Normalized form of a free-text search: trimmed and lower-cased.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// `true` when the (already normalized) query is empty or a substring of the
/// lower-cased item name.
pub fn matches_query(item: &PantryItem, normalized_query: &str) -> bool {
    normalized_query.is_empty() || item.name.to_lowercase().contains(normalized_query)
}

/// Items whose name contains `query`, case-insensitively. Input order is kept.
pub fn filter_items(items: &[PantryItem], query: &str) -> Vec<PantryItem> {
    let query = normalize_query(query);
    items
        .iter()
        .filter(|item| matches_query(item, &query))
        .cloned()
        .collect()
}

/// Locale-aware string order (CLDR root collation).
///
/// Case and accents only break ties: `Apple < banana < Cherry`,
/// `Éclair < Zucchini`. If collation data cannot be loaded it falls back to
/// a case-folded comparison with a case-sensitive tie-break.
pub struct NameCollator {
    collator: Option<Collator>,
}

impl NameCollator {
    pub fn new() -> Self {
        let collator = match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(err) => {
                tracing::warn!(error = %err, "Collation data unavailable, using case-folded order");
                None
            }
        };
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
        }
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// Known categories by priority, unknown ones after them in collation order.
pub fn compare_categories(collator: &NameCollator, a: &str, b: &str) -> Ordering {
    let rank = |key: &str| Category::priority_of(key).unwrap_or(usize::MAX);
    rank(a)
        .cmp(&rank(b))
        .then_with(|| collator.compare(a, b))
}

/// Filter `items` by `query`, group them by category and order the result.
///
/// Groups follow the fixed category priority; unknown categories come last,
/// ordered by name. Items inside a group are ordered by name with
/// [`NameCollator`] (stable, so equal names keep their input order).
pub fn group_pantry_items(items: &[PantryItem], query: &str) -> Vec<PantryGroup> {
    let query = normalize_query(query);
    let collator = NameCollator::new();

    let mut buckets: HashMap<&str, Vec<PantryItem>> = HashMap::new();
    for item in items.iter().filter(|item| matches_query(item, &query)) {
        buckets.entry(item.category()).or_default().push(item.clone());
    }

    let mut groups: Vec<PantryGroup> = buckets
        .into_iter()
        .map(|(category, mut items)| {
            items.sort_by(|a, b| collator.compare(&a.name, &b.name));
            PantryGroup {
                category: category.to_string(),
                items,
            }
        })
        .collect();

    groups.sort_by(|a, b| compare_categories(&collator, &a.category, &b.category));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::PantryItemId;

    fn item(id: &str, name: &str, tags: &[&str]) -> PantryItem {
        PantryItem {
            id: PantryItemId::from(id),
            name: name.to_string(),
            canonical_ingredient_id: None,
            quantity: None,
            unit: None,
            best_before_date: None,
            acquired_at_ms: None,
            updated_at_ms: 0,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            notes: None,
            freshness_score: None,
            storage: None,
            substitutes: Vec::new(),
        }
    }

    fn sample() -> Vec<PantryItem> {
        vec![
            item("1", "Milk", &["Dairy"]),
            item("2", "Apple", &["Fruits"]),
            item("3", "Rice", &[]),
        ]
    }

    fn shape(groups: &[PantryGroup]) -> Vec<(String, Vec<String>)> {
        groups
            .iter()
            .map(|g| {
                (
                    g.category.clone(),
                    g.items.iter().map(|i| i.name.clone()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_groups_follow_category_priority() {
        let groups = group_pantry_items(&sample(), "");
        assert_eq!(
            shape(&groups),
            vec![
                ("Fruits".to_string(), vec!["Apple".to_string()]),
                ("Dairy".to_string(), vec!["Milk".to_string()]),
                ("Other".to_string(), vec!["Rice".to_string()]),
            ]
        );
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let groups = group_pantry_items(&sample(), "mi");
        assert_eq!(
            shape(&groups),
            vec![("Dairy".to_string(), vec!["Milk".to_string()])]
        );

        let groups = group_pantry_items(&sample(), "  APP ");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items[0].name, "Apple");
    }

    #[test]
    fn test_unknown_categories_sort_after_known_alphabetically() {
        let items = vec![
            item("1", "Gummies", &["Candy"]),
            item("2", "Tea", &["Drinks"]),
            item("3", "Bread", &["Bakery"]),
            item("4", "Salt", &[]),
        ];
        let categories: Vec<String> = group_pantry_items(&items, "")
            .into_iter()
            .map(|g| g.category)
            .collect();
        assert_eq!(categories, vec!["Drinks", "Other", "Bakery", "Candy"]);
    }

    #[test]
    fn test_items_sorted_by_locale_order() {
        let items = vec![
            item("1", "banana", &["Fruits"]),
            item("2", "Cherry", &["Fruits"]),
            item("3", "Apple", &["Fruits"]),
            item("4", "Zucchini", &["Veggies"]),
            item("5", "Éclair", &["Veggies"]),
        ];
        assert_eq!(
            shape(&group_pantry_items(&items, "")),
            vec![
                (
                    "Veggies".to_string(),
                    vec!["Éclair".to_string(), "Zucchini".to_string()]
                ),
                (
                    "Fruits".to_string(),
                    vec!["Apple".to_string(), "banana".to_string(), "Cherry".to_string()]
                ),
            ]
        );
    }

    #[test]
    fn test_unknown_categories_use_locale_order() {
        let items = vec![
            item("1", "Tofu", &["snacks-asia"]),
            item("2", "Honey", &["Bee"]),
            item("3", "Jam", &["Ça va"]),
        ];
        let categories: Vec<String> = group_pantry_items(&items, "")
            .into_iter()
            .map(|g| g.category)
            .collect();
        assert_eq!(categories, vec!["Bee", "Ça va", "snacks-asia"]);
    }

    #[test]
    fn test_collator_breaks_case_ties_consistently() {
        let collator = NameCollator::new();
        assert_eq!(collator.compare("apple", "Banana"), Ordering::Less);
        assert_eq!(collator.compare("Egg", "Egg"), Ordering::Equal);
        assert_ne!(collator.compare("egg", "Egg"), Ordering::Equal);
    }

    #[test]
    fn test_equal_names_keep_input_order() {
        let items = vec![
            item("first", "Egg", &["Dairy"]),
            item("second", "Egg", &["Dairy"]),
        ];
        let groups = group_pantry_items(&items, "");
        let ids: Vec<&str> = groups[0].items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn test_empty_query_partitions_every_record_once() {
        let items = vec![
            item("1", "Milk", &["Dairy"]),
            item("2", "Cheese", &["Dairy"]),
            item("3", "Apple", &["Fruits"]),
            item("4", "Rice", &[]),
            item("5", "Gummies", &["Candy"]),
        ];
        let groups = group_pantry_items(&items, "");
        let mut ids: Vec<String> = groups
            .iter()
            .flat_map(|g| g.items.iter().map(|i| i.id.to_string()))
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = filter_items(&sample(), "i");
        let twice = filter_items(&once, "i");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let items = vec![
            item("1", "Gummies", &["Candy"]),
            item("2", "Bread", &["Bakery"]),
            item("3", "Milk", &["Dairy"]),
        ];
        let first = group_pantry_items(&items, "");
        for _ in 0..10 {
            assert_eq!(group_pantry_items(&items, ""), first);
        }
    }
}
