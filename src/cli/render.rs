//! Plain-text rendering of pantry and idea snapshots.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use pb_core::idea::{count_missing, Idea, IdeaIngredient};
use pb_core::pantry::{PantryGroup, PantryItem};

fn format_timestamp(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ms.to_string())
}

fn item_line(out: &mut String, item: &PantryItem) {
    let _ = write!(out, "  {}", item.name);
    if let Some(quantity) = item.quantity {
        let _ = write!(out, " ({quantity}");
        if let Some(unit) = &item.unit {
            let _ = write!(out, " {unit}");
        }
        out.push(')');
    }
    let _ = writeln!(out, "  [{}]", item.id);
}

/// Category headers in display order, each followed by its items.
pub fn render_groups(groups: &[PantryGroup]) -> String {
    if groups.is_empty() {
        return "No pantry items.\n".to_string();
    }
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "{} ({})", group.category, group.items.len());
        for item in &group.items {
            item_line(&mut out, item);
        }
    }
    out
}

pub fn render_items(items: &[PantryItem]) -> String {
    if items.is_empty() {
        return "No pantry items.\n".to_string();
    }
    let mut out = String::new();
    for item in items {
        item_line(&mut out, item);
    }
    out
}

pub fn render_ideas(ideas: &[Idea]) -> String {
    if ideas.is_empty() {
        return "No ideas.\n".to_string();
    }
    let mut out = String::new();
    for idea in ideas {
        let _ = write!(
            out,
            "{:<5} {:>5.2}  {}",
            idea.readiness_tier.as_str(),
            idea.total_score,
            idea.title
        );
        if let Some(minutes) = idea.total_time_minutes {
            let _ = write!(out, " ({minutes} min)");
        }
        let _ = writeln!(out, "  [{}]", idea.id);
    }
    out
}

pub fn render_idea_detail(idea: &Idea, ingredients: &[IdeaIngredient]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  [{}]", idea.title, idea.id);
    if !idea.prompt.is_empty() {
        let _ = writeln!(out, "Prompt: {}", idea.prompt);
    }
    if let Some(description) = &idea.description {
        let _ = writeln!(out, "{description}");
    }
    let _ = writeln!(
        out,
        "Readiness: {} ({} missing), score {:.2}",
        idea.readiness_tier, idea.missing_count, idea.total_score
    );
    let _ = writeln!(out, "Created: {}", format_timestamp(idea.created_at_ms));

    let _ = writeln!(
        out,
        "Ingredients ({}, {} to buy):",
        ingredients.len(),
        count_missing(ingredients)
    );
    for ingredient in ingredients {
        let mark = if ingredient.is_missing { "-" } else { "+" };
        let _ = write!(out, "  {mark} {}", ingredient.name);
        if let Some(substitutes) = &ingredient.suggested_substitutes {
            let names: Vec<_> = substitutes.iter().map(|s| s.name.as_str()).collect();
            if !names.is_empty() {
                let _ = write!(out, " (or {})", names.join(", "));
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pb_core::idea::ReadinessTier;
    use pb_core::ids::{IdeaId, PantryItemId};

    fn item(id: &str, name: &str) -> PantryItem {
        PantryItem {
            id: PantryItemId::from(id),
            name: name.to_string(),
            canonical_ingredient_id: None,
            quantity: Some(2.0),
            unit: Some("l".to_string()),
            best_before_date: None,
            acquired_at_ms: None,
            updated_at_ms: 0,
            tags: vec!["Dairy".to_string()],
            notes: None,
            freshness_score: None,
            storage: None,
            substitutes: Vec::new(),
        }
    }

    #[test]
    fn test_render_groups() {
        let groups = vec![PantryGroup {
            category: "Dairy".to_string(),
            items: vec![item("m1", "Milk")],
        }];

        assert_eq!(render_groups(&groups), "Dairy (1)\n  Milk (2 l)  [m1]\n");
        assert_eq!(render_groups(&[]), "No pantry items.\n");
    }

    #[test]
    fn test_render_idea_detail_counts_missing() {
        let idea = Idea {
            id: IdeaId::from("i1"),
            prompt: "quick lunch".to_string(),
            title: "Wraps".to_string(),
            description: None,
            created_at_ms: 0,
            updated_at_ms: 0,
            missing_count: 1,
            readiness_tier: ReadinessTier::N1,
            total_score: 0.5,
            score_breakdown: None,
            servings: None,
            total_time_minutes: None,
            difficulty: None,
            allow_substitutions: false,
            thumbnail_url: None,
        };
        let ingredients = vec![
            IdeaIngredient::named("Tortilla"),
            IdeaIngredient::named("Hummus").missing(),
        ];

        let text = render_idea_detail(&idea, &ingredients);

        assert!(text.starts_with("Wraps  [i1]\n"));
        assert!(text.contains("Readiness: N1 (1 missing), score 0.50"));
        assert!(text.contains("Created: 1970-01-01 00:00"));
        assert!(text.contains("Ingredients (2, 1 to buy):"));
        assert!(text.contains("  - Hummus\n"));
    }
}
