use std::sync::Arc;

use anyhow::Result;

use pb_core::idea::pantry_name_suggestions;
use pb_core::observe::Snapshots;
use pb_core::ports::PantryRepositoryPort;

/// Pantry item names offered while picking a star ingredient.
pub struct WatchPantrySuggestions {
    pantry_repo: Arc<dyn PantryRepositoryPort>,
}

impl WatchPantrySuggestions {
    pub fn new(pantry_repo: Arc<dyn PantryRepositoryPort>) -> Self {
        Self { pantry_repo }
    }

    #[tracing::instrument(name = "usecase.watch_pantry_suggestions.execute", skip(self))]
    pub async fn execute(&self) -> Result<Snapshots<Vec<String>>> {
        let items = self.pantry_repo.watch_all().await?;
        Ok(items.map(|items| pantry_name_suggestions(items)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::pantry::test_support::{item, MockPantryRepo};

    #[tokio::test]
    async fn test_names_trimmed_sorted_without_blanks() {
        let mut repo = MockPantryRepo::new();
        repo.expect_watch_all().returning(|| {
            Ok(Snapshots::once(vec![
                item("1", " Tomato ", None),
                item("2", "   ", None),
                item("3", "Basil", Some("Spices")),
            ]))
        });

        let names = WatchPantrySuggestions::new(Arc::new(repo))
            .execute()
            .await
            .unwrap()
            .latest();

        assert_eq!(names, vec!["Basil".to_string(), "Tomato".to_string()]);
    }
}
