use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use pb_core::ids::PantryItemId;
use pb_core::pantry::{Category, NewPantryItem};
use pb_core::ports::PantryRepositoryPort;

/// Add a pantry item from the quick-add row: a name and a category.
/// 从快速添加行添加食品柜条目。
pub struct QuickAddPantryItem {
    pantry_repo: Arc<dyn PantryRepositoryPort>,
}

impl QuickAddPantryItem {
    pub fn new(pantry_repo: Arc<dyn PantryRepositoryPort>) -> Self {
        Self { pantry_repo }
    }

    /// Returns `None` without writing when the trimmed name is empty.
    #[tracing::instrument(name = "usecase.quick_add_pantry_item.execute", skip(self))]
    pub async fn execute(&self, name: &str, category: Category) -> Result<Option<PantryItemId>> {
        let name = name.trim();
        if name.is_empty() {
            debug!("Ignoring quick add with blank name");
            return Ok(None);
        }

        let id = self
            .pantry_repo
            .add(NewPantryItem::named(name).in_category(category))
            .await?;
        info!(id = %id, "Pantry item added");
        Ok(Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::pantry::test_support::MockPantryRepo;

    #[tokio::test]
    async fn test_adds_trimmed_name_with_category_tag() {
        let mut repo = MockPantryRepo::new();
        repo.expect_add()
            .withf(|item| item.name == "Basil" && item.tags == vec!["Spices".to_string()])
            .times(1)
            .returning(|_| Ok(PantryItemId::from("new-id")));

        let uc = QuickAddPantryItem::new(Arc::new(repo));
        let id = uc.execute("  Basil ", Category::Spices).await.unwrap();

        assert_eq!(id, Some(PantryItemId::from("new-id")));
    }

    #[tokio::test]
    async fn test_blank_name_is_a_no_op() {
        let mut repo = MockPantryRepo::new();
        repo.expect_add().never();

        let uc = QuickAddPantryItem::new(Arc::new(repo));

        assert_eq!(uc.execute("   ", Category::Other).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let mut repo = MockPantryRepo::new();
        repo.expect_add()
            .returning(|_| Err(anyhow::anyhow!("permission denied")));

        let uc = QuickAddPantryItem::new(Arc::new(repo));
        let err = uc.execute("Salt", Category::Spices).await.unwrap_err();

        assert!(err.to_string().contains("permission denied"));
    }
}
