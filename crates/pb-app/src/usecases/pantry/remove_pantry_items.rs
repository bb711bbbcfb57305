use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use pb_core::ids::PantryItemId;
use pb_core::ports::PantryRepositoryPort;

pub struct RemovePantryItem {
    pantry_repo: Arc<dyn PantryRepositoryPort>,
}

impl RemovePantryItem {
    pub fn new(pantry_repo: Arc<dyn PantryRepositoryPort>) -> Self {
        Self { pantry_repo }
    }

    #[tracing::instrument(name = "usecase.remove_pantry_item.execute", skip(self), fields(id = %id))]
    pub async fn execute(&self, id: &PantryItemId) -> Result<()> {
        self.pantry_repo.remove(id).await?;
        info!(id = %id, "Pantry item removed");
        Ok(())
    }
}

/// Remove several items at once (one batch).
pub struct RemovePantryItems {
    pantry_repo: Arc<dyn PantryRepositoryPort>,
}

impl RemovePantryItems {
    pub fn new(pantry_repo: Arc<dyn PantryRepositoryPort>) -> Self {
        Self { pantry_repo }
    }

    #[tracing::instrument(name = "usecase.remove_pantry_items.execute", skip_all, fields(count = ids.len()))]
    pub async fn execute(&self, ids: &[PantryItemId]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }
        self.pantry_repo.remove_many(ids).await?;
        info!(count = ids.len(), "Pantry items removed");
        Ok(())
    }
}
