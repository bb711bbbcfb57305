use std::sync::Arc;

use anyhow::Result;
use pb_core::ids::PantryItemId;
use pb_core::observe::Snapshots;
use pb_core::pantry::PantryItem;
use pb_core::ports::PantryRepositoryPort;

/// Live list of pantry items, optionally limited to one tag.
pub struct WatchPantryItems {
    pantry_repo: Arc<dyn PantryRepositoryPort>,
}

impl WatchPantryItems {
    pub fn new(pantry_repo: Arc<dyn PantryRepositoryPort>) -> Self {
        Self { pantry_repo }
    }

    #[tracing::instrument(name = "usecase.watch_pantry_items.execute", skip(self))]
    pub async fn execute(&self, tag: Option<&str>) -> Result<Snapshots<Vec<PantryItem>>> {
        match tag.map(str::trim).filter(|t| !t.is_empty()) {
            Some(tag) => self.pantry_repo.watch_by_tag(tag).await,
            None => self.pantry_repo.watch_all().await,
        }
    }
}

/// Live view of a single pantry item.
pub struct WatchPantryItem {
    pantry_repo: Arc<dyn PantryRepositoryPort>,
}

impl WatchPantryItem {
    pub fn new(pantry_repo: Arc<dyn PantryRepositoryPort>) -> Self {
        Self { pantry_repo }
    }

    #[tracing::instrument(name = "usecase.watch_pantry_item.execute", skip(self), fields(id = %id))]
    pub async fn execute(&self, id: &PantryItemId) -> Result<Snapshots<Option<PantryItem>>> {
        self.pantry_repo.watch_item(id).await
    }
}
