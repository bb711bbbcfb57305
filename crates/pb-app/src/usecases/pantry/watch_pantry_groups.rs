use std::sync::Arc;

use anyhow::Result;
use pb_core::observe::{combine_latest, Snapshots};
use pb_core::pantry::{group_pantry_items, PantryGroup};
use pb_core::ports::PantryRepositoryPort;

/// Grouped pantry view that follows both the stored items and the search box.
/// 根据存储项与搜索框实时分组的食品柜视图。
pub struct WatchPantryGroups {
    pantry_repo: Arc<dyn PantryRepositoryPort>,
}

impl WatchPantryGroups {
    pub fn new(pantry_repo: Arc<dyn PantryRepositoryPort>) -> Self {
        Self { pantry_repo }
    }

    /// Groups are recomputed whenever the items or the search text change.
    /// Dropping the returned subscription stops both upstreams.
    #[tracing::instrument(name = "usecase.watch_pantry_groups.execute", skip_all)]
    pub async fn execute(&self, search: Snapshots<String>) -> Result<Snapshots<Vec<PantryGroup>>> {
        let items = self.pantry_repo.watch_all().await?;
        Ok(combine_latest(items, search, |items, query| {
            group_pantry_items(items, query)
        }))
    }
}
