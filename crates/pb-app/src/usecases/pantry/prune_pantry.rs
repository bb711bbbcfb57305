use std::sync::Arc;

use anyhow::Result;

use pb_core::ports::PantryRepositoryPort;

/// Keep only the most recently updated pantry items.
pub struct PrunePantry {
    pantry_repo: Arc<dyn PantryRepositoryPort>,
}

impl PrunePantry {
    pub fn new(pantry_repo: Arc<dyn PantryRepositoryPort>) -> Self {
        Self { pantry_repo }
    }

    /// Returns the number of deleted items.
    #[tracing::instrument(name = "usecase.prune_pantry.execute", skip(self))]
    pub async fn execute(&self, keep: usize) -> Result<usize> {
        self.pantry_repo.keep_latest(keep).await
    }
}
