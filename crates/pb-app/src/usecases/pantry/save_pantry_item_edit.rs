use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use pb_core::ids::PantryItemId;
use pb_core::pantry::{Category, PantryItemPatch};
use pb_core::ports::PantryRepositoryPort;

/// Save an inline edit: the item is renamed and its tags replaced by the
/// chosen category.
pub struct SavePantryItemEdit {
    pantry_repo: Arc<dyn PantryRepositoryPort>,
}

impl SavePantryItemEdit {
    pub fn new(pantry_repo: Arc<dyn PantryRepositoryPort>) -> Self {
        Self { pantry_repo }
    }

    /// Returns `false` without writing when the trimmed name is empty.
    /// Fails when the item no longer exists.
    #[tracing::instrument(
        name = "usecase.save_pantry_item_edit.execute",
        skip(self),
        fields(id = %id)
    )]
    pub async fn execute(&self, id: &PantryItemId, name: &str, category: Category) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            debug!("Ignoring edit with blank name");
            return Ok(false);
        }

        self.pantry_repo
            .update(id, PantryItemPatch::rename_and_categorize(name, category))
            .await?;
        Ok(true)
    }
}
