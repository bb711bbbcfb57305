use anyhow::Result;
use async_trait::async_trait;

use crate::ids::PantryItemId;
use crate::observe::Snapshots;
use crate::pantry::{NewPantryItem, PantryItem, PantryItemPatch};

/// PantryRepositoryPort
///
/// Pantry item documents (`pantryItems`). Every write stamps `updatedAt`
/// with the store's server time.
#[async_trait]
pub trait PantryRepositoryPort: Send + Sync {
    /// All items, ordered by name.
    async fn watch_all(&self) -> Result<Snapshots<Vec<PantryItem>>>;

    /// Items tagged with `tag`, ordered by name.
    async fn watch_by_tag(&self, tag: &str) -> Result<Snapshots<Vec<PantryItem>>>;

    async fn watch_item(&self, id: &PantryItemId) -> Result<Snapshots<Option<PantryItem>>>;

    async fn add(&self, item: NewPantryItem) -> Result<PantryItemId>;

    /// Merge the patch into the item, creating it when absent.
    async fn upsert(&self, id: &PantryItemId, patch: PantryItemPatch) -> Result<()>;

    /// Patch an existing item. Fails when the item does not exist.
    async fn update(&self, id: &PantryItemId, patch: PantryItemPatch) -> Result<()>;

    async fn remove(&self, id: &PantryItemId) -> Result<()>;

    /// Remove several items in one batch. An empty list is a no-op.
    async fn remove_many(&self, ids: &[PantryItemId]) -> Result<()>;

    /// Keep the `n` most recently updated items and delete the rest of the
    /// scanned window. Returns how many items were deleted.
    async fn keep_latest(&self, n: usize) -> Result<usize>;
}
