use anyhow::Result;
use async_trait::async_trait;

use crate::idea::{Idea, IdeaDraft, IdeaIngredient, ReadinessTier};
use crate::ids::IdeaId;
use crate::observe::Snapshots;

/// Options of the idea list query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdeaListOptions {
    pub tier: Option<ReadinessTier>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteIdeaOptions {
    /// Also delete (one page of) the idea's ingredient documents.
    pub delete_ingredients: bool,
}

/// IdeaRepositoryPort
///
/// Idea documents (`ideas`) and their `ingredients` sub-collection.
///
/// Writes of an idea always run the readiness classifier first: the stored
/// `missingCount` is clamped to `0..=2` and `readinessTier` derived from it.
#[async_trait]
pub trait IdeaRepositoryPort: Send + Sync {
    /// Ideas ordered by `totalScore` desc, then `createdAt` desc.
    async fn watch_ideas(&self, options: IdeaListOptions) -> Result<Snapshots<Vec<Idea>>>;

    async fn watch_idea(&self, id: &IdeaId) -> Result<Snapshots<Option<Idea>>>;

    /// Ingredients of an idea ordered by name.
    async fn watch_ingredients(&self, id: &IdeaId) -> Result<Snapshots<Vec<IdeaIngredient>>>;

    /// Merge the idea and each ingredient in one batch. `None` creates a new
    /// idea. Ingredients not listed are left untouched.
    async fn upsert_idea_with_ingredients(
        &self,
        id: Option<&IdeaId>,
        draft: IdeaDraft,
        ingredients: Vec<IdeaIngredient>,
    ) -> Result<IdeaId>;

    /// Replace the whole ingredient set: existing ingredient documents are
    /// deleted and `ingredients` written, in one batch.
    async fn replace_ingredients(&self, id: &IdeaId, ingredients: Vec<IdeaIngredient>) -> Result<()>;

    async fn delete_idea(&self, id: &IdeaId, options: DeleteIdeaOptions) -> Result<()>;

    /// Keep the `n` newest ideas by `createdAt` and delete the rest of the
    /// scanned window. Returns how many ideas were deleted.
    async fn keep_latest(&self, n: usize) -> Result<usize>;
}
