use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use pb_core::idea::{IdeaDraft, IdeaIngredient};
use pb_core::ids::IdeaId;
use pb_core::ports::IdeaRepositoryPort;

/// Create or update an idea together with its ingredients.
/// 创建或更新菜谱创意及其食材。
///
/// The repository classifies the draft's raw missing count before writing.
/// Ingredients are merged; use [`ReplaceIdeaIngredients`](super::ReplaceIdeaIngredients)
/// to drop ingredients that are no longer listed.
pub struct SaveIdea {
    idea_repo: Arc<dyn IdeaRepositoryPort>,
}

impl SaveIdea {
    pub fn new(idea_repo: Arc<dyn IdeaRepositoryPort>) -> Self {
        Self { idea_repo }
    }

    /// Returns the idea id, or `None` when both title and prompt are blank
    /// and nothing was written.
    #[tracing::instrument(
        name = "usecase.save_idea.execute",
        skip(self, draft, ingredients),
        fields(id = ?id, ingredients = ingredients.len())
    )]
    pub async fn execute(
        &self,
        id: Option<&IdeaId>,
        mut draft: IdeaDraft,
        ingredients: Vec<IdeaIngredient>,
    ) -> Result<Option<IdeaId>> {
        if draft.is_blank() {
            debug!("Ignoring idea with blank title and prompt");
            return Ok(None);
        }
        draft.title = draft.title.trim().to_string();
        draft.prompt = draft.prompt.trim().to_string();

        let tier = draft.readiness().tier;
        let saved = self
            .idea_repo
            .upsert_idea_with_ingredients(id, draft, ingredients)
            .await?;
        info!(id = %saved, tier = %tier, "Idea saved");
        Ok(Some(saved))
    }
}
