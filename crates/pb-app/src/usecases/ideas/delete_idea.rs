use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use pb_core::ids::IdeaId;
use pb_core::ports::{DeleteIdeaOptions, IdeaRepositoryPort};

pub struct DeleteIdea {
    idea_repo: Arc<dyn IdeaRepositoryPort>,
}

impl DeleteIdea {
    pub fn new(idea_repo: Arc<dyn IdeaRepositoryPort>) -> Self {
        Self { idea_repo }
    }

    #[tracing::instrument(name = "usecase.delete_idea.execute", skip(self), fields(id = %id))]
    pub async fn execute(&self, id: &IdeaId, options: DeleteIdeaOptions) -> Result<()> {
        self.idea_repo.delete_idea(id, options).await?;
        info!(id = %id, with_ingredients = options.delete_ingredients, "Idea deleted");
        Ok(())
    }
}
