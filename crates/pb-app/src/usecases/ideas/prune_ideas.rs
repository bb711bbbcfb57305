use std::sync::Arc;

use anyhow::Result;

use pb_core::ports::IdeaRepositoryPort;

/// Keep only the newest ideas.
pub struct PruneIdeas {
    idea_repo: Arc<dyn IdeaRepositoryPort>,
}

impl PruneIdeas {
    pub fn new(idea_repo: Arc<dyn IdeaRepositoryPort>) -> Self {
        Self { idea_repo }
    }

    #[tracing::instrument(name = "usecase.prune_ideas.execute", skip(self))]
    pub async fn execute(&self, keep: usize) -> Result<usize> {
        self.idea_repo.keep_latest(keep).await
    }
}
