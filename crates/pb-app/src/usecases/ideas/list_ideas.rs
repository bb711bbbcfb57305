use std::sync::Arc;

use anyhow::Result;

use pb_core::idea::{Idea, IdeaFilters};
use pb_core::observe::{combine_latest, Snapshots};
use pb_core::ports::{IdeaListOptions, IdeaRepositoryPort};

/// Live list of ideas, best score first.
/// 实时菜谱创意列表（按得分排序）。
pub struct ListIdeas {
    idea_repo: Arc<dyn IdeaRepositoryPort>,
}

impl ListIdeas {
    pub fn new(idea_repo: Arc<dyn IdeaRepositoryPort>) -> Self {
        Self { idea_repo }
    }

    #[tracing::instrument(name = "usecase.list_ideas.execute", skip(self))]
    pub async fn execute(&self, options: IdeaListOptions) -> Result<Snapshots<Vec<Idea>>> {
        self.idea_repo.watch_ideas(options).await
    }

    /// Same list narrowed by the user's current filter preferences. The
    /// result follows both the stored ideas and `filters`.
    #[tracing::instrument(name = "usecase.list_ideas.execute_filtered", skip(self, filters))]
    pub async fn execute_filtered(
        &self,
        options: IdeaListOptions,
        filters: Snapshots<IdeaFilters>,
    ) -> Result<Snapshots<Vec<Idea>>> {
        let ideas = self.idea_repo.watch_ideas(options).await?;
        Ok(combine_latest(ideas, filters, |ideas, filters| {
            ideas
                .iter()
                .filter(|idea| filters.admits(idea))
                .cloned()
                .collect()
        }))
    }
}
