use std::sync::Arc;

use anyhow::Result;

use pb_core::idea::{Idea, IdeaIngredient};
use pb_core::ids::IdeaId;
use pb_core::observe::Snapshots;
use pb_core::ports::IdeaRepositoryPort;

/// Live detail view of one idea.
pub struct IdeaDetail {
    pub idea: Snapshots<Option<Idea>>,
    /// Ordered by name.
    pub ingredients: Snapshots<Vec<IdeaIngredient>>,
}

pub struct GetIdeaDetail {
    idea_repo: Arc<dyn IdeaRepositoryPort>,
}

impl GetIdeaDetail {
    pub fn new(idea_repo: Arc<dyn IdeaRepositoryPort>) -> Self {
        Self { idea_repo }
    }

    #[tracing::instrument(name = "usecase.get_idea_detail.execute", skip(self), fields(id = %id))]
    pub async fn execute(&self, id: &IdeaId) -> Result<IdeaDetail> {
        let idea = self.idea_repo.watch_idea(id).await?;
        let ingredients = self.idea_repo.watch_ingredients(id).await?;
        Ok(IdeaDetail { idea, ingredients })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::ideas::test_support::{idea, FakeIdeaRepo};

    #[tokio::test]
    async fn test_detail_of_unknown_idea_is_empty() {
        let repo = Arc::new(FakeIdeaRepo::with_ideas(vec![idea("a", "A", 0, None)]));

        let detail = GetIdeaDetail::new(repo)
            .execute(&IdeaId::from("missing"))
            .await
            .unwrap();

        assert!(detail.idea.latest().is_none());
    }

    #[tokio::test]
    async fn test_detail_carries_idea_and_ingredients() {
        let mut repo = FakeIdeaRepo::with_ideas(vec![idea("a", "Omelette", 1, None)]);
        repo.ingredients = vec![
            IdeaIngredient::named("Eggs"),
            IdeaIngredient::named("Chives").missing(),
        ];

        let detail = GetIdeaDetail::new(Arc::new(repo))
            .execute(&IdeaId::from("a"))
            .await
            .unwrap();

        assert_eq!(detail.idea.latest().unwrap().title, "Omelette");
        assert_eq!(detail.ingredients.latest().len(), 2);
    }
}
