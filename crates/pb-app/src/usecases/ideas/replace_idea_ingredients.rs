use std::sync::Arc;

use anyhow::Result;

use pb_core::idea::IdeaIngredient;
use pb_core::ids::IdeaId;
use pb_core::ports::IdeaRepositoryPort;

/// Replace the full ingredient list of an existing idea.
pub struct ReplaceIdeaIngredients {
    idea_repo: Arc<dyn IdeaRepositoryPort>,
}

impl ReplaceIdeaIngredients {
    pub fn new(idea_repo: Arc<dyn IdeaRepositoryPort>) -> Self {
        Self { idea_repo }
    }

    /// Blank ingredient names are dropped before writing.
    #[tracing::instrument(
        name = "usecase.replace_idea_ingredients.execute",
        skip(self, ingredients),
        fields(id = %id)
    )]
    pub async fn execute(&self, id: &IdeaId, ingredients: Vec<IdeaIngredient>) -> Result<()> {
        let ingredients = ingredients
            .into_iter()
            .filter_map(|mut ingredient| {
                ingredient.name = ingredient.name.trim().to_string();
                (!ingredient.name.is_empty()).then_some(ingredient)
            })
            .collect();
        self.idea_repo.replace_ingredients(id, ingredients).await
    }
}
