//! In-memory idea repository used by the idea use case tests.

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use pb_core::idea::{Idea, IdeaDraft, IdeaIngredient, ReadinessTier};
use pb_core::ids::IdeaId;
use pb_core::observe::Snapshots;
use pb_core::ports::{DeleteIdeaOptions, IdeaListOptions, IdeaRepositoryPort};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Upsert {
        id: Option<IdeaId>,
        draft: IdeaDraft,
        ingredients: Vec<IdeaIngredient>,
    },
    Replace {
        id: IdeaId,
        ingredients: Vec<IdeaIngredient>,
    },
    Delete {
        id: IdeaId,
        options: DeleteIdeaOptions,
    },
    KeepLatest(usize),
    WatchIdeas(IdeaListOptions),
}

#[derive(Default)]
pub struct FakeIdeaRepo {
    pub ideas: Vec<Idea>,
    pub ingredients: Vec<IdeaIngredient>,
    pub calls: Mutex<Vec<Call>>,
    pub fail_writes: bool,
}

impl FakeIdeaRepo {
    pub fn with_ideas(ideas: Vec<Idea>) -> Self {
        Self {
            ideas,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail_writes {
            return Err(anyhow::anyhow!("store unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl IdeaRepositoryPort for FakeIdeaRepo {
    async fn watch_ideas(&self, options: IdeaListOptions) -> Result<Snapshots<Vec<Idea>>> {
        self.calls.lock().unwrap().push(Call::WatchIdeas(options));
        Ok(Snapshots::once(self.ideas.clone()))
    }

    async fn watch_idea(&self, id: &IdeaId) -> Result<Snapshots<Option<Idea>>> {
        Ok(Snapshots::once(self.ideas.iter().find(|i| &i.id == id).cloned()))
    }

    async fn watch_ingredients(&self, _id: &IdeaId) -> Result<Snapshots<Vec<IdeaIngredient>>> {
        Ok(Snapshots::once(self.ingredients.clone()))
    }

    async fn upsert_idea_with_ingredients(
        &self,
        id: Option<&IdeaId>,
        draft: IdeaDraft,
        ingredients: Vec<IdeaIngredient>,
    ) -> Result<IdeaId> {
        let resolved = id.cloned().unwrap_or_else(|| IdeaId::from("generated"));
        self.record(Call::Upsert {
            id: id.cloned(),
            draft,
            ingredients,
        })?;
        Ok(resolved)
    }

    async fn replace_ingredients(&self, id: &IdeaId, ingredients: Vec<IdeaIngredient>) -> Result<()> {
        self.record(Call::Replace {
            id: id.clone(),
            ingredients,
        })
    }

    async fn delete_idea(&self, id: &IdeaId, options: DeleteIdeaOptions) -> Result<()> {
        self.record(Call::Delete {
            id: id.clone(),
            options,
        })
    }

    async fn keep_latest(&self, n: usize) -> Result<usize> {
        self.record(Call::KeepLatest(n))?;
        Ok(self.ideas.len().saturating_sub(n))
    }
}

pub fn idea(id: &str, title: &str, missing: u32, minutes: Option<u32>) -> Idea {
    let tier = match missing {
        0 => ReadinessTier::Ready,
        1 => ReadinessTier::N1,
        _ => ReadinessTier::N2,
    };
    Idea {
        id: IdeaId::from(id),
        prompt: String::new(),
        title: title.to_string(),
        description: None,
        created_at_ms: 0,
        updated_at_ms: 0,
        missing_count: missing,
        readiness_tier: tier,
        total_score: 0.0,
        score_breakdown: None,
        servings: None,
        total_time_minutes: minutes,
        difficulty: None,
        allow_substitutions: false,
        thumbnail_url: None,
    }
}
