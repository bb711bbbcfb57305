use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, info};

use pb_core::config::StoreLimits;
use pb_core::document::{
    decode_all, decode_lenient, encode, server_timestamp, CollectionPath, Direction, DocumentPath,
    Fields, Query, WriteBatch, IDEAS, INGREDIENTS,
};
use pb_core::idea::{Idea, IdeaDraft, IdeaIngredient};
use pb_core::ids::{IdeaId, IngredientId};
use pb_core::observe::Snapshots;
use pb_core::ports::{DeleteIdeaOptions, DocumentStorePort, IdeaListOptions, IdeaRepositoryPort};

const CREATED_AT: &str = "createdAt";
const UPDATED_AT: &str = "updatedAt";

/// Ideas stored as `ideas/{id}` with ingredients in `ideas/{id}/ingredients`.
pub struct DocumentIdeaRepository {
    store: Arc<dyn DocumentStorePort>,
    limits: StoreLimits,
}

impl DocumentIdeaRepository {
    pub fn new(store: Arc<dyn DocumentStorePort>, limits: StoreLimits) -> Self {
        Self { store, limits }
    }

    fn collection() -> CollectionPath {
        CollectionPath::root(IDEAS)
    }

    fn path(id: &IdeaId) -> DocumentPath {
        Self::collection().doc(id.as_str())
    }

    fn ingredients(id: &IdeaId) -> CollectionPath {
        Self::path(id).sub_collection(INGREDIENTS)
    }

    /// Field map written for an idea. The raw missing count is classified;
    /// `createdAt` is only stamped when the draft has none and the idea is new.
    fn idea_fields(draft: &IdeaDraft, is_new: bool) -> Result<Fields> {
        let readiness = draft.readiness();
        let mut fields = encode(draft)?;
        fields.insert("missingCount".to_string(), json!(readiness.stored_count));
        fields.insert("readinessTier".to_string(), json!(readiness.tier.as_str()));
        if draft.created_at_ms.is_none() && is_new {
            fields.insert(CREATED_AT.to_string(), server_timestamp());
        }
        fields.insert(UPDATED_AT.to_string(), server_timestamp());
        Ok(fields)
    }

    fn ingredient_id(&self, ingredient: &IdeaIngredient) -> IngredientId {
        match &ingredient.id {
            Some(id) if !id.as_str().is_empty() => id.clone(),
            _ => IngredientId::from(self.store.new_document_id()),
        }
    }
}

#[async_trait]
impl IdeaRepositoryPort for DocumentIdeaRepository {
    async fn watch_ideas(&self, options: IdeaListOptions) -> Result<Snapshots<Vec<Idea>>> {
        let mut query = Query::collection(Self::collection());
        if let Some(tier) = options.tier {
            query = query.where_eq("readinessTier", tier.as_str());
        }
        query = query
            .order_by("totalScore", Direction::Desc)
            .order_by(CREATED_AT, Direction::Desc);
        if let Some(limit) = options.limit {
            query = query.limit(limit);
        }

        let docs = self.store.watch_query(query).await?;
        Ok(docs.map(|docs| decode_all::<Idea>(docs)))
    }

    async fn watch_idea(&self, id: &IdeaId) -> Result<Snapshots<Option<Idea>>> {
        let doc = self.store.watch_document(Self::path(id)).await?;
        Ok(doc.map(|doc| doc.as_ref().and_then(decode_lenient::<Idea>)))
    }

    async fn watch_ingredients(&self, id: &IdeaId) -> Result<Snapshots<Vec<IdeaIngredient>>> {
        let docs = self
            .store
            .watch_query(Query::collection(Self::ingredients(id)).order_by("name", Direction::Asc))
            .await?;
        Ok(docs.map(|docs| decode_all::<IdeaIngredient>(docs)))
    }

    async fn upsert_idea_with_ingredients(
        &self,
        id: Option<&IdeaId>,
        draft: IdeaDraft,
        ingredients: Vec<IdeaIngredient>,
    ) -> Result<IdeaId> {
        let (id, is_new) = match id {
            Some(id) => (id.clone(), self.store.get(&Self::path(id)).await?.is_none()),
            None => (IdeaId::from(self.store.new_document_id()), true),
        };

        let mut batch = WriteBatch::new();
        batch.set_merge(Self::path(&id), Self::idea_fields(&draft, is_new)?);

        let sub = Self::ingredients(&id);
        for ingredient in &ingredients {
            let ingredient_id = self.ingredient_id(ingredient);
            batch.set_merge(sub.doc(ingredient_id.as_str()), encode(ingredient)?);
        }
        self.store.commit(batch).await?;

        debug!(id = %id, is_new, ingredients = ingredients.len(), "Idea saved");
        Ok(id)
    }

    async fn replace_ingredients(&self, id: &IdeaId, ingredients: Vec<IdeaIngredient>) -> Result<()> {
        let sub = Self::ingredients(id);
        let existing = self.store.query(&Query::collection(sub.clone())).await?;

        let mut batch = WriteBatch::new();
        for doc in existing {
            batch.delete(doc.path);
        }
        for ingredient in &ingredients {
            let ingredient_id = self.ingredient_id(ingredient);
            batch.set(sub.doc(ingredient_id.as_str()), encode(ingredient)?);
        }
        // Fails the whole batch when the idea itself is gone.
        let mut touch = Fields::new();
        touch.insert(UPDATED_AT.to_string(), server_timestamp());
        batch.update(Self::path(id), touch);

        self.store.commit(batch).await?;
        debug!(id = %id, ingredients = ingredients.len(), "Idea ingredients replaced");
        Ok(())
    }

    async fn delete_idea(&self, id: &IdeaId, options: DeleteIdeaOptions) -> Result<()> {
        let mut batch = WriteBatch::new();
        if options.delete_ingredients {
            let page = self
                .store
                .query(&Query::collection(Self::ingredients(id)).limit(self.limits.ingredient_page_size))
                .await?;
            for doc in page {
                batch.delete(doc.path);
            }
        }
        batch.delete(Self::path(id));
        self.store.commit(batch).await?;
        Ok(())
    }

    async fn keep_latest(&self, n: usize) -> Result<usize> {
        let newest = self
            .store
            .query(
                &Query::collection(Self::collection())
                    .order_by(CREATED_AT, Direction::Desc)
                    .limit(self.limits.keep_latest_scan_limit),
            )
            .await?;

        let mut batch = WriteBatch::new();
        for doc in newest.into_iter().skip(n) {
            batch.delete(doc.path);
        }
        let removed = batch.len();
        self.store.commit(batch).await?;

        info!(kept = n, removed, "Pruned ideas");
        Ok(removed)
    }
}
