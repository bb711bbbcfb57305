use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info};

use pb_core::config::StoreLimits;
use pb_core::document::{
    decode_all, decode_lenient, encode, server_timestamp, CollectionPath, Direction, DocumentPath,
    Fields, Query, WriteBatch, PANTRY_ITEMS,
};
use pb_core::ids::PantryItemId;
use pb_core::observe::Snapshots;
use pb_core::pantry::{NewPantryItem, PantryItem, PantryItemPatch};
use pb_core::ports::{DocumentStorePort, PantryRepositoryPort};

const UPDATED_AT: &str = "updatedAt";

/// Pantry items stored as `pantryItems/{id}` documents.
pub struct DocumentPantryRepository {
    store: Arc<dyn DocumentStorePort>,
    limits: StoreLimits,
}

impl DocumentPantryRepository {
    pub fn new(store: Arc<dyn DocumentStorePort>, limits: StoreLimits) -> Self {
        Self { store, limits }
    }

    fn collection() -> CollectionPath {
        CollectionPath::root(PANTRY_ITEMS)
    }

    fn path(id: &PantryItemId) -> DocumentPath {
        Self::collection().doc(id.as_str())
    }

    fn stamped(mut fields: Fields) -> Fields {
        fields.insert(UPDATED_AT.to_string(), server_timestamp());
        fields
    }

    async fn watch_items(&self, query: Query) -> Result<Snapshots<Vec<PantryItem>>> {
        let docs = self.store.watch_query(query).await?;
        Ok(docs.map(|docs| decode_all::<PantryItem>(docs)))
    }
}

#[async_trait]
impl PantryRepositoryPort for DocumentPantryRepository {
    async fn watch_all(&self) -> Result<Snapshots<Vec<PantryItem>>> {
        self.watch_items(Query::collection(Self::collection()).order_by("name", Direction::Asc))
            .await
    }

    async fn watch_by_tag(&self, tag: &str) -> Result<Snapshots<Vec<PantryItem>>> {
        self.watch_items(
            Query::collection(Self::collection())
                .where_array_contains("tags", tag)
                .order_by("name", Direction::Asc),
        )
        .await
    }

    async fn watch_item(&self, id: &PantryItemId) -> Result<Snapshots<Option<PantryItem>>> {
        let doc = self.store.watch_document(Self::path(id)).await?;
        Ok(doc.map(|doc| doc.as_ref().and_then(decode_lenient::<PantryItem>)))
    }

    async fn add(&self, item: NewPantryItem) -> Result<PantryItemId> {
        let path = self
            .store
            .add(&Self::collection(), Self::stamped(encode(&item)?))
            .await?;
        let id = PantryItemId::from(path.id());
        debug!(id = %id, name = %item.name, "Pantry item added");
        Ok(id)
    }

    async fn upsert(&self, id: &PantryItemId, patch: PantryItemPatch) -> Result<()> {
        self.store
            .set(&Self::path(id), Self::stamped(encode(&patch)?), true)
            .await?;
        Ok(())
    }

    async fn update(&self, id: &PantryItemId, patch: PantryItemPatch) -> Result<()> {
        self.store
            .update(&Self::path(id), Self::stamped(encode(&patch)?))
            .await?;
        Ok(())
    }

    async fn remove(&self, id: &PantryItemId) -> Result<()> {
        self.store.delete(&Self::path(id)).await?;
        Ok(())
    }

    async fn remove_many(&self, ids: &[PantryItemId]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }
        let mut batch = WriteBatch::new();
        for id in ids {
            batch.delete(Self::path(id));
        }
        self.store.commit(batch).await?;
        Ok(())
    }

    async fn keep_latest(&self, n: usize) -> Result<usize> {
        let newest = self
            .store
            .query(
                &Query::collection(Self::collection())
                    .order_by(UPDATED_AT, Direction::Desc)
                    .limit(self.limits.keep_latest_scan_limit),
            )
            .await?;

        let mut batch = WriteBatch::new();
        for doc in newest.into_iter().skip(n) {
            batch.delete(doc.path);
        }
        let removed = batch.len();
        self.store.commit(batch).await?;

        info!(kept = n, removed, "Pruned pantry items");
        Ok(removed)
    }
}
