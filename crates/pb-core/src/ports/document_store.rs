use async_trait::async_trait;

use super::errors::DocumentStoreError;
use crate::document::{CollectionPath, Document, DocumentPath, Fields, Query, WriteBatch};
use crate::observe::Snapshots;

/// DocumentStorePort
///
/// Access to the document database that owns every pantry and idea record.
///
/// Contract:
/// - Snapshots are immutable; state only changes through [`commit`](Self::commit)
/// - A batch is applied all-or-nothing
/// - Server-timestamp sentinels are resolved with the store's clock on commit
/// - Live queries publish a fresh result after every commit that touches
///   their collection
#[async_trait]
pub trait DocumentStorePort: Send + Sync {
    /// Allocate an id for a new document.
    fn new_document_id(&self) -> String;

    async fn get(&self, path: &DocumentPath) -> Result<Option<Document>, DocumentStoreError>;

    async fn query(&self, query: &Query) -> Result<Vec<Document>, DocumentStoreError>;

    async fn commit(&self, batch: WriteBatch) -> Result<(), DocumentStoreError>;

    /// Live query. The subscription starts with the current result.
    async fn watch_query(&self, query: Query) -> Result<Snapshots<Vec<Document>>, DocumentStoreError>;

    /// Live single document. The subscription starts with the current state.
    async fn watch_document(
        &self,
        path: DocumentPath,
    ) -> Result<Snapshots<Option<Document>>, DocumentStoreError>;

    /// Create a document with a generated id in `collection`.
    async fn add(
        &self,
        collection: &CollectionPath,
        fields: Fields,
    ) -> Result<DocumentPath, DocumentStoreError> {
        let path = collection.doc(self.new_document_id());
        let mut batch = WriteBatch::new();
        batch.set(path.clone(), fields);
        self.commit(batch).await?;
        Ok(path)
    }

    async fn set(
        &self,
        path: &DocumentPath,
        fields: Fields,
        merge: bool,
    ) -> Result<(), DocumentStoreError> {
        let mut batch = WriteBatch::new();
        if merge {
            batch.set_merge(path.clone(), fields);
        } else {
            batch.set(path.clone(), fields);
        }
        self.commit(batch).await
    }

    async fn update(&self, path: &DocumentPath, fields: Fields) -> Result<(), DocumentStoreError> {
        let mut batch = WriteBatch::new();
        batch.update(path.clone(), fields);
        self.commit(batch).await
    }

    async fn delete(&self, path: &DocumentPath) -> Result<(), DocumentStoreError> {
        let mut batch = WriteBatch::new();
        batch.delete(path.clone());
        self.commit(batch).await
    }
}
