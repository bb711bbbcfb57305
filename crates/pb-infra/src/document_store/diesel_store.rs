//! SQLite-backed document store.
//!
//! Documents are rows of `documents(collection, doc_id, data)` with the field
//! map stored as JSON. Queries load the collection and evaluate the
//! [`Query`] in memory. A batch runs inside one transaction; after it commits
//! every touched collection is announced on a broadcast channel so live
//! queries can re-run.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{Connection, ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, warn};

use pb_core::document::{CollectionPath, Document, DocumentPath, Query, WriteBatch};
use pb_core::observe::Snapshots;
use pb_core::ports::{ClockPort, DocumentStoreError, DocumentStorePort};

use crate::db::mappers::DocumentRowMapper;
use crate::db::models::DocumentRow;
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::documents;

const CHANGE_CHANNEL_CAPACITY: usize = 256;

pub struct DieselDocumentStore<E> {
    inner: Arc<Inner<E>>,
}

struct Inner<E> {
    executor: E,
    mapper: DocumentRowMapper,
    clock: Arc<dyn ClockPort>,
    changes: broadcast::Sender<CollectionPath>,
}

impl<E> Clone for DieselDocumentStore<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: DbExecutor + 'static> DieselDocumentStore<E> {
    pub fn new(executor: E, clock: Arc<dyn ClockPort>) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                executor,
                mapper: DocumentRowMapper,
                clock,
                changes,
            }),
        }
    }
}

/// Surface typed store errors raised inside a transaction; anything else is
/// a storage failure.
fn into_store_error(err: anyhow::Error) -> DocumentStoreError {
    match err.downcast::<DocumentStoreError>() {
        Ok(store_err) => store_err,
        Err(other) => DocumentStoreError::Storage(format!("{other:#}")),
    }
}

impl<E: DbExecutor> Inner<E> {
    fn load_document(&self, path: &DocumentPath) -> Result<Option<Document>, DocumentStoreError> {
        self.executor
            .run(|conn| {
                let row = documents::table
                    .filter(documents::collection.eq(path.collection().as_str()))
                    .filter(documents::doc_id.eq(path.id()))
                    .first::<DocumentRow>(conn)
                    .optional()?;
                row.map(|row| self.mapper.to_domain(&row)).transpose()
            })
            .map_err(into_store_error)
    }

    fn load_collection(&self, collection: &CollectionPath) -> Result<Vec<Document>, DocumentStoreError> {
        self.executor
            .run(|conn| {
                let rows = documents::table
                    .filter(documents::collection.eq(collection.as_str()))
                    .load::<DocumentRow>(conn)?;
                rows.iter().map(|row| self.mapper.to_domain(row)).collect()
            })
            .map_err(into_store_error)
    }

    fn run_query(&self, query: &Query) -> Result<Vec<Document>, DocumentStoreError> {
        Ok(query.apply(self.load_collection(&query.collection)?))
    }

    fn commit(&self, batch: &WriteBatch) -> Result<(), DocumentStoreError> {
        let now_ms = self.clock.now_ms();

        self.executor
            .run(|conn| {
                conn.transaction::<_, anyhow::Error, _>(|conn| {
                    for op in batch.ops() {
                        let path = op.path();
                        let collection = path.collection().as_str();

                        let existing = documents::table
                            .filter(documents::collection.eq(collection))
                            .filter(documents::doc_id.eq(path.id()))
                            .first::<DocumentRow>(conn)
                            .optional()?
                            .map(|row| self.mapper.to_domain(&row))
                            .transpose()?
                            .map(|doc| doc.fields);

                        match op.apply(existing, now_ms)? {
                            Some(fields) => {
                                let row = self.mapper.to_row(&Document::new(path.clone(), fields))?;
                                diesel::replace_into(documents::table)
                                    .values(&row)
                                    .execute(conn)?;
                            }
                            None => {
                                diesel::delete(
                                    documents::table
                                        .filter(documents::collection.eq(collection))
                                        .filter(documents::doc_id.eq(path.id())),
                                )
                                .execute(conn)?;
                            }
                        }
                    }
                    Ok(())
                })
            })
            .map_err(into_store_error)?;

        for collection in batch.touched_collections() {
            // No receivers simply means nobody is watching.
            let _ = self.changes.send(collection);
        }
        Ok(())
    }
}

#[async_trait]
impl<E: DbExecutor + 'static> DocumentStorePort for DieselDocumentStore<E> {
    fn new_document_id(&self) -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }

    async fn get(&self, path: &DocumentPath) -> Result<Option<Document>, DocumentStoreError> {
        self.inner.load_document(path)
    }

    async fn query(&self, query: &Query) -> Result<Vec<Document>, DocumentStoreError> {
        self.inner.run_query(query)
    }

    async fn commit(&self, batch: WriteBatch) -> Result<(), DocumentStoreError> {
        if batch.is_empty() {
            return Ok(());
        }
        debug!(ops = batch.len(), "Committing write batch");
        self.inner.commit(&batch)
    }

    async fn watch_query(&self, query: Query) -> Result<Snapshots<Vec<Document>>, DocumentStoreError> {
        // Subscribe before the first read so no commit slips in between.
        let mut changes = self.inner.changes.subscribe();
        let (publisher, snapshots) = Snapshots::channel(self.inner.run_query(&query)?);
        let inner = Arc::clone(&self.inner);

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    change = changes.recv() => {
                        match change {
                            Ok(collection) if collection != query.collection => continue,
                            Ok(_) | Err(RecvError::Lagged(_)) => {}
                            Err(RecvError::Closed) => break,
                        }
                        match inner.run_query(&query) {
                            Ok(docs) => {
                                if !publisher.publish_if_changed(docs) {
                                    break;
                                }
                            }
                            Err(err) => {
                                warn!(collection = %query.collection, error = %err, "Live query refresh failed");
                            }
                        }
                    }
                    _ = publisher.closed() => break,
                }
            }
            debug!(collection = %query.collection, "Live query stopped");
        });

        Ok(snapshots)
    }

    async fn watch_document(
        &self,
        path: DocumentPath,
    ) -> Result<Snapshots<Option<Document>>, DocumentStoreError> {
        let mut changes = self.inner.changes.subscribe();
        let (publisher, snapshots) = Snapshots::channel(self.inner.load_document(&path)?);
        let inner = Arc::clone(&self.inner);

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    change = changes.recv() => {
                        match change {
                            Ok(collection) if &collection != path.collection() => continue,
                            Ok(_) | Err(RecvError::Lagged(_)) => {}
                            Err(RecvError::Closed) => break,
                        }
                        match inner.load_document(&path) {
                            Ok(doc) => {
                                if !publisher.publish_if_changed(doc) {
                                    break;
                                }
                            }
                            Err(err) => {
                                warn!(path = %path, error = %err, "Live document refresh failed");
                            }
                        }
                    }
                    _ = publisher.closed() => break,
                }
            }
            debug!(path = %path, "Live document stopped");
        });

        Ok(snapshots)
    }
}
