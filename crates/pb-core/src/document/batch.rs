//! Write batches and how each write applies to a stored document.

use std::collections::BTreeSet;

use serde_json::{json, Value};

use super::document::Fields;
use super::path::{CollectionPath, DocumentPath};
use crate::ports::errors::DocumentStoreError;

const SERVER_TIMESTAMP_KEY: &str = "$serverTimestamp";

/// Sentinel field value replaced with the store's clock at commit time.
pub fn server_timestamp() -> Value {
    json!({ SERVER_TIMESTAMP_KEY: true })
}

pub fn is_server_timestamp(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.len() == 1 && map.get(SERVER_TIMESTAMP_KEY) == Some(&Value::Bool(true)),
        _ => false,
    }
}

/// Replace every server-timestamp sentinel (at any depth) with `now_ms`.
pub fn resolve_server_timestamps(fields: &mut Fields, now_ms: i64) {
    for value in fields.values_mut() {
        resolve_value(value, now_ms);
    }
}

fn resolve_value(value: &mut Value, now_ms: i64) {
    if is_server_timestamp(value) {
        *value = Value::from(now_ms);
        return;
    }
    match value {
        Value::Object(map) => resolve_server_timestamps(map, now_ms),
        Value::Array(items) => items.iter_mut().for_each(|v| resolve_value(v, now_ms)),
        _ => {}
    }
}

/// Deep merge: nested maps are merged key by key, every other value replaces
/// the existing one.
pub fn merge_fields(target: &mut Fields, patch: Fields) {
    for (key, value) in patch {
        match (target.get_mut(&key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_fields(existing, incoming);
            }
            (_, value) => {
                target.insert(key, value);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WriteOp {
    /// Create or overwrite; with `merge` the fields are merged into the
    /// existing document instead.
    Set {
        path: DocumentPath,
        fields: Fields,
        merge: bool,
    },
    /// Replace the given top-level fields of an existing document.
    Update { path: DocumentPath, fields: Fields },
    Delete { path: DocumentPath },
}

impl WriteOp {
    pub fn path(&self) -> &DocumentPath {
        match self {
            WriteOp::Set { path, .. } | WriteOp::Update { path, .. } | WriteOp::Delete { path } => path,
        }
    }

    /// Result of applying this write on top of `existing`. `None` means the
    /// document does not exist afterwards.
    pub fn apply(
        &self,
        existing: Option<Fields>,
        now_ms: i64,
    ) -> Result<Option<Fields>, DocumentStoreError> {
        match self {
            WriteOp::Set { fields, merge, .. } => {
                let mut incoming = fields.clone();
                resolve_server_timestamps(&mut incoming, now_ms);
                match (existing, merge) {
                    (Some(mut current), true) => {
                        merge_fields(&mut current, incoming);
                        Ok(Some(current))
                    }
                    _ => Ok(Some(incoming)),
                }
            }
            WriteOp::Update { path, fields } => {
                let mut current =
                    existing.ok_or_else(|| DocumentStoreError::NotFound(path.to_string()))?;
                let mut incoming = fields.clone();
                resolve_server_timestamps(&mut incoming, now_ms);
                current.extend(incoming);
                Ok(Some(current))
            }
            WriteOp::Delete { .. } => Ok(None),
        }
    }
}

/// Ordered group of writes committed atomically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteBatch {
    ops: Vec<WriteOp>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, path: DocumentPath, fields: Fields) -> &mut Self {
        self.ops.push(WriteOp::Set {
            path,
            fields,
            merge: false,
        });
        self
    }

    pub fn set_merge(&mut self, path: DocumentPath, fields: Fields) -> &mut Self {
        self.ops.push(WriteOp::Set {
            path,
            fields,
            merge: true,
        });
        self
    }

    pub fn update(&mut self, path: DocumentPath, fields: Fields) -> &mut Self {
        self.ops.push(WriteOp::Update { path, fields });
        self
    }

    pub fn delete(&mut self, path: DocumentPath) -> &mut Self {
        self.ops.push(WriteOp::Delete { path });
        self
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[WriteOp] {
        &self.ops
    }

    /// Collections written by this batch, each once.
    pub fn touched_collections(&self) -> BTreeSet<CollectionPath> {
        self.ops
            .iter()
            .map(|op| op.path().collection().clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => panic!("object expected"),
        }
    }

    fn path() -> DocumentPath {
        CollectionPath::root("pantryItems").doc("a")
    }

    #[test]
    fn test_set_merge_is_deep() {
        let op = WriteOp::Set {
            path: path(),
            fields: fields(json!({ "score": { "pantryCoverage": 0.7 }, "name": "B" })),
            merge: true,
        };
        let existing = fields(json!({ "score": { "pantryCoverage": 0.1, "difficulty": 2 }, "keep": 1 }));
        let result = op.apply(Some(existing), 0).unwrap().unwrap();
        assert_eq!(
            Value::Object(result),
            json!({ "score": { "pantryCoverage": 0.7, "difficulty": 2 }, "keep": 1, "name": "B" })
        );
    }

    #[test]
    fn test_set_without_merge_replaces() {
        let op = WriteOp::Set {
            path: path(),
            fields: fields(json!({ "name": "B" })),
            merge: false,
        };
        let result = op.apply(Some(fields(json!({ "keep": 1 }))), 0).unwrap().unwrap();
        assert_eq!(Value::Object(result), json!({ "name": "B" }));
    }

    #[test]
    fn test_update_requires_existing_document() {
        let op = WriteOp::Update {
            path: path(),
            fields: fields(json!({ "name": "B" })),
        };
        assert!(matches!(op.apply(None, 0), Err(DocumentStoreError::NotFound(_))));
    }

    #[test]
    fn test_update_replaces_top_level_fields_only() {
        let op = WriteOp::Update {
            path: path(),
            fields: fields(json!({ "meta": { "b": 2 } })),
        };
        let result = op
            .apply(Some(fields(json!({ "meta": { "a": 1 }, "x": 0 }))), 0)
            .unwrap()
            .unwrap();
        assert_eq!(Value::Object(result), json!({ "meta": { "b": 2 }, "x": 0 }));
    }

    #[test]
    fn test_server_timestamps_resolve_at_apply() {
        let op = WriteOp::Set {
            path: path(),
            fields: fields(json!({ "updatedAt": server_timestamp(), "nested": [server_timestamp()] })),
            merge: false,
        };
        let result = op.apply(None, 1234).unwrap().unwrap();
        assert_eq!(Value::Object(result), json!({ "updatedAt": 1234, "nested": [1234] }));
    }

    #[test]
    fn test_touched_collections_are_distinct() {
        let ideas = CollectionPath::root("ideas");
        let mut batch = WriteBatch::new();
        batch
            .set_merge(ideas.doc("a"), Fields::new())
            .delete(ideas.doc("b"))
            .delete(ideas.doc("a").sub_collection("ingredients").doc("x"));
        let touched: Vec<String> = batch
            .touched_collections()
            .into_iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(touched, vec!["ideas", "ideas/a/ingredients"]);
    }
}
