use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::path::DocumentPath;
use crate::ports::errors::DocumentStoreError;

/// Field map of a stored document.
pub type Fields = Map<String, Value>;

/// Field injected with the document id when decoding.
pub const ID_FIELD: &str = "id";

/// Immutable snapshot of a stored document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub path: DocumentPath,
    pub fields: Fields,
}

impl Document {
    pub fn new(path: DocumentPath, fields: Fields) -> Self {
        Self { path, fields }
    }

    pub fn id(&self) -> &str {
        self.path.id()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Decode into a domain type, with the document id injected as `id`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, DocumentStoreError> {
        let mut fields = self.fields.clone();
        fields.insert(ID_FIELD.to_string(), Value::String(self.id().to_string()));
        serde_json::from_value(Value::Object(fields)).map_err(|e| DocumentStoreError::Decode {
            path: self.path.to_string(),
            message: e.to_string(),
        })
    }
}

/// Serialize a value into a document field map. The value must serialize to
/// a JSON object.
pub fn encode<T: Serialize>(value: &T) -> Result<Fields, DocumentStoreError> {
    match serde_json::to_value(value).map_err(|e| DocumentStoreError::Encode(e.to_string()))? {
        Value::Object(fields) => Ok(fields),
        other => Err(DocumentStoreError::Encode(format!(
            "expected an object, got {other}"
        ))),
    }
}

/// Decode one document, logging and dropping it if it does not fit `T`.
pub fn decode_lenient<T: DeserializeOwned>(doc: &Document) -> Option<T> {
    match doc.decode::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(path = %doc.path, error = %err, "Skipping undecodable document");
            None
        }
    }
}

/// Decode every document, dropping (and logging) those that do not fit `T`.
pub fn decode_all<T: DeserializeOwned>(documents: &[Document]) -> Vec<T> {
    documents.iter().filter_map(decode_lenient).collect()
}
