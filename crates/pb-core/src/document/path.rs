use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ports::errors::DocumentStoreError;

/// Top-level collection of pantry items.
pub const PANTRY_ITEMS: &str = "pantryItems";
/// Top-level collection of ideas.
pub const IDEAS: &str = "ideas";
/// Sub-collection of an idea holding its ingredients.
pub const INGREDIENTS: &str = "ingredients";

/// Slash separated path of a collection, e.g. `ideas/abc/ingredients`.
/// Always has an odd number of segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CollectionPath(String);

impl CollectionPath {
    pub fn root(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn parse(path: &str) -> Result<Self, DocumentStoreError> {
        let segments = split_segments(path)?;
        if segments.len() % 2 == 0 {
            return Err(DocumentStoreError::InvalidPath(path.to_string()));
        }
        Ok(Self(segments.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn doc(&self, id: impl Into<String>) -> DocumentPath {
        DocumentPath {
            collection: self.clone(),
            id: id.into(),
        }
    }
}

impl Display for CollectionPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Path of one document: its collection plus the document id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentPath {
    collection: CollectionPath,
    id: String,
}

impl DocumentPath {
    pub fn parse(path: &str) -> Result<Self, DocumentStoreError> {
        let mut segments = split_segments(path)?;
        if segments.len() % 2 != 0 {
            return Err(DocumentStoreError::InvalidPath(path.to_string()));
        }
        let id = segments.pop().unwrap_or_default().to_string();
        Ok(Self {
            collection: CollectionPath(segments.join("/")),
            id,
        })
    }

    pub fn collection(&self) -> &CollectionPath {
        &self.collection
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Collection nested under this document.
    pub fn sub_collection(&self, name: &str) -> CollectionPath {
        CollectionPath(format!("{}/{}/{}", self.collection.0, self.id, name))
    }
}

impl Display for DocumentPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

fn split_segments(path: &str) -> Result<Vec<&str>, DocumentStoreError> {
    let segments: Vec<&str> = path.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(DocumentStoreError::InvalidPath(path.to_string()));
    }
    Ok(segments)
}
