use anyhow::{anyhow, Context, Result};
use serde_json::Value;

use pb_core::document::{CollectionPath, Document};

use crate::db::models::DocumentRow;
use crate::db::ports::{InsertMapper, RowMapper};

pub struct DocumentRowMapper;

impl InsertMapper<Document, DocumentRow> for DocumentRowMapper {
    fn to_row(&self, domain: &Document) -> Result<DocumentRow> {
        Ok(DocumentRow {
            collection: domain.path.collection().as_str().to_string(),
            doc_id: domain.id().to_string(),
            data: serde_json::to_string(&domain.fields)?,
        })
    }
}

impl RowMapper<DocumentRow, Document> for DocumentRowMapper {
    fn to_domain(&self, row: &DocumentRow) -> Result<Document> {
        let collection = CollectionPath::parse(&row.collection)?;
        let value: Value = serde_json::from_str(&row.data)
            .with_context(|| format!("corrupt document data at {}/{}", row.collection, row.doc_id))?;
        match value {
            Value::Object(fields) => Ok(Document::new(collection.doc(row.doc_id.clone()), fields)),
            _ => Err(anyhow!(
                "document {}/{} is not a JSON object",
                row.collection,
                row.doc_id
            )),
        }
    }
}
