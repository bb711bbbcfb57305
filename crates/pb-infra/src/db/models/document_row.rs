use crate::db::schema::documents;
use diesel::prelude::*;

/// One stored document: its collection path, id and JSON-encoded fields.
#[derive(Debug, Clone, PartialEq, Queryable, Insertable)]
#[diesel(table_name = documents)]
pub struct DocumentRow {
    pub collection: String,
    pub doc_id: String,
    pub data: String,
}
