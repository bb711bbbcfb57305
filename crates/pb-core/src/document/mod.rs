//! Document store data model: addressing, snapshots, queries and writes.
//!
//! Everything here is pure; adapters in `pb-infra` persist documents and
//! evaluate these types against stored state.

pub mod batch;
pub mod document;
pub mod path;
pub mod query;

pub use batch::{merge_fields, server_timestamp, WriteBatch, WriteOp};
pub use document::{decode_all, decode_lenient, encode, Document, Fields};
pub use path::{CollectionPath, DocumentPath, IDEAS, INGREDIENTS, PANTRY_ITEMS};
pub use query::{Direction, Filter, OrderBy, Query};
