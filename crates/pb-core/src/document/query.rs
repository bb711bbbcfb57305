//! Collection queries evaluated over document snapshots.
//!
//! Ordering semantics follow the managed document store: documents that lack
//! an `order_by` field are not part of the result, values of different types
//! order by type (null < bool < number < string < array < object), and ties
//! are broken by document id in the direction of the last `order_by`.

use std::cmp::Ordering;

use serde_json::Value;

use super::document::Document;
use super::path::CollectionPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Eq { field: String, value: Value },
    ArrayContains { field: String, value: Value },
}

impl Filter {
    fn matches(&self, doc: &Document) -> bool {
        match self {
            Filter::Eq { field, value } => doc
                .get(field)
                .is_some_and(|v| compare_values(v, value) == Ordering::Equal),
            Filter::ArrayContains { field, value } => match doc.get(field) {
                Some(Value::Array(items)) => items
                    .iter()
                    .any(|v| compare_values(v, value) == Ordering::Equal),
                _ => false,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: CollectionPath,
    pub filters: Vec<Filter>,
    pub order_by: Vec<OrderBy>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn collection(collection: CollectionPath) -> Self {
        Self {
            collection,
            filters: Vec::new(),
            order_by: Vec::new(),
            limit: None,
        }
    }

    pub fn where_eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Eq {
            field: field.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn where_array_contains(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::ArrayContains {
            field: field.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn order_by(mut self, field: &str, direction: Direction) -> Self {
        self.order_by.push(OrderBy {
            field: field.to_string(),
            direction,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a document belongs to the (unlimited) result set.
    pub fn matches(&self, doc: &Document) -> bool {
        doc.path.collection() == &self.collection
            && self.filters.iter().all(|f| f.matches(doc))
            && self.order_by.iter().all(|o| doc.get(&o.field).is_some())
    }

    /// Evaluate the query over a set of candidate documents.
    pub fn apply(&self, documents: Vec<Document>) -> Vec<Document> {
        let mut result: Vec<Document> = documents.into_iter().filter(|d| self.matches(d)).collect();

        let tie_break = self
            .order_by
            .last()
            .map(|o| o.direction)
            .unwrap_or(Direction::Asc);

        result.sort_by(|a, b| {
            for clause in &self.order_by {
                let (Some(va), Some(vb)) = (a.get(&clause.field), b.get(&clause.field)) else {
                    continue;
                };
                let ord = directed(compare_values(va, vb), clause.direction);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            directed(a.id().cmp(b.id()), tie_break)
        });

        if let Some(limit) = self.limit {
            result.truncate(limit);
        }
        result
    }
}

fn directed(ord: Ordering, direction: Direction) -> Ordering {
    match direction {
        Direction::Asc => ord,
        Direction::Desc => ord.reverse(),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Total order over JSON values used for sorting and equality filters.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => {
            for (vx, vy) in x.iter().zip(y.iter()) {
                let ord = compare_values(vx, vy);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            x.len().cmp(&y.len())
        }
        (Value::Object(x), Value::Object(y)) => {
            for ((kx, vx), (ky, vy)) in x.iter().zip(y.iter()) {
                let ord = kx.cmp(ky).then_with(|| compare_values(vx, vy));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            x.len().cmp(&y.len())
        }
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}
