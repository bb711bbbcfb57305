//! Document identifiers.
//!
//! IDs are the document keys inside their collection. They are never stored
//! as a field of the document itself.

mod id_macro;

use serde::{Deserialize, Serialize};

use id_macro::impl_id;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PantryItemId(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IdeaId(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IngredientId(String);

impl_id!(PantryItemId, IdeaId, IngredientId);
