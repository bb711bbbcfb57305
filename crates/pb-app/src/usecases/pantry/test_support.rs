//! Mocks shared by the pantry use case tests.

use anyhow::Result;
use async_trait::async_trait;
use mockall::mock;

use pb_core::ids::PantryItemId;
use pb_core::observe::Snapshots;
use pb_core::pantry::{NewPantryItem, PantryItem, PantryItemPatch};
use pb_core::ports::PantryRepositoryPort;

mock! {
    pub PantryRepo {}

    #[async_trait]
    impl PantryRepositoryPort for PantryRepo {
        async fn watch_all(&self) -> Result<Snapshots<Vec<PantryItem>>>;
        async fn watch_by_tag(&self, tag: &str) -> Result<Snapshots<Vec<PantryItem>>>;
        async fn watch_item(&self, id: &PantryItemId) -> Result<Snapshots<Option<PantryItem>>>;
        async fn add(&self, item: NewPantryItem) -> Result<PantryItemId>;
        async fn upsert(&self, id: &PantryItemId, patch: PantryItemPatch) -> Result<()>;
        async fn update(&self, id: &PantryItemId, patch: PantryItemPatch) -> Result<()>;
        async fn remove(&self, id: &PantryItemId) -> Result<()>;
        async fn remove_many(&self, ids: &[PantryItemId]) -> Result<()>;
        async fn keep_latest(&self, n: usize) -> Result<usize>;
    }
}

pub fn item(id: &str, name: &str, tag: Option<&str>) -> PantryItem {
    PantryItem {
        id: PantryItemId::from(id),
        name: name.to_string(),
        canonical_ingredient_id: None,
        quantity: None,
        unit: None,
        best_before_date: None,
        acquired_at_ms: None,
        updated_at_ms: 0,
        tags: tag.map(|t| vec![t.to_string()]).unwrap_or_default(),
        notes: None,
        freshness_score: None,
        storage: None,
        substitutes: Vec::new(),
    }
}
