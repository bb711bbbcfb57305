//! Shared fixtures for the pb-infra integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use pb_core::observe::Snapshots;
use pb_core::ports::ClockPort;
use pb_infra::db::pool::{init_db_pool, DbPool};
use pb_infra::db::ports::DbExecutor;
use pb_infra::DieselDocumentStore;

/// In-memory test executor
pub struct TestDbExecutor {
    pool: Arc<DbPool>,
}

impl TestDbExecutor {
    fn new() -> Self {
        let pool = Arc::new(init_db_pool(":memory:").expect("Failed to create test DB pool"));
        Self { pool }
    }
}

impl DbExecutor for TestDbExecutor {
    fn run<T>(
        &self,
        f: impl FnOnce(&mut diesel::SqliteConnection) -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        let mut conn = self.pool.get()?;
        f(&mut conn)
    }
}

/// Clock that only moves when told to.
pub struct ManualClock(AtomicI64);

impl ManualClock {
    pub fn at(ms: i64) -> Arc<Self> {
        Arc::new(Self(AtomicI64::new(ms)))
    }

    pub fn set(&self, ms: i64) {
        self.0.store(ms, Ordering::SeqCst);
    }
}

impl ClockPort for ManualClock {
    fn now_ms(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

pub fn memory_store(clock: Arc<ManualClock>) -> Arc<DieselDocumentStore<TestDbExecutor>> {
    Arc::new(DieselDocumentStore::new(TestDbExecutor::new(), clock))
}

/// Wait for the next snapshot, failing the test if none arrives.
pub async fn next_within<T>(snapshots: &mut Snapshots<T>) -> T
where
    T: Clone + Send + Sync + 'static,
{
    tokio::time::timeout(Duration::from_secs(2), snapshots.next())
        .await
        .expect("timed out waiting for a snapshot")
        .expect("snapshot stream ended")
}
