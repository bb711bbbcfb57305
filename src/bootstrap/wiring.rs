//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (db pool, document store, repositories)
//!   / 创建 infra 层具体实现
//! - ✅ Group them into [`AppDeps`] / 将所有依赖打包到 AppDeps
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//! ❌ **No configuration validation / 禁止做配置验证**
//!
//! > **This is the only place allowed to depend on pb-infra and pb-app simultaneously.**
//! > **这是唯一允许同时依赖 pb-infra 和 pb-app 的地方。**

use std::path::Path;
use std::sync::Arc;

use pb_app::AppDeps;
use pb_core::config::AppConfig;
use pb_core::ports::DocumentStorePort;
use pb_infra::db::{init_db_pool, DbPool, DieselSqliteExecutor};
use pb_infra::{DieselDocumentStore, DocumentIdeaRepository, DocumentPantryRepository, SystemClock};

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),
}

/// Create SQLite database connection pool
/// 创建 SQLite 数据库连接池
///
/// The parent directory is created when missing. `:memory:` opens a private
/// in-memory database.
fn create_db_pool(db_path: &Path) -> WiringResult<DbPool> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            WiringError::DatabaseInit(format!("Failed to create DB directory: {}", e))
        })?;
    }

    let db_url = db_path
        .to_str()
        .ok_or_else(|| WiringError::DatabaseInit("Invalid database path".to_string()))?;

    init_db_pool(db_url)
        .map_err(|e| WiringError::DatabaseInit(format!("Failed to initialize DB: {:#}", e)))
}

/// Build every dependency of the application from the configuration.
/// 根据配置构建应用的全部依赖。
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    let db_pool = create_db_pool(&config.database_path)?;
    let executor = DieselSqliteExecutor::new(db_pool);
    let store: Arc<dyn DocumentStorePort> =
        Arc::new(DieselDocumentStore::new(executor, Arc::new(SystemClock)));

    tracing::debug!(database = %config.database_path.display(), "Document store ready");

    Ok(AppDeps {
        pantry_repo: Arc::new(DocumentPantryRepository::new(store.clone(), config.limits)),
        idea_repo: Arc::new(DocumentIdeaRepository::new(store, config.limits)),
    })
}
