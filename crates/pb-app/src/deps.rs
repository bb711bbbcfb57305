//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for wiring the use cases.
//! 用于连接用例的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern. No defaults, no hidden
//! logic, just parameter grouping.

use std::sync::Arc;

use pb_core::ports::{IdeaRepositoryPort, PantryRepositoryPort};

/// Application dependency grouping
/// 应用依赖分组
pub struct AppDeps {
    // Pantry / 食品柜
    pub pantry_repo: Arc<dyn PantryRepositoryPort>,

    // Ideas / 菜谱创意
    pub idea_repo: Arc<dyn IdeaRepositoryPort>,
}
