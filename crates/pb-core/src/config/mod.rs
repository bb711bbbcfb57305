//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//!
//! Missing values map to zero/empty facts. The store limits fall back to
//! [`StoreLimits::default`] only when the `[limits]` section leaves them at zero.

use std::path::PathBuf;

/// Page sizes used by the bulk-delete helpers of the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreLimits {
    /// Ingredient documents deleted together with an idea, per batch.
    pub ingredient_page_size: usize,
    /// Documents scanned by the keep-latest utilities.
    pub keep_latest_scan_limit: usize,
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self {
            ingredient_page_size: 300,
            keep_latest_scan_limit: 200,
        }
    }
}

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// SQLite database file (path info only, no existence check)
    pub database_path: PathBuf,

    /// Directory for the rolling log file; empty disables file logging
    pub logs_dir: PathBuf,

    pub limits: StoreLimits,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let path_of = |section: &str, key: &str| {
            PathBuf::from(
                toml_value
                    .get(section)
                    .and_then(|s| s.get(key))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            )
        };
        let limit_of = |key: &str, fallback: usize| {
            match toml_value
                .get("limits")
                .and_then(|l| l.get(key))
                .and_then(|v| v.as_integer())
            {
                Some(v) if v > 0 => v as usize,
                _ => fallback,
            }
        };

        let defaults = StoreLimits::default();
        Ok(Self {
            database_path: path_of("storage", "database_path"),
            logs_dir: path_of("storage", "logs_dir"),
            limits: StoreLimits {
                ingredient_page_size: limit_of("ingredient_page_size", defaults.ingredient_page_size),
                keep_latest_scan_limit: limit_of(
                    "keep_latest_scan_limit",
                    defaults.keep_latest_scan_limit,
                ),
            },
        })
    }

    /// Create AppConfig with system-default paths for production use
    /// 生产环境使用：创建具有系统默认路径的 AppConfig
    ///
    /// The base directory is computed by the caller (e.g. with the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("pantrybook.db"),
            logs_dir: data_dir.join("logs"),
            limits: StoreLimits::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_reads_storage_paths() {
        let toml_str = r#"
            [storage]
            database_path = "/data/pantry.db"
            logs_dir = "/data/logs"
        "#;
        let value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config.database_path, PathBuf::from("/data/pantry.db"));
        assert_eq!(config.logs_dir, PathBuf::from("/data/logs"));
        assert_eq!(config.limits, StoreLimits::default());
    }

    #[test]
    fn test_from_toml_returns_empty_paths_when_missing() {
        let value: Value = toml::from_str("[storage]").unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        // Empty path is a valid fact, not an error
        assert_eq!(config.database_path, PathBuf::new());
        assert_eq!(config.logs_dir, PathBuf::new());
    }

    #[test]
    fn test_from_toml_overrides_limits() {
        let toml_str = r#"
            [limits]
            ingredient_page_size = 50
            keep_latest_scan_limit = 0
        "#;
        let value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config.limits.ingredient_page_size, 50);
        assert_eq!(config.limits.keep_latest_scan_limit, 200);
    }

    #[test]
    fn test_with_system_defaults_creates_valid_paths() {
        let config = AppConfig::with_system_defaults(PathBuf::from("/tmp/test"));

        assert_eq!(config.database_path, PathBuf::from("/tmp/test/pantrybook.db"));
        assert_eq!(config.logs_dir, PathBuf::from("/tmp/test/logs"));
    }
}
