//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//!
//! [`resolve_config`] is the only place that fills in system defaults, and
//! only for paths the file leaves empty.

use std::path::{Path, PathBuf};

use anyhow::Context;
use pb_core::config::AppConfig;

const APP_DIR_NAME: &str = "pantrybook";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// **NO validation is performed**: empty paths are facts, not errors.
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Per-user data directory of the application.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Configuration used by the binary.
///
/// An explicit `config_path` must exist. Without one, `config.toml` in the
/// data directory is used when present. Empty paths fall back to the
/// defaults under `data_dir`.
pub fn resolve_config(config_path: Option<PathBuf>, data_dir: &Path) -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::with_system_defaults(data_dir.to_path_buf());
    let implicit = data_dir.join(CONFIG_FILE_NAME);

    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None if implicit.is_file() => load_config(implicit)?,
        None => return Ok(defaults),
    };

    if config.database_path.as_os_str().is_empty() {
        config.database_path = defaults.database_path;
    }
    if config.logs_dir.as_os_str().is_empty() {
        config.logs_dir = defaults.logs_dir;
    }
    Ok(config)
}
