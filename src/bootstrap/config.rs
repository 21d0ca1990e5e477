//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML file and maps it onto the [`AppConfig`] DTO. Values are
//! accepted as written; interpreting them is left to the consumers.

use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::info;

use cs_core::config::AppConfig;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
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

/// Pick the configuration to run with.
///
/// An explicitly requested file must load. The default file is optional:
/// when it does not exist the built-in defaults are used.
pub fn resolve_config(explicit: Option<PathBuf>, default_path: &Path) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    if default_path.exists() {
        return load_config(default_path.to_path_buf());
    }

    info!(path = %default_path.display(), "No config file found, using defaults");
    Ok(AppConfig::default())
}
