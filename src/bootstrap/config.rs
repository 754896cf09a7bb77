//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//! - ✅ Fill unset storage paths from the app data directory / 用应用数据目录补全未设置的存储路径
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No business rules / 禁止业务规则**

use std::path::PathBuf;

use anyhow::Context;
use cn_app::app_paths::AppPaths;
use cn_core::config::AppConfig;
use cn_core::ports::AppDirsPort;
use cn_infra::DirsAppDirsAdapter;
use tracing::{debug, info};

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "CROWDNEST_CONFIG";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// Pure data loading: empty strings and missing sections are accepted as
/// they are.
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config as TOML: {}", config_path.display()))?;
    AppConfig::from_toml(&toml_value)
}

pub fn resolve_app_paths() -> anyhow::Result<AppPaths> {
    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve application data directory")?;
    Ok(AppPaths::from_app_dirs(&app_dirs))
}

/// Config file location: explicit argument, then `CROWDNEST_CONFIG`, then
/// `<app_data>/config.toml`.
pub fn resolve_config_path(explicit: Option<PathBuf>, paths: &AppPaths) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    match std::env::var(CONFIG_ENV) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => paths.config_path.clone(),
    }
}

/// Resolve, load and complete the application config.
///
/// A missing file is not an error: system defaults are used instead. An
/// explicitly requested file must exist.
pub fn load_app_config(explicit: Option<PathBuf>, paths: &AppPaths) -> anyhow::Result<AppConfig> {
    let required = explicit.is_some();
    let config_path = resolve_config_path(explicit, paths);

    let mut config = if !required && !config_path.exists() {
        info!(path = %config_path.display(), "Config file not found, using system defaults");
        AppConfig::with_system_defaults(app_data_root(paths))
    } else {
        debug!(path = %config_path.display(), "Loading config file");
        load_config(config_path)?
    };

    if config.drafts_path.as_os_str().is_empty() {
        config.drafts_path = paths.drafts_path.clone();
    }
    Ok(config)
}

fn app_data_root(paths: &AppPaths) -> PathBuf {
    paths
        .drafts_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_default()
}
