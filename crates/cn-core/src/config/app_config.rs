use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the project API, e.g. `https://api.example.org/v1`
    /// (may be empty - this is a fact, not an error)
    pub api_base_url: String,

    /// Base URL that relative image paths are joined onto
    pub asset_base_url: String,

    /// Request timeout in seconds (0 means "client default")
    pub request_timeout_secs: u64,

    /// Bearer token for the maker session, if any
    pub auth_token: Option<String>,

    /// Local draft file path (path info only, no existence check)
    /// 本地草稿文件路径（仅路径信息，不检查文件是否存在）
    pub drafts_path: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Missing keys become empty values. No validation is performed.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let api = toml_value.get("api");
        let api_str = |key: &str| {
            api.and_then(|a| a.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            api_base_url: api_str("base_url"),
            asset_base_url: api_str("asset_base_url"),
            request_timeout_secs: api
                .and_then(|a| a.get("timeout_secs"))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
                .unwrap_or(0),
            auth_token: api
                .and_then(|a| a.get("auth_token"))
                .and_then(|v| v.as_str())
                .map(str::to_string),
            drafts_path: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("drafts_path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            api_base_url: String::new(),
            asset_base_url: String::new(),
            request_timeout_secs: 0,
            auth_token: None,
            drafts_path: PathBuf::new(),
        }
    }

    /// Create AppConfig with system-default paths for production use
    /// 生产环境使用：创建具有系统默认路径的 AppConfig
    ///
    /// # Arguments / 参数
    ///
    /// * `data_dir` - Base directory for app data, computed by the caller
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            drafts_path: data_dir.join("drafts.json"),
            ..Self::empty()
        }
    }
}
