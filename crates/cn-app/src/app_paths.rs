use std::path::PathBuf;

use cn_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_path: PathBuf,
    pub drafts_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            config_path: dirs.app_data_root.join("config.toml"),
            drafts_path: dirs.app_data_root.join("drafts.json"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}
