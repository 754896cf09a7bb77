//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (HTTP client, draft file) / 创建 infra 层具体实现
//! - ✅ Inject them into the project status services / 注入到项目状态服务
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//!
//! > **This is the only place allowed to depend on cn-infra and cn-app simultaneously.**
//! > **这是唯一允许同时依赖 cn-infra 和 cn-app 的地方。**

use std::sync::Arc;

use anyhow::Context;
use cn_app::{ProjectStatusDeps, ProjectStatusServices};
use cn_core::config::AppConfig;
use cn_core::ports::{LocalDraftStorePort, RemoteProjectPort};
use cn_core::project::AssetUrlResolver;
use cn_infra::{FileDraftStore, HttpRemoteProjectClient};
use tracing::info;

pub fn build_services(config: &AppConfig) -> anyhow::Result<ProjectStatusServices> {
    let remote: Arc<dyn RemoteProjectPort> = Arc::new(
        HttpRemoteProjectClient::from_config(config)
            .context("Failed to create project API client (set [api] base_url)")?,
    );
    let drafts: Arc<dyn LocalDraftStorePort> = Arc::new(FileDraftStore::new(&config.drafts_path));
    let assets = AssetUrlResolver::new(config.asset_base_url.as_str());

    info!(
        api = %config.api_base_url,
        drafts = %config.drafts_path.display(),
        "Project status services wired"
    );

    Ok(ProjectStatusServices::from_deps(ProjectStatusDeps {
        remote,
        drafts,
        assets,
    }))
}
