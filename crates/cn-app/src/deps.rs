//! # Application Dependencies / 应用依赖
//!
//! **Note / 注意**: This is NOT a Builder pattern.
//! - No build steps / 无构建步骤
//! - No default values / 无默认值
//! - Just parameter grouping / 仅用于参数打包

use std::sync::Arc;

use cn_core::ports::{LocalDraftStorePort, RemoteProjectPort};
use cn_core::project::AssetUrlResolver;

/// Dependency grouping for the project status services.
/// 项目状态服务的依赖分组。
pub struct ProjectStatusDeps {
    pub remote: Arc<dyn RemoteProjectPort>,
    pub drafts: Arc<dyn LocalDraftStorePort>,
    pub assets: AssetUrlResolver,
}
