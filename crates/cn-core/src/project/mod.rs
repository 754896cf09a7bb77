//! Project lifecycle and review status domain.
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Closed status enums for both axes and the unified status / 两条状态轴及统一状态
//! - ✅ Pure resolution `(lifecycle, review) -> UnifiedStatus` / 纯函数状态解析
//! - ✅ Wire normalization with an explicit `DRAFT` fallback / 线上数据归一化
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No I/O, no caching / 禁止 I/O 与缓存**

pub mod asset_url;
pub mod draft;
pub mod filter;
pub mod item;
pub mod resolver;
pub mod status;

use std::collections::HashMap;

pub use asset_url::AssetUrlResolver;
pub use draft::ProjectDraft;
pub use filter::StatusFilter;
pub use item::{normalize_record, ItemOrigin, ProjectStatusItem, RemoteProjectRecord};
pub use resolver::resolve;
pub use status::{LifecycleStatus, ReviewStatus, UnifiedStatus};

/// Aggregate per-status counts from the overview query.
pub type StatusCountSummary = HashMap<UnifiedStatus, u32>;
