//! Cached project items and their normalization from wire records.

use serde::{Deserialize, Serialize};

use super::asset_url::AssetUrlResolver;
use super::draft::ProjectDraft;
use super::resolver::resolve;
use super::status::{LifecycleStatus, ReviewStatus, UnifiedStatus};
use crate::ids::ProjectId;

/// Where a cached item came from.
///
/// Transition commands never call the remote service for a `Local` item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemOrigin {
    Remote,
    Local,
}

impl ItemOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemOrigin::Remote => "remote",
            ItemOrigin::Local => "local",
        }
    }
}

/// Untyped project record as returned by the project API.
///
/// 远端返回的原始记录：状态字段仍是字符串，尚未归一化。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemoteProjectRecord {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub image_path: Option<String>,
    pub lifecycle_status: String,
    pub review_status: String,
}

/// A project as held in a status bucket.
///
/// The unified status is never stored; it is derived from the two axes on
/// every read so the same pair always yields the same status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStatusItem {
    pub id: ProjectId,
    pub title: String,
    pub summary: String,
    pub image_url: Option<String>,
    pub lifecycle_status: LifecycleStatus,
    pub review_status: ReviewStatus,
    pub origin: ItemOrigin,
}

impl ProjectStatusItem {
    pub fn unified_status(&self) -> UnifiedStatus {
        resolve(self.lifecycle_status, self.review_status)
    }

    pub fn is_local(&self) -> bool {
        self.origin == ItemOrigin::Local
    }

    /// Represent a local draft as a bucket item, using the canonical status pair
    /// of the draft's own unified status.
    pub fn from_draft(draft: &ProjectDraft, assets: &AssetUrlResolver) -> Self {
        let (lifecycle_status, review_status) = draft.status.canonical_pair();
        Self {
            id: draft.id.clone(),
            title: draft.title.clone(),
            summary: draft.summary.clone(),
            image_url: assets.resolve(draft.image_path.as_deref()),
            lifecycle_status,
            review_status,
            origin: ItemOrigin::Local,
        }
    }
}

/// Parse a wire record into a cache item.
///
/// Unrecognized status strings fall back to `DRAFT` on their axis; the
/// fallback is reported through tracing so bad backend data stays visible.
pub fn normalize_record(record: RemoteProjectRecord, assets: &AssetUrlResolver) -> ProjectStatusItem {
    let lifecycle_status = LifecycleStatus::parse_wire(&record.lifecycle_status).unwrap_or_else(|| {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            project_id = %record.id,
            raw = %record.lifecycle_status,
            "Unrecognized lifecycle status, falling back to DRAFT"
        );
        LifecycleStatus::Draft
    });
    let review_status = ReviewStatus::parse_wire(&record.review_status).unwrap_or_else(|| {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            project_id = %record.id,
            raw = %record.review_status,
            "Unrecognized review status, falling back to DRAFT"
        );
        ReviewStatus::Draft
    });

    ProjectStatusItem {
        image_url: assets.resolve(record.image_path.as_deref()),
        id: ProjectId::from_string(record.id),
        title: record.title,
        summary: record.summary,
        lifecycle_status,
        review_status,
        origin: ItemOrigin::Remote,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lifecycle: &str, review: &str) -> RemoteProjectRecord {
        RemoteProjectRecord {
            id: "17".to_string(),
            title: "Solar kettle".to_string(),
            summary: "Boil water with sunlight".to_string(),
            image_path: Some("/uploads/17/cover.jpg".to_string()),
            lifecycle_status: lifecycle.to_string(),
            review_status: review.to_string(),
        }
    }

    #[test]
    fn normalizes_statuses_and_image_url() {
        let assets = AssetUrlResolver::new("https://cdn.example.org");
        let item = normalize_record(record("live", "approved"), &assets);

        assert_eq!(item.id, ProjectId::from("17"));
        assert_eq!(item.lifecycle_status, LifecycleStatus::Live);
        assert_eq!(item.review_status, ReviewStatus::Approved);
        assert_eq!(item.unified_status(), UnifiedStatus::Live);
        assert_eq!(item.origin, ItemOrigin::Remote);
        assert_eq!(
            item.image_url.as_deref(),
            Some("https://cdn.example.org/uploads/17/cover.jpg")
        );
    }

    #[test]
    fn unknown_wire_statuses_fall_back_to_draft() {
        let assets = AssetUrlResolver::default();
        let item = normalize_record(record("on_hold", "escalated"), &assets);

        assert_eq!(item.lifecycle_status, LifecycleStatus::Draft);
        assert_eq!(item.review_status, ReviewStatus::Draft);
        assert_eq!(item.unified_status(), UnifiedStatus::Draft);
    }

    #[test]
    fn local_drafts_derive_their_own_status() {
        let assets = AssetUrlResolver::default();
        let draft = ProjectDraft::new("Offline draft", "Not yet submitted");
        let item = ProjectStatusItem::from_draft(&draft, &assets);

        assert!(item.is_local());
        assert_eq!(item.unified_status(), UnifiedStatus::Draft);
        assert_eq!(item.id, draft.id);
    }

    #[test]
    fn origin_strings() {
        assert_eq!(ItemOrigin::Local.as_str(), "local");
        assert_eq!(ItemOrigin::Remote.as_str(), "remote");
    }
}
