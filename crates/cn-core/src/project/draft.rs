//! Locally authored, not yet submitted project drafts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::UnifiedStatus;
use crate::ids::ProjectId;

/// A project draft persisted on this machine only.
///
/// 仅保存在本地、尚未提交的项目草稿。只有当对应的远端分组为空时才会展示。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub image_path: Option<String>,
    pub status: UnifiedStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectDraft {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::new(),
            title: title.into(),
            summary: summary.into(),
            image_path: None,
            status: UnifiedStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_status(mut self, status: UnifiedStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_image_path(mut self, path: impl Into<String>) -> Self {
        self.image_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_starts_in_draft_status() {
        let draft = ProjectDraft::new("Board game", "Cooperative dungeon crawler");
        assert_eq!(draft.status, UnifiedStatus::Draft);
        assert_eq!(draft.created_at, draft.updated_at);
        assert!(draft.image_path.is_none());
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let json = r#"{
            "id": "d-1",
            "title": "Zine",
            "status": "DRAFT",
            "created_at": "2026-01-02T03:04:05Z",
            "updated_at": "2026-01-02T03:04:05Z"
        }"#;
        let draft: ProjectDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.summary, "");
        assert_eq!(draft.image_path, None);
        assert_eq!(draft.id, ProjectId::from("d-1"));
    }
}
