use async_trait::async_trait;

use crate::ids::ProjectId;
use crate::ports::errors::LocalDraftError;
use crate::project::{ProjectDraft, UnifiedStatus};

/// Port for drafts authored on this machine and not yet submitted.
///
/// 本地草稿存储端口。
#[async_trait]
pub trait LocalDraftStorePort: Send + Sync {
    async fn list_drafts(&self) -> Result<Vec<ProjectDraft>, LocalDraftError>;

    async fn list_drafts_by_status(
        &self,
        status: UnifiedStatus,
    ) -> Result<Vec<ProjectDraft>, LocalDraftError>;

    /// Insert or replace a draft by id.
    async fn save_draft(&self, draft: &ProjectDraft) -> Result<(), LocalDraftError>;

    /// Returns [`LocalDraftError::NotFound`] when no draft has this id.
    async fn remove_draft(&self, id: &ProjectId) -> Result<(), LocalDraftError>;
}
