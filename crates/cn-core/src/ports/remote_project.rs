use async_trait::async_trait;

use crate::ids::ProjectId;
use crate::ports::errors::RemoteProjectError;
use crate::project::{RemoteProjectRecord, StatusCountSummary, StatusFilter};

/// Port for the remote maker project service.
///
/// 远端项目服务端口。核心层只通过此接口访问网络。
///
/// # Behavior / 行为
/// - Listing returns raw wire records; normalization happens in the core.
/// - Mutations are confirmed by `Ok(())`; callers refresh their caches afterwards.
#[async_trait]
pub trait RemoteProjectPort: Send + Sync {
    /// Aggregate project counts per unified status.
    async fn get_status_counts(&self) -> Result<StatusCountSummary, RemoteProjectError>;

    /// Projects matching the given `(lifecycle, review)` filter.
    async fn get_projects_by_filter(
        &self,
        filter: StatusFilter,
    ) -> Result<Vec<RemoteProjectRecord>, RemoteProjectError>;

    async fn delete_project(&self, id: &ProjectId) -> Result<(), RemoteProjectError>;

    async fn cancel_review_request(&self, id: &ProjectId) -> Result<(), RemoteProjectError>;

    async fn cancel_scheduled_release(&self, id: &ProjectId) -> Result<(), RemoteProjectError>;
}
