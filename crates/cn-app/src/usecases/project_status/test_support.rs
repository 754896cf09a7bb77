//! Mocks and fixtures shared by the transition command tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use cn_core::ids::ProjectId;
use cn_core::ports::{LocalDraftError, LocalDraftStorePort, RemoteProjectError, RemoteProjectPort};
use cn_core::project::{
    AssetUrlResolver, ItemOrigin, ProjectDraft, ProjectStatusItem, RemoteProjectRecord,
    StatusCountSummary, StatusFilter, UnifiedStatus,
};

use super::store::ProjectStatusStore;

mock! {
    pub Remote {}

    #[async_trait]
    impl RemoteProjectPort for Remote {
        async fn get_status_counts(&self) -> Result<StatusCountSummary, RemoteProjectError>;
        async fn get_projects_by_filter(
            &self,
            filter: StatusFilter,
        ) -> Result<Vec<RemoteProjectRecord>, RemoteProjectError>;
        async fn delete_project(&self, id: &ProjectId) -> Result<(), RemoteProjectError>;
        async fn cancel_review_request(&self, id: &ProjectId) -> Result<(), RemoteProjectError>;
        async fn cancel_scheduled_release(&self, id: &ProjectId) -> Result<(), RemoteProjectError>;
    }
}

mock! {
    pub Drafts {}

    #[async_trait]
    impl LocalDraftStorePort for Drafts {
        async fn list_drafts(&self) -> Result<Vec<ProjectDraft>, LocalDraftError>;
        async fn list_drafts_by_status(
            &self,
            status: UnifiedStatus,
        ) -> Result<Vec<ProjectDraft>, LocalDraftError>;
        async fn save_draft(&self, draft: &ProjectDraft) -> Result<(), LocalDraftError>;
        async fn remove_draft(&self, id: &ProjectId) -> Result<(), LocalDraftError>;
    }
}

pub(crate) fn store_with(
    remote: MockRemote,
    drafts: MockDrafts,
) -> (
    Arc<ProjectStatusStore>,
    Arc<dyn RemoteProjectPort>,
    Arc<dyn LocalDraftStorePort>,
) {
    let remote: Arc<dyn RemoteProjectPort> = Arc::new(remote);
    let drafts: Arc<dyn LocalDraftStorePort> = Arc::new(drafts);
    let store = Arc::new(ProjectStatusStore::new(
        remote.clone(),
        drafts.clone(),
        AssetUrlResolver::new("https://cdn.example.org"),
    ));
    (store, remote, drafts)
}

pub(crate) fn remote_record(id: &str, lifecycle: &str, review: &str) -> RemoteProjectRecord {
    RemoteProjectRecord {
        id: id.to_string(),
        title: format!("Project {id}"),
        summary: String::new(),
        image_path: None,
        lifecycle_status: lifecycle.to_string(),
        review_status: review.to_string(),
    }
}

fn item(id: &str, status: UnifiedStatus, origin: ItemOrigin) -> ProjectStatusItem {
    let (lifecycle_status, review_status) = status.canonical_pair();
    ProjectStatusItem {
        id: ProjectId::from(id),
        title: format!("Project {id}"),
        summary: String::new(),
        image_url: None,
        lifecycle_status,
        review_status,
        origin,
    }
}

pub(crate) fn draft_item(id: &str) -> ProjectStatusItem {
    item(id, UnifiedStatus::Draft, ItemOrigin::Remote)
}

pub(crate) fn local_draft_item(id: &str) -> ProjectStatusItem {
    item(id, UnifiedStatus::Draft, ItemOrigin::Local)
}

pub(crate) fn review_item(id: &str) -> ProjectStatusItem {
    item(id, UnifiedStatus::Review, ItemOrigin::Remote)
}

pub(crate) fn scheduled_item(id: &str) -> ProjectStatusItem {
    item(id, UnifiedStatus::Scheduled, ItemOrigin::Remote)
}
