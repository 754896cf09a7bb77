use std::sync::Arc;

use cn_core::ports::{LocalDraftStorePort, RemoteProjectPort};
use cn_core::project::{ItemOrigin, ProjectStatusItem, UnifiedStatus};
use tracing::info;

use super::store::ProjectStatusStore;
use super::transition::{ensure_status, refresh_after, remote_failure, TransitionError, TransitionOutcome};

const COMMAND: &str = "delete draft";

/// Use case for withdrawing a draft project.
/// 删除草稿项目的用例。
///
/// Remote drafts are deleted through the project service, local drafts are
/// removed from the draft store. Either way the `DRAFT` bucket and the
/// overview are refetched afterwards.
pub struct DeleteDraft {
    store: Arc<ProjectStatusStore>,
    remote: Arc<dyn RemoteProjectPort>,
    drafts: Arc<dyn LocalDraftStorePort>,
}

impl DeleteDraft {
    pub fn from_ports(
        store: Arc<ProjectStatusStore>,
        remote: Arc<dyn RemoteProjectPort>,
        drafts: Arc<dyn LocalDraftStorePort>,
    ) -> Self {
        Self {
            store,
            remote,
            drafts,
        }
    }

    #[tracing::instrument(
        name = "usecase.delete_draft.execute",
        skip(self, item),
        fields(project_id = %item.id, origin = item.origin.as_str())
    )]
    pub async fn execute(&self, item: &ProjectStatusItem) -> Result<TransitionOutcome, TransitionError> {
        ensure_status(COMMAND, item, UnifiedStatus::Draft)?;

        match item.origin {
            ItemOrigin::Remote => self
                .remote
                .delete_project(&item.id)
                .await
                .map_err(|err| remote_failure(&self.store, err))?,
            ItemOrigin::Local => self.drafts.remove_draft(&item.id).await?,
        }

        info!("Draft deleted");
        Ok(refresh_after(&self.store, UnifiedStatus::Draft).await)
    }
}
