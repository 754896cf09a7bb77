use std::sync::Arc;

use cn_core::ports::RemoteProjectPort;
use cn_core::project::{ProjectStatusItem, UnifiedStatus};
use tracing::info;

use super::store::ProjectStatusStore;
use super::transition::{
    ensure_remote, ensure_status, refresh_after, remote_failure, TransitionError, TransitionOutcome,
};

const COMMAND: &str = "cancel scheduled release of";

/// Pull a scheduled project back before it goes live.
/// 取消已排期的发布。
pub struct CancelScheduled {
    store: Arc<ProjectStatusStore>,
    remote: Arc<dyn RemoteProjectPort>,
}

impl CancelScheduled {
    pub fn from_ports(store: Arc<ProjectStatusStore>, remote: Arc<dyn RemoteProjectPort>) -> Self {
        Self { store, remote }
    }

    #[tracing::instrument(
        name = "usecase.cancel_scheduled.execute",
        skip(self, item),
        fields(project_id = %item.id)
    )]
    pub async fn execute(&self, item: &ProjectStatusItem) -> Result<TransitionOutcome, TransitionError> {
        ensure_status(COMMAND, item, UnifiedStatus::Scheduled)?;
        ensure_remote(COMMAND, item)?;

        self.remote
            .cancel_scheduled_release(&item.id)
            .await
            .map_err(|err| remote_failure(&self.store, err))?;

        info!("Scheduled release cancelled");
        Ok(refresh_after(&self.store, UnifiedStatus::Scheduled).await)
    }
}
