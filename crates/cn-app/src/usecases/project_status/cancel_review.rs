use std::sync::Arc;

use cn_core::ports::RemoteProjectPort;
use cn_core::project::{ProjectStatusItem, UnifiedStatus};
use tracing::info;

use super::store::ProjectStatusStore;
use super::transition::{
    ensure_remote, ensure_status, refresh_after, remote_failure, TransitionError, TransitionOutcome,
};

const COMMAND: &str = "cancel review of";

/// Withdraw a pending review request.
///
/// Only items currently derived as `REVIEW` qualify. After the service
/// confirms, the `REVIEW` bucket and the overview counts are refetched.
pub struct CancelReview {
    store: Arc<ProjectStatusStore>,
    remote: Arc<dyn RemoteProjectPort>,
}

impl CancelReview {
    pub fn from_ports(store: Arc<ProjectStatusStore>, remote: Arc<dyn RemoteProjectPort>) -> Self {
        Self { store, remote }
    }

    #[tracing::instrument(
        name = "usecase.cancel_review.execute",
        skip(self, item),
        fields(project_id = %item.id)
    )]
    pub async fn execute(&self, item: &ProjectStatusItem) -> Result<TransitionOutcome, TransitionError> {
        ensure_status(COMMAND, item, UnifiedStatus::Review)?;
        ensure_remote(COMMAND, item)?;

        self.remote
            .cancel_review_request(&item.id)
            .await
            .map_err(|err| remote_failure(&self.store, err))?;

        info!("Review request cancelled");
        Ok(refresh_after(&self.store, UnifiedStatus::Review).await)
    }
}
