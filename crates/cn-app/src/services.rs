use std::sync::Arc;

use crate::deps::ProjectStatusDeps;
use crate::usecases::project_status::{CancelReview, CancelScheduled, DeleteDraft, ProjectStatusStore};

/// The store plus the transition commands that share it.
///
/// UI consumers hold one of these for the lifetime of the session; the store
/// inside is the single process-wide cache.
pub struct ProjectStatusServices {
    pub store: Arc<ProjectStatusStore>,
    pub delete_draft: DeleteDraft,
    pub cancel_review: CancelReview,
    pub cancel_scheduled: CancelScheduled,
}

impl ProjectStatusServices {
    pub fn from_deps(deps: ProjectStatusDeps) -> Self {
        let ProjectStatusDeps {
            remote,
            drafts,
            assets,
        } = deps;

        let store = Arc::new(ProjectStatusStore::new(remote.clone(), drafts.clone(), assets));

        Self {
            delete_draft: DeleteDraft::from_ports(store.clone(), remote.clone(), drafts),
            cancel_review: CancelReview::from_ports(store.clone(), remote.clone()),
            cancel_scheduled: CancelScheduled::from_ports(store.clone(), remote),
            store,
        }
    }
}
