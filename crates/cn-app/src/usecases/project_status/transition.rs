//! Shared pieces of the transition commands: the precondition guard, the
//! error type and the post-command refresh.

use cn_core::ids::ProjectId;
use cn_core::ports::{LocalDraftError, RemoteProjectError};
use cn_core::project::{ProjectStatusItem, UnifiedStatus};
use tracing::warn;

use super::store::{FetchOptions, ProjectStatusStore};

/// Error type for the transition commands
#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    /// The item's current status does not allow this command. Raised before
    /// any I/O; never written to the store's shared error.
    #[error("cannot {command} project {id}: it is {actual}, expected {expected}")]
    PreconditionViolation {
        command: &'static str,
        id: ProjectId,
        expected: UnifiedStatus,
        actual: UnifiedStatus,
    },

    /// Remote-only command invoked on a draft that exists only on this machine.
    #[error("cannot {command} project {id}: it only exists as a local draft")]
    LocalOnly { command: &'static str, id: ProjectId },

    #[error("{}", .0.user_message())]
    Remote(#[source] RemoteProjectError),

    #[error("local draft error: {0}")]
    LocalDraft(#[from] LocalDraftError),
}

impl TransitionError {
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            TransitionError::PreconditionViolation { .. } | TransitionError::LocalOnly { .. }
        )
    }

    pub fn user_message(&self) -> String {
        match self {
            TransitionError::Remote(err) => err.user_message(),
            TransitionError::LocalDraft(_) => {
                "Could not update your local drafts. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionOutcome {
    /// Whether the affected bucket and the overview were both refetched after
    /// the mutation was confirmed.
    pub refreshed: bool,
}

/// Re-derive the item's status and compare it with the required one.
pub(crate) fn ensure_status(
    command: &'static str,
    item: &ProjectStatusItem,
    expected: UnifiedStatus,
) -> Result<(), TransitionError> {
    let actual = item.unified_status();
    if actual != expected {
        warn!(project_id = %item.id, %actual, %expected, command, "Transition refused");
        return Err(TransitionError::PreconditionViolation {
            command,
            id: item.id.clone(),
            expected,
            actual,
        });
    }
    Ok(())
}

pub(crate) fn ensure_remote(
    command: &'static str,
    item: &ProjectStatusItem,
) -> Result<(), TransitionError> {
    if item.is_local() {
        warn!(project_id = %item.id, command, "Remote-only transition refused for local draft");
        return Err(TransitionError::LocalOnly {
            command,
            id: item.id.clone(),
        });
    }
    Ok(())
}

/// Surface a failed remote mutation through the shared error and wrap it.
pub(crate) fn remote_failure(store: &ProjectStatusStore, err: RemoteProjectError) -> TransitionError {
    warn!(error = %err, "Remote transition failed");
    store.record_error(err.user_message());
    TransitionError::Remote(err)
}

pub(crate) async fn refresh_after(store: &ProjectStatusStore, status: UnifiedStatus) -> TransitionOutcome {
    store.invalidate(status);
    let bucket = store.fetch_by_status(status, FetchOptions::forced()).await;
    let overview = store.fetch_overview(true).await;
    TransitionOutcome {
        refreshed: bucket.is_settled() && overview.is_settled(),
    }
}
