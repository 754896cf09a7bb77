//! Remote query filter per unified status.

use serde::{Deserialize, Serialize};

use super::status::{LifecycleStatus, ReviewStatus, UnifiedStatus};

/// `(lifecycle, review)` filter sent to the remote project listing.
///
/// `None` on an axis means "any value".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusFilter {
    pub lifecycle: Option<LifecycleStatus>,
    pub review: Option<ReviewStatus>,
}

impl StatusFilter {
    /// Fixed lookup table from a status bucket to its remote query.
    pub fn for_status(status: UnifiedStatus) -> Self {
        let (lifecycle, review) = match status {
            UnifiedStatus::Draft => (Some(LifecycleStatus::Draft), ReviewStatus::None),
            UnifiedStatus::Review => (Some(LifecycleStatus::Draft), ReviewStatus::Review),
            UnifiedStatus::Approved => (Some(LifecycleStatus::Draft), ReviewStatus::Approved),
            UnifiedStatus::Scheduled => (Some(LifecycleStatus::Scheduled), ReviewStatus::Approved),
            UnifiedStatus::Live => (Some(LifecycleStatus::Live), ReviewStatus::Approved),
            UnifiedStatus::Ended => (Some(LifecycleStatus::Ended), ReviewStatus::Approved),
            UnifiedStatus::Rejected => (None, ReviewStatus::Rejected),
        };
        Self {
            lifecycle,
            review: Some(review),
        }
    }
}
