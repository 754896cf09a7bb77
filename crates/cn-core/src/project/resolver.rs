//! Unified status resolution.
//!
//! Pure state mapping: `(lifecycle, review) -> UnifiedStatus`.
//! 纯函数：无副作用，对全部 25 种组合都有定义。

use super::status::{LifecycleStatus, ReviewStatus, UnifiedStatus};

/// Resolve the unified status of a project from its two status axes.
///
/// The match is written over the full cross-product without wildcard arms so
/// that a new variant on either axis fails to compile until it is placed.
///
/// Precedence: a rejection wins over everything, then draft and review, then
/// the publication lifecycle of approved or unreviewed projects.
pub fn resolve(lifecycle: LifecycleStatus, review: ReviewStatus) -> UnifiedStatus {
    use LifecycleStatus as L;
    use ReviewStatus as R;
    use UnifiedStatus as U;

    match (review, lifecycle) {
        (R::Rejected, L::None | L::Draft | L::Scheduled | L::Live | L::Ended) => U::Rejected,
        (R::Draft, L::None | L::Draft | L::Scheduled | L::Live | L::Ended) => U::Draft,
        (R::Review, L::None | L::Draft | L::Scheduled | L::Live | L::Ended) => U::Review,

        (R::Approved, L::Scheduled) => U::Scheduled,
        (R::Approved, L::Live) => U::Live,
        (R::Approved, L::Ended) => U::Ended,
        (R::Approved, L::None | L::Draft) => U::Approved,

        (R::None, L::Live) => U::Live,
        (R::None, L::Scheduled) => U::Scheduled,
        (R::None, L::Ended) => U::Ended,
        // Last-resort fallback for unreviewed, unpublished projects.
        // Backend semantics for this pair are unconfirmed; kept as observed.
        (R::None, L::None | L::Draft) => U::Approved,
    }
}
