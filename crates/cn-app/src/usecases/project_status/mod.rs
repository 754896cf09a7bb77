//! Project status use cases
//! 项目状态相关用例
//!
//! The store serves the dashboard reads; the three transition commands are
//! pessimistic: they never touch a bucket before the remote service confirms,
//! then invalidate and refetch from source.

mod cancel_review;
mod cancel_scheduled;
mod delete_draft;
mod store;
mod transition;

#[cfg(test)]
mod test_support;

pub use cancel_review::CancelReview;
pub use cancel_scheduled::CancelScheduled;
pub use delete_draft::DeleteDraft;
pub use store::{FetchOptions, FetchOutcome, ProjectStatusStore, StatusBoardSnapshot, StatusTab};
pub use transition::{TransitionError, TransitionOutcome};
