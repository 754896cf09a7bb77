//! Business logic use cases
//!
//! [UI consumer]
//!         ↓
//! ProjectStatusStore::fetch_overview / fetch_by_status  → cached buckets, counts
//! ---------------------------------
//!         ↓
//! DeleteDraft / CancelReview / CancelScheduled           → remote mutation, then refresh

pub mod project_status;
