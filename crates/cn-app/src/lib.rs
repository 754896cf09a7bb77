//! crowdnest Application Orchestration Layer
//!
//! This crate contains the project status cache store and the guarded
//! transition use cases built on top of it.

pub mod app_paths;
pub mod deps;
pub mod services;
pub mod usecases;

pub use deps::ProjectStatusDeps;
pub use services::ProjectStatusServices;
pub use usecases::project_status::{
    CancelReview, CancelScheduled, DeleteDraft, FetchOptions, FetchOutcome, ProjectStatusStore,
    StatusBoardSnapshot, StatusTab, TransitionError, TransitionOutcome,
};
