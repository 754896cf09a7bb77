//! # cn-core
//!
//! Core domain models and business logic for the crowdnest maker dashboard.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the two project status axes, the unified status resolver, wire normalization,
//! and the ports the application layer talks through.

// Public module exports
pub mod app_dirs;
pub mod config;
pub mod ids;
pub mod ports;
pub mod project;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::ProjectId;
pub use project::{
    resolve, AssetUrlResolver, ItemOrigin, LifecycleStatus, ProjectDraft, ProjectStatusItem,
    RemoteProjectRecord, ReviewStatus, StatusCountSummary, StatusFilter, UnifiedStatus,
};
