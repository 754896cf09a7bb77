//! # cn-infra
//!
//! Adapters implementing the `cn-core` ports: the HTTP client for the maker
//! project API, the JSON file draft store and the platform directory lookup.

pub mod app_dirs;
pub mod drafts;
pub mod http;

pub use app_dirs::DirsAppDirsAdapter;
pub use drafts::FileDraftStore;
pub use http::HttpRemoteProjectClient;
