pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_app_config, load_config, resolve_app_paths, resolve_config_path};
pub use wiring::build_services;
