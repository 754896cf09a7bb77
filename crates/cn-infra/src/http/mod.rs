//! Maker project API over HTTP.

mod dto;
mod remote_project_client;

pub use remote_project_client::HttpRemoteProjectClient;
