//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the status engine to remain independent of the
//! HTTP client and of the draft file format.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port to `cn-core/ports`, ask yourself three questions:
//!
//! 1. **Does this port represent a business capability?**
//! 2. **Will it be depended upon by multiple use cases or domains?**
//! 3. **Is it implemented by the infrastructure layer?**
//!
//! If all three answers are **yes**, place it in `cn-core/ports`.

pub mod app_dirs;
pub mod errors;
pub mod local_draft;
pub mod remote_project;

pub use app_dirs::AppDirsPort;
pub use errors::{AppDirsError, LocalDraftError, RemoteProjectError};
pub use local_draft::LocalDraftStorePort;
pub use remote_project::RemoteProjectPort;
