use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}

/// Failure of a call to the remote project service.
///
/// 远端项目服务调用失败。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteProjectError {
    /// Transport-level failure; the user may retry.
    #[error("network error: {0}")]
    Network(String),

    #[error("project not found")]
    NotFound,

    #[error("unexpected response ({status}): {message}")]
    Unexpected { status: u16, message: String },

    #[error("malformed response: {0}")]
    Decode(String),
}

impl RemoteProjectError {
    /// Human-readable message shown in the dashboard.
    ///
    /// Everything except transport failures collapses to one generic text.
    pub fn user_message(&self) -> String {
        match self {
            RemoteProjectError::Network(_) => {
                "Could not reach the project service. Check your connection and try again."
                    .to_string()
            }
            RemoteProjectError::NotFound
            | RemoteProjectError::Unexpected { .. }
            | RemoteProjectError::Decode(_) => {
                "Something went wrong while loading your projects. Please try again.".to_string()
            }
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, RemoteProjectError::Network(_))
    }
}

#[derive(Debug, Error)]
pub enum LocalDraftError {
    #[error("draft not found: {0}")]
    NotFound(String),

    #[error("draft storage is corrupt: {0}")]
    Corrupt(String),

    #[error("draft storage error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_and_unknown_share_a_generic_message() {
        let generic = RemoteProjectError::NotFound.user_message();
        assert_eq!(
            RemoteProjectError::Unexpected {
                status: 500,
                message: "boom".into()
            }
            .user_message(),
            generic
        );
        assert_eq!(RemoteProjectError::Decode("eof".into()).user_message(), generic);
        assert!(!generic.contains("boom"));
    }

    #[test]
    fn network_errors_are_transient_and_distinct() {
        let err = RemoteProjectError::Network("connection refused".into());
        assert!(err.is_transient());
        assert_ne!(err.user_message(), RemoteProjectError::NotFound.user_message());
        assert!(!RemoteProjectError::NotFound.is_transient());
    }
}
