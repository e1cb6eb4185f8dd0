//! Core error types for hourglass-core.
//!
//! The controller is tolerant by policy: toggling something already in the
//! target state, re-expanding the same menu, or arming a zero-duration
//! countdown are all normalized to no-ops. Errors are reserved for intents
//! that reference a platform with no backing entry.

use thiserror::Error;

/// Errors from session controller intents.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The platform is not in the selected-app set.
    #[error("invalid state: '{platform}' is not a selected app")]
    NotSelected { platform: String },

    /// The platform has no configured time limit.
    #[error("invalid state: no time limit configured for '{platform}'")]
    LimitNotConfigured { platform: String },
}

/// Top-level error type for hourglass-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Session intent errors
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_errors_name_the_platform() {
        let err = SessionError::NotSelected {
            platform: "Instagram".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid state: 'Instagram' is not a selected app"
        );
    }

    #[test]
    fn session_errors_convert_into_core_errors() {
        let err: CoreError = SessionError::LimitNotConfigured {
            platform: "TikTok".into(),
        }
        .into();
        assert!(err.to_string().contains("no time limit configured"));
    }
}
