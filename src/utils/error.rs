//! Error types for boxscope

use thiserror::Error;

/// Main error type for boxscope operations
#[derive(Debug, Error)]
pub enum BoxscopeError {
    /// No tab is active in the browser window
    #[error("no active tab")]
    NoActiveTab,

    /// The overlay could not be attached to a page
    #[error("cannot inject into {url}: {reason}")]
    Injection { url: String, reason: String },

    /// A command was sent but nothing on the page side answered
    #[error("could not deliver `{action}`: {reason}")]
    Delivery { action: String, reason: String },

    /// A message on the command channel was not valid JSON for the protocol
    #[error("protocol error: {0}")]
    Protocol(#[from] serde_json::Error),

    /// Invalid inspector configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BoxscopeError {
    /// Create a delivery error for a command
    pub fn delivery(action: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Delivery {
            action: action.into(),
            reason: reason.into(),
        }
    }

    /// Whether the host UI should fall back to showing the overlay as disabled
    pub fn assumes_disabled(&self) -> bool {
        matches!(
            self,
            Self::Injection { .. } | Self::Delivery { .. } | Self::Protocol(_)
        )
    }
}

/// Convenience Result type for boxscope operations
pub type Result<T> = std::result::Result<T, BoxscopeError>;
