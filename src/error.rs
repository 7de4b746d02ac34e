use thiserror::Error;

/// Guidance shown when the backend gave no interpretable answer.
pub const UNREACHABLE_MESSAGE: &str =
    "Failed to analyze changes. Make sure the backend is running and you have staged changes.";

/// Failures surfaced to the user. Raw transport errors never get past the
/// gateway; they are logged there and folded into one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The server answered with a structured `detail`, shown verbatim.
    #[error("{0}")]
    Remote(String),

    /// No interpretable response: network down, malformed payload, backend not running.
    #[error("{}", UNREACHABLE_MESSAGE)]
    Unreachable,

    /// Non-fatal. Reported as a transient notice, never through the session state.
    #[error("Could not copy to clipboard: {0}")]
    ClipboardFailure(String),
}

impl ErrorKind {
    /// Build a `Remote` error, degrading to `Unreachable` when the detail is
    /// blank so the user always sees a readable message.
    pub fn remote(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        if detail.trim().is_empty() {
            ErrorKind::Unreachable
        } else {
            ErrorKind::Remote(detail)
        }
    }

    /// Human-readable text for display. Never empty.
    pub fn detail(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("History limit must be a positive integer, got {0}")]
    NonPositiveHistoryLimit(u32),
}

impl From<ConfigError> for String {
    fn from(err: ConfigError) -> Self {
        err.to_string()
    }
}
