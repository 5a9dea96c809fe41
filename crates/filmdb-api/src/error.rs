//! Typed errors shared by all movie API operations.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error kinds surfaced by the awaitable API operations.
///
/// The completion-callback operations collapse every kind into an absent
/// result and never expose this type.
#[derive(Debug, Error)]
pub enum Error {
    /// No API key is configured on the service.
    ///
    /// Detected locally before any network activity.
    #[error("invalid API key: no key is configured")]
    InvalidApiKey,

    /// Network-level fault: connection errors, non-success HTTP statuses,
    /// or body read failures, without further classification.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body did not match the expected structure.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
