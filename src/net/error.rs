//! Error taxonomy for remote calls.
//!
//! No retry or timeout policy exists: every error is terminal to the
//! current user action and is surfaced verbatim as a blocking alert.

/// Failure of a single remote call against the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with an error envelope; the message is shown
    /// to the user as-is.
    #[error("{0}")]
    Backend(String),

    /// The request never got an answer.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered but the body was not the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Remote calls are only available in the browser build.
    #[error("backend not available outside the browser")]
    Unavailable,
}
