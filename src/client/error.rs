//! Error types for the RSS Reader client.
//!
//! Every request failure surfaces as one [`Error`] variant. Nothing is
//! retried or recovered internally; callers match on the variant they care
//! about (e.g. [`Error::Authentication`] to prompt for a new key) and let the
//! rest propagate.

/// A failure while talking to the RSS Reader API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transport never produced an HTTP response (DNS failure,
    /// connection refused, timeout).
    #[error("failed to connect to the RSS Reader API: {0}")]
    Connection(#[source] reqwest::Error),

    /// The server rejected the credentials. Raised for the configured
    /// authentication status codes (401 and 403 by default) instead of the
    /// generic [`Error::Api`].
    #[error("authentication failed (status {status}): {message}")]
    Authentication { status: u16, message: String },

    /// The server responded with a non-success status outside the
    /// authentication range. `message` is taken from the response body's
    /// `error` or `message` field when the server provides one.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The server responded successfully but the body did not match the
    /// expected shape.
    #[error("failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status code carried by this error, if a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Authentication { status, .. } | Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the client.
pub type Result<T> = std::result::Result<T, Error>;
