//! Error types for authsync-client

/// Result type for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while synchronizing a manifest
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither a bootstrap secret nor a bearer token is configured.
    /// Raised before any network I/O.
    #[error("a bootstrap secret or a bearer token is required to authenticate the sync request")]
    MissingCredentials,

    /// The service answered outside the 2xx range. The raw body is
    /// kept so the failure can be diagnosed without re-running.
    #[error("auth service returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// Network-level failure (connect, timeout, TLS).
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Malformed wire payload on either side.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
