//! Reachability-subsystem error type.
//!
//! Every variant is recoverable from the pipeline's point of view — the
//! strategy chain treats any `ReachError` as "this strategy failed" and
//! falls through to a lower-fidelity generator.

use thiserror::Error;

/// Errors returned by the reachability client and provider seam.
#[derive(Debug, Error)]
pub enum ReachError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend envelope reported failure.
    #[error("reachability backend error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The boundary came back with too few points to form a polygon.
    #[error("malformed boundary: {points} points, need at least 3")]
    MalformedBoundary { points: usize },

    /// No reachability backend is configured ([`crate::NoopProvider`]).
    #[error("reachability service is not configured")]
    Disabled,
}

/// Shorthand result type for `evr-reach`.
pub type ReachResult<T> = Result<T, ReachError>;
