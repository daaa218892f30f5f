//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! via `From` impls or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// Errors produced by `evr-core` primitives.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Neither `(lon, lat)` nor `(lat, lon)` is a plausible reading of the
    /// pair.  No shape should be attempted for this position.
    #[error("coordinate pair ({a}, {b}) is out of range in either component order")]
    OutOfRange { a: f64, b: f64 },

    /// One or both components are NaN or infinite.
    #[error("coordinate pair ({a}, {b}) contains a non-finite component")]
    NonFinite { a: f64, b: f64 },
}

/// Shorthand result type for `evr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
