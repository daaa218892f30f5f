//! Shape-subsystem error type.

use thiserror::Error;

/// Errors produced by `evr-shape`.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// A boundary with fewer than 3 distinct points encloses no area.
    #[error("boundary has {points} distinct points; a polygon needs at least 3")]
    DegenerateBoundary { points: usize },
}

/// Shorthand result type for `evr-shape`.
pub type ShapeResult<T> = Result<T, ShapeError>;
