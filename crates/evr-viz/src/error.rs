//! Pipeline error type.

use thiserror::Error;

use evr_core::{CoreError, VehicleId};
use evr_model::ModelError;

/// Errors surfaced to the map host.
///
/// Service failures never appear here — they are recovered inside the
/// strategy chain.  What does surface is either a bad input (coordinate or
/// model) or the terminal case: every enabled strategy failed for one
/// vehicle.
#[derive(Debug, Error)]
pub enum VizError {
    /// The marker position was rejected by coordinate normalization.
    /// No shape was attempted.
    #[error("marker position rejected: {0}")]
    Coordinate(#[from] CoreError),

    /// Effective-range inputs failed validation for one vehicle.
    #[error("range model rejected inputs: {0}")]
    Model(#[from] ModelError),

    /// Every enabled strategy failed (or none are enabled) for this
    /// vehicle.  Other vehicles' shapes are unaffected.
    #[error("no enabled strategy produced a boundary for {0}")]
    ShapeGeneration(VehicleId),
}

/// Shorthand result type for `evr-viz`.
pub type VizResult<T> = Result<T, VizError>;
