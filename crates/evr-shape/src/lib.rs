//! `evr-shape` — turning an effective range into a drawable boundary.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`shape`]     | `RangeShape` (closed ring + `Accuracy` tag)               |
//! | [`circle`]    | geodesic circle generator (fallback strategy)             |
//! | [`region`]    | static `RegionProfile` table for the heuristic strategy   |
//! | [`heuristic`] | road-aware polygon: corridors, barriers, smoothing        |
//! | [`error`]     | `ShapeError`, `ShapeResult<T>`                            |
//!
//! # Design notes
//!
//! Both generators here are synchronous pure functions: coordinates in,
//! closed ring out.  Strategy selection, fallback ordering, and the
//! external-service strategy live one level up in `evr-viz`; this crate
//! doesn't know the other strategies exist.

pub mod circle;
pub mod error;
pub mod heuristic;
pub mod region;
pub mod shape;

#[cfg(test)]
mod tests;

pub use circle::{circle_shape, geodesic_circle};
pub use error::{ShapeError, ShapeResult};
pub use heuristic::{HeuristicParams, heuristic_ring, heuristic_shape};
pub use region::{Barrier, RegionProfile, region_for};
pub use shape::{Accuracy, RangeShape};
