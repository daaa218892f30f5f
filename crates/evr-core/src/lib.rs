//! `evr-core` — foundational types for the `rust_evr` range-estimation toolkit.
//!
//! This crate is a dependency of every other `evr-*` crate.  It intentionally
//! has no `evr-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                            |
//! |-----------|-----------------------------------------------------|
//! | [`coord`] | `Coordinate`, lat/lon order normalization           |
//! | [`geo`]   | haversine distance, great-circle destination point  |
//! | [`ids`]   | `VehicleId`, `Generation`                           |
//! | [`rng`]   | `ShapeRng` (per-vehicle deterministic RNG)          |
//! | [`error`] | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod coord;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::Coordinate;
pub use error::{CoreError, CoreResult};
pub use ids::{Generation, VehicleId};
pub use rng::ShapeRng;
