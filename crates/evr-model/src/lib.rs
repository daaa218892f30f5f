//! `evr-model` — range modelling: how far a trim actually goes.
//!
//! # Crate layout
//!
//! | Module          | Contents                                               |
//! |-----------------|--------------------------------------------------------|
//! | [`temperature`] | `TempModel` (piecewise-linear modifier), `TempUnit`    |
//! | [`range`]       | effective-range computation, display rounding          |
//! | [`profile`]     | `VehicleRangeProfile` — one vehicle selection          |
//! | [`trim`]        | battery/wheel trim range lookup                        |
//! | [`error`]       | `ModelError`, `ModelResult<T>`                         |
//!
//! # Design notes
//!
//! Everything here is a pure function over plain data: no I/O, no shared
//! state, no clocks.  The shape pipeline calls into this crate once per
//! update cycle and treats the results as ephemeral — effective ranges are
//! recomputed from scratch on every input change, never stored.

pub mod error;
pub mod profile;
pub mod range;
pub mod temperature;
pub mod trim;


pub use error::{ModelError, ModelResult};
pub use profile::VehicleRangeProfile;
pub use range::{display_miles, effective_range_miles};
pub use temperature::{TempModel, TempUnit};
pub use trim::VehicleVariant;
