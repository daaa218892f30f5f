//! `evr-viz` — the range-visualization pipeline.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`config`]   | `PipelineConfig`, `StrategyToggles`                       |
//! | [`pipeline`] | `RangePipeline` — strategy chain + concurrent updates     |
//! | [`store`]    | `ShapeStore` — per-vehicle shapes with last-write-wins    |
//! | [`debounce`] | update classification for host-side debouncing            |
//! | [`legend`]   | `LegendEntry`, overlay border-color derivation            |
//! | [`error`]    | `VizError`, `VizResult<T>`                                |
//!
//! # The update cycle
//!
//! The host (a map UI) calls
//! [`update_selections`][pipeline::RangePipeline::update_selections] with
//! the current vehicle selections, marker position, and ambient
//! temperature.  The pipeline:
//!
//! 1. normalizes the marker position (surfacing an error before any shape
//!    work if the pair is implausible in both component orders);
//! 2. computes each vehicle's effective range;
//! 3. runs the strategy chain per vehicle — reachability service (with
//!    boundary cache), road-aware heuristic, geodesic circle — falling
//!    through on failure;
//! 4. commits results per vehicle under last-write-wins generations, so a
//!    stale computation that finishes after a newer update (or after the
//!    vehicle was deselected) is discarded.
//!
//! All vehicles are processed concurrently on the caller's task; one
//! vehicle's failure never blocks another's shape.

pub mod config;
pub mod debounce;
pub mod error;
pub mod legend;
pub mod pipeline;
pub mod store;


pub use config::{PipelineConfig, StrategyToggles};
pub use debounce::{Debouncer, UpdateClass, UpdateKey};
pub use error::{VizError, VizResult};
pub use legend::{LegendEntry, border_color, shift_hex_color};
pub use pipeline::{RangePipeline, UpdateOutcome};
pub use store::ShapeStore;
