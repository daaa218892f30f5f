//! `evr-reach` — talking to the external reachability backend.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`types`]    | wire types: requests, response envelope, `RouteType`       |
//! | [`client`]   | `ReachClient` — HTTP client for the backend proxy          |
//! | [`provider`] | `ReachabilityProvider` trait seam, `NoopProvider`          |
//! | [`budget`]   | miles → kWh energy-budget conversion                       |
//! | [`cache`]    | `BoundaryCache` trait, `TtlCache`, `NoCache`, `CacheKey`   |
//! | [`stations`] | charging-station lookup and charger classification         |
//! | [`error`]    | `ReachError`, `ReachResult<T>`                             |
//!
//! # Design notes
//!
//! The pipeline in `evr-viz` is generic over [`ReachabilityProvider`] and
//! [`BoundaryCache`], so both the transport and the caching policy can be
//! swapped at compile time with no runtime overhead — a mock provider and
//! `NoCache` in tests, `ReachClient` and `TtlCache` in the app.
//!
//! Every failure mode here is recoverable: the pipeline catches any
//! [`ReachError`] and falls through to a lower-fidelity strategy.

pub mod budget;
pub mod cache;
pub mod client;
pub mod error;
pub mod provider;
pub mod stations;
pub mod types;

#[cfg(test)]
mod tests;

pub use budget::{DEFAULT_MILES_PER_KWH, energy_budget_kwh};
pub use cache::{BoundaryCache, CacheKey, NoCache, TtlCache};
pub use client::ReachClient;
pub use error::{ReachError, ReachResult};
pub use provider::{NoopProvider, ReachabilityProvider};
pub use stations::{ChargerClass, ChargerTypeFilter, ChargingStation, ChargingStationsRequest};
pub use types::{LatLon, ReachableRangeRequest, RouteType};
