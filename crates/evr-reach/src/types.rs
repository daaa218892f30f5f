//! Wire types for the reachability backend.
//!
//! Field names follow the backend's camelCase JSON; the odd
//! `energyBudgetInkWh` spelling is the service's, preserved verbatim.

use serde::{Deserialize, Serialize};

// ── RouteType ─────────────────────────────────────────────────────────────────

/// Routing preference forwarded to the reachability computation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    /// Energy-optimal routing — the sensible default for range estimates.
    #[default]
    Eco,
    Fast,
    Shortest,
}

impl RouteType {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteType::Eco => "eco",
            RouteType::Fast => "fast",
            RouteType::Shortest => "shortest",
        }
    }
}

impl std::fmt::Display for RouteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Request / response ────────────────────────────────────────────────────────

/// A `(latitude, longitude)` pair as the backend spells it.
///
/// Note the order is the reverse of [`evr_core::Coordinate`]; conversion
/// happens at the client boundary and nowhere else.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
}

/// Request body for the reachable-range endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReachableRangeRequest {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "energyBudgetInkWh")]
    pub energy_budget_kwh: f64,
    pub route_type: RouteType,
}

/// Response envelope every backend endpoint wraps its payload in.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReachableRangeData {
    pub reachable_range: ReachableRange,
}

// The backend also echoes a `center` field; it carries no information the
// caller didn't supply, so it is not modelled here.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ReachableRange {
    pub boundary: Vec<LatLon>,
}
