//! Charging-station lookup and charger-class heuristics.
//!
//! The backend's station search is keyword-soup: vendor categories and
//! station names are free text, so charger classes are inferred from
//! keyword matches the same way the search UI buckets its filters.

use serde::{Deserialize, Serialize};

use evr_core::Coordinate;

use crate::client::ReachClient;
use crate::error::ReachResult;

/// Meters per statute mile, for radius conversion.
pub const METERS_PER_MILE: f64 = 1609.34;

/// Default maximum stations per class fetch.
pub const DEFAULT_STATION_LIMIT: u32 = 100;

// ── Wire types ────────────────────────────────────────────────────────────────

/// Server-side charger-type filter accepted by the station search.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargerTypeFilter {
    Fast,
    Level2,
    Level1,
    All,
}

/// Request body for the charging-stations endpoint.  `radius` is meters.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingStationsRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
    pub limit: u32,
    pub charger_type: ChargerTypeFilter,
}

/// One station as returned by the backend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChargingStation {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Straight-line distance from the query point, meters.
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct StationsData {
    pub stations: Vec<ChargingStation>,
}

impl ChargingStation {
    /// Infer this station's charger class from its name and categories.
    pub fn charger_class(&self) -> ChargerClass {
        ChargerClass::classify(&self.name, &self.categories)
    }
}

// ── Classification ────────────────────────────────────────────────────────────

/// Inferred charging speed class.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ChargerClass {
    /// DC fast charging (superchargers, rapid chargers).
    Fast,
    /// Level 2 AC (public/destination charging).
    Level2,
    /// Level 1 or unidentifiable.
    Level1,
}

impl ChargerClass {
    const FAST_KEYWORDS: &'static [&'static str] = &["supercharger", "fast", "dc", "rapid"];
    const LEVEL2_KEYWORDS: &'static [&'static str] =
        &["level 2", "public", "ac", "destination"];

    /// Keyword-bucket a station.  Fast wins over Level 2; anything
    /// unmatched is Level 1.
    pub fn classify(name: &str, categories: &[String]) -> ChargerClass {
        let name = name.to_lowercase();
        let cats = categories.join(" ").to_lowercase();

        let matches = |keywords: &[&str]| {
            keywords
                .iter()
                .any(|k| name.contains(k) || cats.contains(k))
        };

        if matches(Self::FAST_KEYWORDS) {
            ChargerClass::Fast
        } else if matches(Self::LEVEL2_KEYWORDS) {
            ChargerClass::Level2
        } else {
            ChargerClass::Level1
        }
    }
}

// ── Client methods ────────────────────────────────────────────────────────────

impl ReachClient {
    /// Fetches stations for a single filter.
    ///
    /// # Errors
    ///
    /// Same failure modes as
    /// [`reachable_range`][ReachClient::reachable_range].
    pub async fn charging_stations(
        &self,
        request: &ChargingStationsRequest,
    ) -> ReachResult<Vec<ChargingStation>> {
        let data: StationsData = self.post_json("charging-stations", request).await?;
        Ok(data.stations)
    }

    /// Fetches stations around `center` for every filter in `filters`,
    /// deduplicated by station ID.
    ///
    /// One filter's failure is logged and skipped rather than failing the
    /// whole sweep; an empty `filters` slice fetches all classes.
    pub async fn stations_near(
        &self,
        center: Coordinate,
        radius_miles: f64,
        filters: &[ChargerTypeFilter],
    ) -> Vec<ChargingStation> {
        const ALL_CLASSES: &[ChargerTypeFilter] = &[ChargerTypeFilter::All];
        let filters = if filters.is_empty() { ALL_CLASSES } else { filters };

        let mut stations: Vec<ChargingStation> = Vec::new();
        for &filter in filters {
            let request = ChargingStationsRequest {
                latitude: center.lat,
                longitude: center.lon,
                radius: radius_miles * METERS_PER_MILE,
                limit: DEFAULT_STATION_LIMIT,
                charger_type: filter,
            };
            match self.charging_stations(&request).await {
                Ok(batch) => {
                    for station in batch {
                        if !stations.iter().any(|s| s.id == station.id) {
                            stations.push(station);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(?filter, error = %e, "station fetch failed; skipping class");
                }
            }
        }
        stations
    }
}
