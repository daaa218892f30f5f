//! Static geographic-region profiles for the road-aware heuristic.
//!
//! A hand-tuned lookup table, not derived from real road-network data: each
//! profile biases the polygon by compass direction using coarse knowledge
//! of a region's dominant interstate corridors and hard barriers.  Entries
//! are matched by bounding box in declaration order; anywhere unmatched
//! gets [`CONTINENTAL_DEFAULT`].

use evr_core::Coordinate;

// ── Types ─────────────────────────────────────────────────────────────────────

/// A hard geographic barrier (coastline, mountain range, border) that
/// travel cannot cross, expressed as the compass bearing toward it and a
/// severity weight in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Barrier {
    pub bearing_deg: f64,
    pub severity: f64,
}

/// Axis-aligned lon/lat bounding box.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl BoundingBox {
    #[inline]
    pub fn contains(&self, c: Coordinate) -> bool {
        c.lon >= self.lon_min
            && c.lon <= self.lon_max
            && c.lat >= self.lat_min
            && c.lat <= self.lat_max
    }
}

/// Directional travel characteristics of one coarse region.
#[derive(Clone, Debug, PartialEq)]
// `Deserialize` cannot be derived: `name: &'static str` and
// `barriers: &'static [Barrier]` borrow for `'static`, which no deserializer
// can produce. The table is compile-time only; serialization (output) still works.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RegionProfile {
    pub name: &'static str,
    pub bounds: BoundingBox,
    /// Bearing of the dominant highway corridor (degrees, 0 = north).
    pub primary_bearing_deg: f64,
    /// Bearing of the secondary corridor.
    pub secondary_bearing_deg: f64,
    /// How much coastline constrains the region, `[0, 1]`.
    pub coastal_influence: f64,
    /// How much mountain terrain constrains the region, `[0, 1]`.
    pub mountain_influence: f64,
    /// Urban/charging density, `[0, 1]` — denser regions extend range.
    pub urban_density: f64,
    pub barriers: &'static [Barrier],
}

// ── Table ─────────────────────────────────────────────────────────────────────

/// Texas: east-west interstates dominate (I-10, I-20), I-35/I-45 crossing.
const TEXAS: RegionProfile = RegionProfile {
    name: "texas",
    bounds: BoundingBox { lon_min: -106.0, lon_max: -93.0, lat_min: 25.0, lat_max: 37.0 },
    primary_bearing_deg: 90.0,
    secondary_bearing_deg: 0.0,
    coastal_influence: 0.3,
    mountain_influence: 0.1,
    urban_density: 0.6,
    barriers: &[
        // Gulf coast to the south, border crossings to the southwest.
        Barrier { bearing_deg: 180.0, severity: 0.6 },
        Barrier { bearing_deg: 225.0, severity: 0.3 },
    ],
};

/// California: north-south corridors (I-5, US-101), ocean west, Sierra east.
const CALIFORNIA: RegionProfile = RegionProfile {
    name: "california",
    bounds: BoundingBox { lon_min: -125.0, lon_max: -114.0, lat_min: 32.0, lat_max: 42.0 },
    primary_bearing_deg: 0.0,
    secondary_bearing_deg: 90.0,
    coastal_influence: 0.8,
    mountain_influence: 0.7,
    urban_density: 0.8,
    barriers: &[
        Barrier { bearing_deg: 270.0, severity: 0.8 },
        Barrier { bearing_deg: 90.0, severity: 0.6 },
    ],
};

/// Florida: a peninsula — water on both sides, I-95/I-75 running north-south.
const FLORIDA: RegionProfile = RegionProfile {
    name: "florida",
    bounds: BoundingBox { lon_min: -87.0, lon_max: -80.0, lat_min: 24.0, lat_max: 31.0 },
    primary_bearing_deg: 0.0,
    secondary_bearing_deg: 90.0,
    coastal_influence: 0.9,
    mountain_influence: 0.0,
    urban_density: 0.7,
    barriers: &[
        Barrier { bearing_deg: 90.0, severity: 0.9 },
        Barrier { bearing_deg: 270.0, severity: 0.8 },
    ],
};

/// Fallback for anywhere the table doesn't cover: mild east-west bias, no
/// barriers.
pub const CONTINENTAL_DEFAULT: RegionProfile = RegionProfile {
    name: "default",
    bounds: BoundingBox { lon_min: -180.0, lon_max: 180.0, lat_min: -90.0, lat_max: 90.0 },
    primary_bearing_deg: 90.0,
    secondary_bearing_deg: 0.0,
    coastal_influence: 0.2,
    mountain_influence: 0.3,
    urban_density: 0.5,
    barriers: &[],
};

/// All tabled regions, in match order.
pub const REGIONS: &[RegionProfile] = &[TEXAS, CALIFORNIA, FLORIDA];

/// Look up the profile covering `center`.
pub fn region_for(center: Coordinate) -> &'static RegionProfile {
    REGIONS
        .iter()
        .find(|r| r.bounds.contains(center))
        .unwrap_or(&CONTINENTAL_DEFAULT)
}
