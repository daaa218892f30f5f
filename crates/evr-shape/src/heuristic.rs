//! Road-aware polygon: the mid-fidelity strategy.
//!
//! Samples evenly spaced compass bearings around the center and scales the
//! effective range independently along each: boosted along the region's
//! highway corridors and in dense urban areas, pulled in toward coastlines,
//! mountains, and borders, with a small bounded jitter so the outline reads
//! as organic rather than mathematical.  The ring is closed and smoothed
//! with one pass of neighbor averaging.

use evr_core::{Coordinate, ShapeRng, geo};

use crate::error::ShapeResult;
use crate::region::{RegionProfile, region_for};
use crate::shape::{Accuracy, RangeShape};

// ── Weighting constants ───────────────────────────────────────────────────────

/// Maximum range boost for perfect alignment with the primary corridor.
const CORRIDOR_BOOST: f64 = 0.25;
/// Secondary corridor counts at 70 % of the primary.
const SECONDARY_WEIGHT: f64 = 0.7;
/// Scale applied to `barrier.severity` at perfect alignment.
const BARRIER_WEIGHT: f64 = 0.35;
/// Flat penalties applied when a terrain influence exceeds the threshold.
const COASTAL_PENALTY: f64 = 0.1;
const MOUNTAIN_PENALTY: f64 = 0.15;
const INFLUENCE_THRESHOLD: f64 = 0.5;
/// Boost per unit of urban density.
const URBAN_BOOST: f64 = 0.08;
/// Final multiplier bounds — keeps even heavily penalized or boosted
/// bearings within a plausible band of the effective range.
const MULTIPLIER_MIN: f64 = 0.5;
const MULTIPLIER_MAX: f64 = 1.4;

// ── Parameters ────────────────────────────────────────────────────────────────

/// Tunables for the heuristic generator.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeuristicParams {
    /// Number of bearings sampled.  24 balances smoothness and cost.
    pub sample_count: usize,
    /// Total width of the uniform jitter applied to each multiplier.
    pub perturbation_amplitude: f64,
}

impl Default for HeuristicParams {
    fn default() -> Self {
        Self {
            sample_count: 24,
            perturbation_amplitude: 0.08,
        }
    }
}

// ── Generator ─────────────────────────────────────────────────────────────────

/// Angular alignment of two bearings: 1.0 when parallel, falling linearly
/// to 0.0 at 90° apart and staying 0.0 beyond.
pub fn alignment(a_deg: f64, b_deg: f64) -> f64 {
    let diff = ((a_deg - b_deg + 180.0).rem_euclid(360.0) - 180.0).abs();
    (1.0 - diff / 90.0).max(0.0)
}

fn bearing_multiplier(
    bearing_deg: f64,
    region: &RegionProfile,
    params: HeuristicParams,
    rng: &mut ShapeRng,
) -> f64 {
    let mut multiplier = 1.0;

    // Highway corridor boost.
    let primary = alignment(bearing_deg, region.primary_bearing_deg);
    let secondary = alignment(bearing_deg, region.secondary_bearing_deg);
    multiplier += primary.max(secondary * SECONDARY_WEIGHT) * CORRIDOR_BOOST;

    // Hard barriers pull the boundary in toward themselves.
    for barrier in region.barriers {
        multiplier -= alignment(bearing_deg, barrier.bearing_deg) * barrier.severity * BARRIER_WEIGHT;
    }

    // Terrain drag and urban boost.
    if region.coastal_influence > INFLUENCE_THRESHOLD {
        multiplier -= region.coastal_influence * COASTAL_PENALTY;
    }
    if region.mountain_influence > INFLUENCE_THRESHOLD {
        multiplier -= region.mountain_influence * MOUNTAIN_PENALTY;
    }
    multiplier += region.urban_density * URBAN_BOOST;

    multiplier += rng.jitter(params.perturbation_amplitude);

    multiplier.clamp(MULTIPLIER_MIN, MULTIPLIER_MAX)
}

/// Generate the closed, smoothed heuristic ring.
///
/// The region profile is chosen from the center position; the per-bearing
/// jitter comes from `rng`, so the same (seed, vehicle, inputs) always
/// produce the same ring.
pub fn heuristic_ring(
    center: Coordinate,
    effective_range_mi: f64,
    params: HeuristicParams,
    rng: &mut ShapeRng,
) -> Vec<Coordinate> {
    let region = region_for(center);
    let step_deg = 360.0 / params.sample_count as f64;

    let mut ring = Vec::with_capacity(params.sample_count + 1);
    for i in 0..params.sample_count {
        let bearing = step_deg * i as f64;
        let multiplier = bearing_multiplier(bearing, region, params, rng);
        ring.push(geo::destination(center, effective_range_mi * multiplier, bearing));
    }
    ring.push(ring[0]);

    smooth_ring(&ring)
}

/// [`heuristic_ring`] wrapped into a tagged [`RangeShape`].
///
/// # Errors
///
/// [`crate::ShapeError::DegenerateBoundary`] when `params.sample_count < 3`.
pub fn heuristic_shape(
    center: Coordinate,
    effective_range_mi: f64,
    params: HeuristicParams,
    rng: &mut ShapeRng,
) -> ShapeResult<RangeShape> {
    RangeShape::new(
        heuristic_ring(center, effective_range_mi, params, rng),
        Accuracy::Heuristic,
    )
}

/// One pass of neighbor averaging (weights 1-2-1) over a closed ring.
///
/// Removes the sharp corners the independent per-bearing multipliers leave
/// behind.  Rings too small to smooth are returned unchanged.
fn smooth_ring(ring: &[Coordinate]) -> Vec<Coordinate> {
    if ring.len() < 4 {
        return ring.to_vec();
    }

    let len = ring.len();
    let mut smoothed = Vec::with_capacity(len);
    for i in 0..len - 1 {
        // Wrap across the closure point: the neighbor before index 0 is the
        // last distinct point, not the duplicate closing point.
        let prev = ring[if i == 0 { len - 2 } else { i - 1 }];
        let curr = ring[i];
        let next = ring[i + 1];
        smoothed.push(Coordinate::new(
            (prev.lon + curr.lon * 2.0 + next.lon) / 4.0,
            (prev.lat + curr.lat * 2.0 + next.lat) / 4.0,
        ));
    }
    smoothed.push(smoothed[0]);
    smoothed
}
