//! Deterministic per-vehicle RNG for polygon perturbation.
//!
//! # Determinism strategy
//!
//! Each vehicle selection gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (vehicle_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive vehicle IDs uniformly across the seed space.
//! This means:
//!
//! - Two vehicles never share a perturbation stream, so overlapping shapes
//!   don't wobble in lockstep.
//! - A vehicle's polygon is identical on every redraw with the same inputs —
//!   the overlay doesn't shimmer when an unrelated parameter changes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::VehicleId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-vehicle deterministic RNG.
///
/// Construct one at the start of each heuristic shape computation; it is
/// cheap and holds no heap data.
pub struct ShapeRng(SmallRng);

impl ShapeRng {
    /// Seed deterministically from the pipeline's global seed and a vehicle ID.
    pub fn new(global_seed: u64, vehicle: VehicleId) -> Self {
        let seed = global_seed ^ u64::from(vehicle.0).wrapping_mul(MIXING_CONSTANT);
        ShapeRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A symmetric jitter uniformly distributed in `[-amplitude/2, amplitude/2)`.
    #[inline]
    pub fn jitter(&mut self, amplitude: f64) -> f64 {
        self.0.gen_range(-0.5..0.5) * amplitude
    }
}
