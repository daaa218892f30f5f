//! Update classification for host-side debouncing.
//!
//! Rapid successive input changes must not each trigger the full pipeline —
//! a marker drag emits dozens of positions per second and the service
//! strategy pays network latency for every one.  The host owns the actual
//! timer (its platform has the event loop); this module supplies the
//! policy: compare the new inputs against the previous update's key and
//! recommend a delay.
//!
//! Position is quantized to 1e-5 degrees (~1 m) and the fleet key to
//! 0.1 mi of base range, so float noise doesn't defeat the comparison.
//! Temperature and SoC are deliberately **not** part of the key: when only
//! they changed, no external call is needed and a much shorter settle time
//! keeps the slider feeling live.

use std::time::Duration;

use evr_core::{Coordinate, VehicleId};
use evr_model::VehicleRangeProfile;

/// Recommended settle time after a position or fleet change.
pub const FULL_UPDATE_DELAY: Duration = Duration::from_millis(500);

/// Recommended settle time when only temperature/SoC changed.
pub const PARAMS_ONLY_DELAY: Duration = Duration::from_millis(40);

// ── UpdateKey ─────────────────────────────────────────────────────────────────

/// Quantized fingerprint of the inputs that make an update expensive.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UpdateKey {
    position: (i64, i64),
    fleet: Vec<(VehicleId, i64)>,
}

impl UpdateKey {
    pub fn new(center: Coordinate, selections: &[VehicleRangeProfile]) -> Self {
        let mut fleet: Vec<(VehicleId, i64)> = selections
            .iter()
            .map(|s| (s.vehicle, (s.base_range_miles * 10.0).round() as i64))
            .collect();
        // Selection order is a UI accident; don't let it look like a change.
        fleet.sort_unstable();

        Self {
            position: (
                (center.lon * 1e5).round() as i64,
                (center.lat * 1e5).round() as i64,
            ),
            fleet,
        }
    }
}

// ── Classification ────────────────────────────────────────────────────────────

/// How much settle time an update deserves.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum UpdateClass {
    /// Position or fleet changed — the expensive path.
    Full,
    /// Same position and fleet; only temperature/SoC moved.
    ParamsOnly,
}

impl UpdateClass {
    pub fn delay(self) -> Duration {
        match self {
            UpdateClass::Full => FULL_UPDATE_DELAY,
            UpdateClass::ParamsOnly => PARAMS_ONLY_DELAY,
        }
    }
}

/// Stateful classifier: remembers the previous update's key.
#[derive(Default)]
pub struct Debouncer {
    last: Option<UpdateKey>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the incoming update and remember it for the next call.
    pub fn classify(
        &mut self,
        center: Coordinate,
        selections: &[VehicleRangeProfile],
    ) -> UpdateClass {
        let key = UpdateKey::new(center, selections);
        let class = match &self.last {
            Some(prev) if *prev == key => UpdateClass::ParamsOnly,
            _ => UpdateClass::Full,
        };
        self.last = Some(key);
        class
    }

    /// Forget the previous key; the next update classifies as full.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
