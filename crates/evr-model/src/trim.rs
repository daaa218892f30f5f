//! Rated-range lookup across a variant's battery/wheel trims.
//!
//! Catalog data maps battery pack → wheel type → rated miles.  Wheel names
//! in listings are free text ("20\" Induction Wheels"), so the lookup does a
//! case-insensitive substring match against the map's wheel-type keys.

use std::collections::HashMap;

/// One catalog variant of a vehicle model.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleVariant {
    pub name: String,

    /// Flat rated range when the variant has no per-trim breakdown.
    pub range_miles: Option<f64>,

    /// Battery pack name → (wheel type → rated miles).
    pub range_maps: HashMap<String, HashMap<String, f64>>,
}

impl VehicleVariant {
    /// The key used when the caller passes an empty battery name.
    const DEFAULT_BATTERY_KEY: &'static str = "battery";

    /// Resolve the rated range for a battery/wheel trim selection.
    ///
    /// Falls back to the variant's flat [`range_miles`][Self::range_miles]
    /// when the battery has no map or no wheel type matches; returns `None`
    /// only when the variant has no range data at all.
    pub fn range_for_trim(&self, battery: &str, wheel_name: &str) -> Option<f64> {
        let battery_key = if battery.is_empty() {
            Self::DEFAULT_BATTERY_KEY
        } else {
            battery
        };

        let Some(mapping) = self.range_maps.get(battery_key) else {
            return self.range_miles;
        };

        let wheel_lower = wheel_name.to_lowercase();
        for (wheel_type, &miles) in mapping {
            if wheel_lower.contains(&wheel_type.to_lowercase()) {
                return Some(miles);
            }
        }

        self.range_miles
    }
}
