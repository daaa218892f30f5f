//! One vehicle selection and its user-adjustable parameters.

use evr_core::VehicleId;

use crate::error::{ModelError, ModelResult};

/// Default overlay color for selections that don't specify one.
pub const DEFAULT_COLOR: &str = "#3B82F6";

/// A vehicle trim the user added to the comparison, plus the parameters
/// that scale its rated range.
///
/// The shape pipeline never mutates a profile; only explicit user
/// adjustment (slider move, trim change) does, via the setters below.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleRangeProfile {
    pub vehicle: VehicleId,

    /// Name shown in the legend, e.g. `"Ioniq 6 SE Long Range"`.
    pub display_name: String,

    /// Overlay fill color as `#rrggbb`.
    pub color: String,

    /// EPA-style rated range in miles.  Always positive.
    pub base_range_miles: f64,

    /// State-of-charge fraction in `[0, 1]`, slider-controlled.
    pub soc_fraction: f64,

    /// Usable battery capacity in kWh.  Only needed when delegating to the
    /// reachability service; heuristic and circle strategies ignore it.
    pub battery_capacity_kwh: Option<f64>,
}

impl VehicleRangeProfile {
    /// A full-charge profile with the default color and no battery data.
    pub fn new(vehicle: VehicleId, display_name: impl Into<String>, base_range_miles: f64) -> Self {
        Self {
            vehicle,
            display_name: display_name.into(),
            color: DEFAULT_COLOR.to_owned(),
            base_range_miles,
            soc_fraction: 1.0,
            battery_capacity_kwh: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_soc_fraction(mut self, soc_fraction: f64) -> Self {
        self.soc_fraction = soc_fraction;
        self
    }

    pub fn with_battery_capacity(mut self, kwh: f64) -> Self {
        self.battery_capacity_kwh = Some(kwh);
        self
    }

    /// Apply a slider adjustment.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidInput`] when `soc_fraction` is outside `[0, 1]`.
    pub fn set_soc_fraction(&mut self, soc_fraction: f64) -> ModelResult<()> {
        if !soc_fraction.is_finite() || !(0.0..=1.0).contains(&soc_fraction) {
            return Err(ModelError::InvalidInput(format!(
                "state-of-charge fraction must be in [0, 1], got {soc_fraction}"
            )));
        }
        self.soc_fraction = soc_fraction;
        Ok(())
    }
}
