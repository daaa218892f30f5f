//! Ambient-temperature → range-efficiency model.
//!
//! # The model
//!
//! Battery chemistry likes a narrow band: inside `[optimal_low_f,
//! optimal_high_f]` the modifier is exactly 1.0.  Outside the band it
//! falls off linearly to a floor at each extreme:
//!
//! ```text
//!   temp_f:    cold_floor_temp .. optimal_low .. optimal_high .. hot_floor_temp
//!   modifier:  cold_floor      ↗      1.0     ──      1.0      ↘  hot_floor
//! ```
//!
//! Inputs beyond the floor temperatures are clamped first, so the function
//! is total over all finite inputs and never returns a value outside
//! `(0, MAX_MODIFIER]`.
//!
//! An older variant capped the cold slope instead of interpolating to the
//! floor (bottoming out at 0.6 rather than 0.5).  That variant is
//! deprecated and intentionally not implemented here; the two disagree and
//! must not be blended.

use crate::error::{ModelError, ModelResult};

/// Upper bound any modifier may take.  The default model never exceeds 1.0,
/// but tuned models may boost slightly above rated range in the optimal band.
pub const MAX_MODIFIER: f64 = 1.2;

// ── TempModel ─────────────────────────────────────────────────────────────────

/// Piecewise-linear temperature modifier configuration.
///
/// All breakpoints and floors are plain fields so the curve can be re-tuned
/// without touching the interpolation logic.  Construct via
/// [`TempModel::new`] (validated) or use [`TempModel::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TempModel {
    /// Temperature at which the cold floor is reached.  Default: −20 °F.
    pub cold_floor_temp_f: f64,
    /// Lower edge of the optimal band.  Default: 70 °F.
    pub optimal_low_f: f64,
    /// Upper edge of the optimal band.  Default: 75 °F.
    pub optimal_high_f: f64,
    /// Temperature at which the hot floor is reached.  Default: 120 °F.
    pub hot_floor_temp_f: f64,
    /// Modifier at `cold_floor_temp_f`.  Default: 0.5.
    pub cold_floor: f64,
    /// Modifier at `hot_floor_temp_f`.  Default: 0.85.
    pub hot_floor: f64,
}

impl Default for TempModel {
    fn default() -> Self {
        Self {
            cold_floor_temp_f: -20.0,
            optimal_low_f: 70.0,
            optimal_high_f: 75.0,
            hot_floor_temp_f: 120.0,
            cold_floor: 0.5,
            hot_floor: 0.85,
        }
    }
}

impl TempModel {
    /// Build a validated model.
    ///
    /// # Errors
    ///
    /// [`ModelError::Config`] when the breakpoints are not strictly ordered
    /// (`cold_floor_temp_f < optimal_low_f ≤ optimal_high_f <
    /// hot_floor_temp_f`) or a floor is outside `(0, MAX_MODIFIER]`.
    pub fn new(
        cold_floor_temp_f: f64,
        optimal_low_f: f64,
        optimal_high_f: f64,
        hot_floor_temp_f: f64,
        cold_floor: f64,
        hot_floor: f64,
    ) -> ModelResult<Self> {
        let model = Self {
            cold_floor_temp_f,
            optimal_low_f,
            optimal_high_f,
            hot_floor_temp_f,
            cold_floor,
            hot_floor,
        };
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> ModelResult<()> {
        let ordered = self.cold_floor_temp_f < self.optimal_low_f
            && self.optimal_low_f <= self.optimal_high_f
            && self.optimal_high_f < self.hot_floor_temp_f;
        if !ordered {
            return Err(ModelError::Config(format!(
                "temperature breakpoints out of order: {} < {} <= {} < {} does not hold",
                self.cold_floor_temp_f,
                self.optimal_low_f,
                self.optimal_high_f,
                self.hot_floor_temp_f
            )));
        }
        for floor in [self.cold_floor, self.hot_floor] {
            if !(floor > 0.0 && floor <= MAX_MODIFIER) {
                return Err(ModelError::Config(format!(
                    "modifier floor {floor} outside (0, {MAX_MODIFIER}]"
                )));
            }
        }
        Ok(())
    }

    /// The multiplicative efficiency factor for an ambient temperature.
    ///
    /// Pure and total: non-band inputs are clamped to the floor
    /// temperatures before interpolation, so every finite input maps to a
    /// value in `[min(cold_floor, hot_floor), 1.0]`.
    pub fn modifier(&self, temperature_f: f64) -> f64 {
        let t = temperature_f.clamp(self.cold_floor_temp_f, self.hot_floor_temp_f);

        if t >= self.optimal_low_f && t <= self.optimal_high_f {
            return 1.0;
        }

        if t < self.optimal_low_f {
            // Cold penalty: 1.0 at the band edge down to cold_floor.
            let span = self.optimal_low_f - self.cold_floor_temp_f;
            let below = self.optimal_low_f - t;
            return 1.0 - (1.0 - self.cold_floor) * (below / span);
        }

        // Hot penalty: 1.0 at the band edge down to hot_floor.
        let span = self.hot_floor_temp_f - self.optimal_high_f;
        let above = t - self.optimal_high_f;
        1.0 - (1.0 - self.hot_floor) * (above / span)
    }

    /// Like [`modifier`][Self::modifier] but for a temperature expressed in
    /// `unit`.
    pub fn modifier_in(&self, unit: TempUnit, temperature: f64) -> f64 {
        self.modifier(unit.to_fahrenheit(temperature))
    }
}

// ── TempUnit ──────────────────────────────────────────────────────────────────

/// Display unit for ambient temperature.  The model always computes in °F.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TempUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TempUnit {
    /// Convert a temperature in this unit to °F.
    #[inline]
    pub fn to_fahrenheit(self, temp: f64) -> f64 {
        match self {
            TempUnit::Fahrenheit => temp,
            TempUnit::Celsius => temp * 9.0 / 5.0 + 32.0,
        }
    }

    /// Convert a temperature in °F to this unit.
    #[inline]
    pub fn from_fahrenheit(self, temp_f: f64) -> f64 {
        match self {
            TempUnit::Fahrenheit => temp_f,
            TempUnit::Celsius => (temp_f - 32.0) * 5.0 / 9.0,
        }
    }

    /// Unit suffix for display: `"F"` or `"C"`.
    pub fn as_str(self) -> &'static str {
        match self {
            TempUnit::Fahrenheit => "F",
            TempUnit::Celsius => "C",
        }
    }

    /// Human-readable temperature label, e.g. `"72°F"`.
    pub fn format(self, temp: f64) -> String {
        format!("{}°{}", temp.round() as i64, self.as_str())
    }
}

impl std::fmt::Display for TempUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
