//! Effective-range computation.

use crate::error::{ModelError, ModelResult};

/// Combine a rated range with state of charge and the temperature modifier.
///
/// Returns `base_range_miles * soc_fraction * temp_modifier` at full
/// precision; use [`display_miles`] when presenting the result.
///
/// UI constraints are expected to keep the slider in `[0, 1]` and catalog
/// data positive; a failure here indicates a caller bug, not a recoverable
/// runtime condition.
///
/// # Errors
///
/// [`ModelError::InvalidInput`] if `base_range_miles ≤ 0`, `soc_fraction`
/// is outside `[0, 1]`, `temp_modifier ≤ 0`, or any input is non-finite.
pub fn effective_range_miles(
    base_range_miles: f64,
    soc_fraction: f64,
    temp_modifier: f64,
) -> ModelResult<f64> {
    if !base_range_miles.is_finite() || base_range_miles <= 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "base range must be a positive number of miles, got {base_range_miles}"
        )));
    }
    if !soc_fraction.is_finite() || !(0.0..=1.0).contains(&soc_fraction) {
        return Err(ModelError::InvalidInput(format!(
            "state-of-charge fraction must be in [0, 1], got {soc_fraction}"
        )));
    }
    if !temp_modifier.is_finite() || temp_modifier <= 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "temperature modifier must be positive, got {temp_modifier}"
        )));
    }
    Ok(base_range_miles * soc_fraction * temp_modifier)
}

/// Round an effective range to whole miles for display.
///
/// Display only — internal computations keep full precision.
#[inline]
pub fn display_miles(miles: f64) -> i64 {
    miles.round() as i64
}
