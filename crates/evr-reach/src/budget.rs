//! Converting an adjusted range in miles to a service energy budget in kWh.
//!
//! The effective range handed to the pipeline already folds in state of
//! charge and temperature, so the conversion must not re-apply them — it is
//! a straight divide by fleet-average efficiency, with a safety cap so a
//! bad catalog entry can't request an absurd budget.

/// Fleet-average EV efficiency in miles per kWh.
///
/// Tunable via `PipelineConfig`; 4.0 matches the efficiency assumption the
/// effective-range model was calibrated against.
pub const DEFAULT_MILES_PER_KWH: f64 = 4.0;

/// Budget ceiling as a multiple of the pack's capacity.
const MAX_CAPACITY_MULTIPLE: f64 = 2.0;

/// Energy needed to drive `adjusted_range_miles`, capped at
/// `2 × battery_capacity_kwh`.
pub fn energy_budget_kwh(
    adjusted_range_miles: f64,
    battery_capacity_kwh: f64,
    miles_per_kwh: f64,
) -> f64 {
    let budget = adjusted_range_miles / miles_per_kwh;
    budget.min(battery_capacity_kwh * MAX_CAPACITY_MULTIPLE)
}
