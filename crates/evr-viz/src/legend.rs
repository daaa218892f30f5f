//! Legend metadata handed to the map host alongside the shapes.

use evr_core::VehicleId;
use evr_shape::Accuracy;

/// One legend row: identity, styling, and the figures the user cares about.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegendEntry {
    pub vehicle: VehicleId,
    pub display_name: String,
    /// Overlay fill color, `#rrggbb`.
    pub color: String,
    /// Effective range rounded to whole miles for display.
    pub effective_range_miles: i64,
    /// Which strategy produced the shape — shown so users can judge how
    /// literally to take the boundary.
    pub accuracy: Accuracy,
}

// ── Color helpers ─────────────────────────────────────────────────────────────

/// Lighten (positive `amount`) or darken (negative) a `#rrggbb` color,
/// clamping each channel to `[0, 255]`.
///
/// Returns `None` when `hex` isn't a 6-digit hex color.
pub fn shift_hex_color(hex: &str, amount: i32) -> Option<String> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;

    let shift = |channel: u32| -> u32 {
        (channel as i32 + amount).clamp(0, 255) as u32
    };

    let r = shift((value >> 16) & 0xff);
    let g = shift((value >> 8) & 0xff);
    let b = shift(value & 0xff);

    Some(format!("#{:06x}", (r << 16) | (g << 8) | b))
}

/// Border color for an overlay: lightened on dark basemaps, darkened on
/// light ones, so the outline stays visible against the fill.
///
/// Falls back to the fill itself when the color can't be parsed.
pub fn border_color(fill: &str, dark_mode: bool) -> String {
    let amount = if dark_mode { 30 } else { -30 };
    shift_hex_color(fill, amount).unwrap_or_else(|| fill.to_owned())
}
