//! austin — smallest example for the rust_evr range toolkit.
//!
//! Compares three trims parked in downtown Austin, Texas.  No reachability
//! backend is configured, so the pipeline exercises the heuristic and
//! circle strategies; point it at a real backend by swapping
//! `NoopProvider` for `ReachClient` and `NoCache` for `TtlCache`.

use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use evr_core::{Coordinate, VehicleId};
use evr_model::{TempUnit, VehicleRangeProfile};
use evr_reach::{NoCache, NoopProvider};
use evr_viz::{Debouncer, PipelineConfig, RangePipeline, UpdateClass, border_color};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Downtown Austin, deliberately in (lat, lon) order to show normalization.
const MARKER: [f64; 2] = [30.267, -97.743];

/// A cold snap for the second update.
const COLD_TEMP_F: f64 = 20.0;

fn fleet() -> Vec<VehicleRangeProfile> {
    vec![
        VehicleRangeProfile::new(VehicleId(1), "Model 3 Long Range", 341.0)
            .with_color("#e11d48")
            .with_battery_capacity(79.0),
        VehicleRangeProfile::new(VehicleId(2), "Ioniq 6 SE", 361.0)
            .with_color("#0ea5e9")
            .with_battery_capacity(77.4),
        VehicleRangeProfile::new(VehicleId(3), "F-150 Lightning", 230.0)
            .with_color("#f59e0b")
            .with_soc_fraction(0.8)
            .with_battery_capacity(98.0),
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut pipeline = RangePipeline::new(PipelineConfig::default(), NoopProvider, NoCache);
    let mut debouncer = Debouncer::new();
    let fleet = fleet();

    // ── First update: mild weather ────────────────────────────────────────
    let center = Coordinate::normalize(MARKER)?;
    let class = debouncer.classify(center, &fleet);
    println!(
        "update 1: marker {center} ({}ms settle), {}",
        class.delay().as_millis(),
        TempUnit::Fahrenheit.format(72.0),
    );

    let outcome = pipeline
        .update_selections(&fleet, MARKER, Some(72.0), Instant::now())
        .await?;
    print_outcome(&outcome)?;

    // ── Second update: same pin, cold snap ────────────────────────────────
    let class = debouncer.classify(center, &fleet);
    assert_eq!(class, UpdateClass::ParamsOnly);
    println!(
        "\nupdate 2: pin unchanged ({}ms settle) — {}",
        class.delay().as_millis(),
        TempUnit::Fahrenheit.format(COLD_TEMP_F),
    );

    let outcome = pipeline
        .update_selections(&fleet, MARKER, Some(COLD_TEMP_F), Instant::now())
        .await?;
    print_outcome(&outcome)?;

    Ok(())
}

fn print_outcome(outcome: &evr_viz::UpdateOutcome) -> Result<()> {
    for entry in &outcome.legend {
        println!("  {}", serde_json::to_string(entry)?);
        println!(
            "    border (dark basemap): {}",
            border_color(&entry.color, true)
        );
    }
    for (vehicle, shape) in &outcome.shapes {
        println!(
            "  {vehicle}: {} ring vertices via {}",
            shape.len(),
            shape.accuracy()
        );
    }
    for (vehicle, error) in &outcome.failures {
        println!("  {vehicle}: FAILED — {error}");
    }
    Ok(())
}
