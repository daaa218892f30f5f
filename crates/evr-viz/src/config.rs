//! Pipeline configuration.
//!
//! Everything tunable lives here as plain data handed to
//! [`RangePipeline::new`][crate::RangePipeline::new] — no globals, no
//! environment reads.  The application crate decides where values come
//! from (file, env, hard-coded defaults); the pipeline only consumes them.

use std::time::Duration;

use evr_model::TempModel;
use evr_reach::{RouteType, TtlCache};
use evr_shape::{HeuristicParams, circle::DEFAULT_STEPS};

/// Which shape strategies the fallback chain may attempt, in fixed order:
/// service → heuristic → circle.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyToggles {
    pub service: bool,
    pub heuristic: bool,
    pub circle: bool,
}

impl Default for StrategyToggles {
    fn default() -> Self {
        Self {
            service: true,
            heuristic: true,
            circle: true,
        }
    }
}

/// Top-level pipeline configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipelineConfig {
    pub strategies: StrategyToggles,

    /// Temperature → efficiency model used for effective range.
    pub temp_model: TempModel,

    /// Routing preference forwarded to the reachability service.
    pub route_type: RouteType,

    /// Boundary-cache time-to-live.  Only consulted by whoever constructs
    /// the cache; the pipeline itself is cache-implementation agnostic.
    pub cache_ttl: Duration,

    /// Heuristic-polygon tunables (sample count, perturbation amplitude).
    pub heuristic: HeuristicParams,

    /// Geodesic-circle step count.
    pub circle_steps: usize,

    /// Seed for the per-vehicle perturbation RNG.
    pub seed: u64,

    /// Fleet-average efficiency for the energy-budget conversion.
    pub miles_per_kwh: f64,

    /// Battery capacity assumed when a profile doesn't carry one.
    pub default_battery_kwh: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            strategies: StrategyToggles::default(),
            temp_model: TempModel::default(),
            route_type: RouteType::Eco,
            cache_ttl: TtlCache::DEFAULT_TTL,
            heuristic: HeuristicParams::default(),
            circle_steps: DEFAULT_STEPS,
            seed: 0,
            miles_per_kwh: evr_reach::DEFAULT_MILES_PER_KWH,
            default_battery_kwh: 100.0,
        }
    }
}
