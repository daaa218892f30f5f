//! The `RangePipeline` — strategy chain and concurrent per-vehicle updates.

use std::time::Instant;

use futures::future;

use evr_core::{Coordinate, Generation, ShapeRng, VehicleId};
use evr_model::{VehicleRangeProfile, display_miles, effective_range_miles};
use evr_reach::{
    BoundaryCache, CacheKey, ReachError, ReachabilityProvider, ReachableRangeRequest,
    energy_budget_kwh,
};
use evr_shape::{Accuracy, RangeShape, circle_shape, heuristic_shape};

use crate::config::PipelineConfig;
use crate::error::{VizError, VizResult};
use crate::legend::LegendEntry;
use crate::store::ShapeStore;

// ── UpdateOutcome ─────────────────────────────────────────────────────────────

/// What one update cycle produced, keyed by vehicle.
///
/// `shapes` and `legend` cover the vehicles whose results committed this
/// cycle; `failures` lists vehicles for which every enabled strategy
/// failed.  A vehicle superseded mid-flight appears in neither — its newer
/// update will report it.
#[derive(Debug, Default)]
pub struct UpdateOutcome {
    pub shapes: Vec<(VehicleId, RangeShape)>,
    pub legend: Vec<LegendEntry>,
    pub failures: Vec<(VehicleId, VizError)>,
}

// ── RangePipeline ─────────────────────────────────────────────────────────────

/// The shape-generation pipeline.
///
/// # Type parameters
///
/// `P` is the reachability seam ([`evr_reach::ReachClient`] in the app,
/// a scripted provider in tests, [`evr_reach::NoopProvider`] when no
/// backend is configured).  `C` is the boundary cache
/// ([`evr_reach::TtlCache`] or [`evr_reach::NoCache`]).  Both are resolved
/// at compile time — swapping them costs nothing at runtime.
///
/// # Concurrency
///
/// Methods take the caller's task; the only suspension point is the
/// provider call.  Dropping a returned future cancels the in-flight
/// request.  `update_selections` runs all vehicles concurrently and
/// commits each result independently.
pub struct RangePipeline<P, C> {
    config: PipelineConfig,
    provider: P,
    cache: C,
    store: ShapeStore,
}

impl<P: ReachabilityProvider, C: BoundaryCache> RangePipeline<P, C> {
    pub fn new(config: PipelineConfig, provider: P, cache: C) -> Self {
        Self {
            config,
            provider,
            cache,
            store: ShapeStore::new(),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The committed shapes, for hosts that re-render from pipeline state.
    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    // ── Single-vehicle generation ─────────────────────────────────────────

    /// Generate a shape for one vehicle without touching the store.
    ///
    /// `ambient_temp_f` of `None` means temperature adjustment is switched
    /// off (modifier 1.0).  `now` drives cache expiry; pass
    /// `Instant::now()` outside tests.
    ///
    /// # Errors
    ///
    /// [`VizError::Model`] for invalid profile numbers,
    /// [`VizError::ShapeGeneration`] when every enabled strategy failed.
    pub async fn generate_shape(
        &self,
        profile: &VehicleRangeProfile,
        center: Coordinate,
        ambient_temp_f: Option<f64>,
        now: Instant,
    ) -> VizResult<RangeShape> {
        self.compute_shape(profile, center, ambient_temp_f, now)
            .await
            .map(|(shape, _)| shape)
    }

    /// Shape plus the effective range that sized it (for legend assembly).
    async fn compute_shape(
        &self,
        profile: &VehicleRangeProfile,
        center: Coordinate,
        ambient_temp_f: Option<f64>,
        now: Instant,
    ) -> VizResult<(RangeShape, f64)> {
        let modifier = ambient_temp_f.map_or(1.0, |t| self.config.temp_model.modifier(t));
        let effective =
            effective_range_miles(profile.base_range_miles, profile.soc_fraction, modifier)?;

        if self.config.strategies.service {
            match self.try_service(profile, center, effective, now).await {
                Ok(shape) => return Ok((shape, effective)),
                Err(e) => {
                    tracing::warn!(
                        vehicle = %profile.vehicle,
                        error = %e,
                        "reachability strategy failed; falling back"
                    );
                }
            }
        }

        if self.config.strategies.heuristic {
            let mut rng = ShapeRng::new(self.config.seed, profile.vehicle);
            match heuristic_shape(center, effective, self.config.heuristic, &mut rng) {
                Ok(shape) => return Ok((shape, effective)),
                Err(e) => {
                    tracing::warn!(
                        vehicle = %profile.vehicle,
                        error = %e,
                        "heuristic strategy failed; falling back"
                    );
                }
            }
        }

        if self.config.strategies.circle {
            match circle_shape(center, effective, self.config.circle_steps) {
                Ok(shape) => return Ok((shape, effective)),
                Err(e) => {
                    tracing::warn!(vehicle = %profile.vehicle, error = %e, "circle strategy failed");
                }
            }
        }

        Err(VizError::ShapeGeneration(profile.vehicle))
    }

    /// Strategy 1: cache lookup, then the external service.
    async fn try_service(
        &self,
        profile: &VehicleRangeProfile,
        center: Coordinate,
        effective_range_mi: f64,
        now: Instant,
    ) -> Result<RangeShape, ReachError> {
        let battery_kwh = profile
            .battery_capacity_kwh
            .unwrap_or(self.config.default_battery_kwh);

        let key = CacheKey::new(center, effective_range_mi, battery_kwh);
        if let Some(ring) = self.cache.get(&key, now) {
            tracing::debug!(vehicle = %profile.vehicle, "boundary cache hit");
            return close_service_ring(ring);
        }

        let request = ReachableRangeRequest {
            latitude: center.lat,
            longitude: center.lon,
            energy_budget_kwh: energy_budget_kwh(
                effective_range_mi,
                battery_kwh,
                self.config.miles_per_kwh,
            ),
            route_type: self.config.route_type,
        };

        let ring = self.provider.reachable_boundary(&request).await?;
        self.cache.insert(key, ring.clone(), now);
        close_service_ring(ring)
    }

    // ── Multi-vehicle update cycle ────────────────────────────────────────

    /// Run one update cycle for the current selections.
    ///
    /// `marker_position` is the raw `[a, b]` pair from the host and is
    /// normalized here — order ambiguity is resolved (or rejected) before
    /// any shape work.  All vehicles are computed concurrently; each
    /// result commits under the generation captured at cycle start, so
    /// results for superseded or deselected vehicles are discarded.
    ///
    /// # Errors
    ///
    /// [`VizError::Coordinate`] when the marker position is implausible in
    /// both component orders.  Per-vehicle failures do not fail the cycle;
    /// they are reported in [`UpdateOutcome::failures`].
    pub async fn update_selections(
        &mut self,
        selections: &[VehicleRangeProfile],
        marker_position: [f64; 2],
        ambient_temp_f: Option<f64>,
        now: Instant,
    ) -> VizResult<UpdateOutcome> {
        let center = Coordinate::normalize(marker_position)?;

        // Retire deselected vehicles first: any computation still in
        // flight for them will fail its commit.
        let selected: Vec<VehicleId> = selections.iter().map(|s| s.vehicle).collect();
        self.store.retain_selected(&selected);

        let generations: Vec<Generation> = selections
            .iter()
            .map(|s| self.store.begin(s.vehicle))
            .collect();

        let results = future::join_all(
            selections
                .iter()
                .map(|s| self.compute_shape(s, center, ambient_temp_f, now)),
        )
        .await;

        let mut outcome = UpdateOutcome::default();
        for ((profile, generation), result) in
            selections.iter().zip(generations).zip(results)
        {
            match result {
                Ok((shape, effective)) => {
                    if !self.store.commit(profile.vehicle, generation, shape.clone()) {
                        tracing::debug!(vehicle = %profile.vehicle, %generation, "stale result discarded");
                        continue;
                    }
                    outcome.legend.push(LegendEntry {
                        vehicle: profile.vehicle,
                        display_name: profile.display_name.clone(),
                        color: profile.color.clone(),
                        effective_range_miles: display_miles(effective),
                        accuracy: shape.accuracy(),
                    });
                    outcome.shapes.push((profile.vehicle, shape));
                }
                Err(e) => {
                    tracing::warn!(vehicle = %profile.vehicle, error = %e, "shape update failed");
                    outcome.failures.push((profile.vehicle, e));
                }
            }
        }
        Ok(outcome)
    }
}

/// Wrap a cached/fetched service ring into a tagged shape.
///
/// The client validated the point count, but a boundary whose endpoints
/// coincide can still collapse below 3 distinct points; map that back to
/// the service error space so it falls through the chain like any other
/// bad response.
fn close_service_ring(ring: Vec<Coordinate>) -> Result<RangeShape, ReachError> {
    let points = ring.len();
    RangeShape::new(ring, Accuracy::ExactService)
        .map_err(|_| ReachError::MalformedBoundary { points })
}
