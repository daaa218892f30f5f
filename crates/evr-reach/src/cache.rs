//! TTL cache for reachability boundaries.
//!
//! Service calls are the expensive step of an update cycle, and cosmetic
//! parameter changes (color, theme, legend toggles) re-run the pipeline
//! with an identical geometry request.  Entries are keyed by quantized
//! inputs so float noise from marker drags of a few centimetres still hits.
//!
//! Time is injected as an explicit [`Instant`] rather than read from a
//! global clock, which keeps expiry deterministic under test.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;

use evr_core::Coordinate;

// ── CacheKey ──────────────────────────────────────────────────────────────────

/// Quantized cache key: center to 1e-4 degrees (~11 m), range to 0.1 mi,
/// battery capacity to 0.1 kWh.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct CacheKey {
    lon_e4: i64,
    lat_e4: i64,
    range_dmi: i64,
    battery_dkwh: i64,
}

impl CacheKey {
    pub fn new(center: Coordinate, range_miles: f64, battery_capacity_kwh: f64) -> Self {
        Self {
            lon_e4: (center.lon * 1e4).round() as i64,
            lat_e4: (center.lat * 1e4).round() as i64,
            range_dmi: (range_miles * 10.0).round() as i64,
            battery_dkwh: (battery_capacity_kwh * 10.0).round() as i64,
        }
    }
}

// ── BoundaryCache ─────────────────────────────────────────────────────────────

/// Injectable cache abstraction for service boundaries.
///
/// Implementations take `&self` — the pipeline reads and inserts from
/// concurrently running per-vehicle futures, so interior mutability is
/// part of the contract.
pub trait BoundaryCache: Send + Sync {
    /// A non-expired ring for `key`, if present.
    fn get(&self, key: &CacheKey, now: Instant) -> Option<Vec<Coordinate>>;

    /// Store a ring, replacing any previous entry for `key`.
    fn insert(&self, key: CacheKey, ring: Vec<Coordinate>, now: Instant);
}

// ── TtlCache ──────────────────────────────────────────────────────────────────

/// The default cache: an unbounded map with per-entry TTL, expired entries
/// evicted on read.
///
/// Unbounded is fine for the intended workload — one entry per (vehicle,
/// position) pair the user actually visits in a session.  Swap in a bounded
/// LRU behind the same trait if a host ever needs one.
pub struct TtlCache {
    ttl: Duration,
    entries: Mutex<FxHashMap<CacheKey, (Instant, Vec<Coordinate>)>>,
}

impl TtlCache {
    /// Default time-to-live: 30 minutes.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(FxHashMap::default()),
        }
    }

    /// Number of stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FxHashMap<CacheKey, (Instant, Vec<Coordinate>)>> {
        // A poisoned lock only means a panic elsewhere mid-insert; the map
        // itself is still structurally sound, so recover it.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TTL)
    }
}

impl BoundaryCache for TtlCache {
    fn get(&self, key: &CacheKey, now: Instant) -> Option<Vec<Coordinate>> {
        let mut entries = self.lock();
        match entries.get(key) {
            Some((inserted, ring)) if now.duration_since(*inserted) < self.ttl => {
                Some(ring.clone())
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn insert(&self, key: CacheKey, ring: Vec<Coordinate>, now: Instant) {
        self.lock().insert(key, (now, ring));
    }
}

// ── NoCache ───────────────────────────────────────────────────────────────────

/// Disables caching entirely — every lookup misses, every insert is dropped.
pub struct NoCache;

impl BoundaryCache for NoCache {
    fn get(&self, _key: &CacheKey, _now: Instant) -> Option<Vec<Coordinate>> {
        None
    }

    fn insert(&self, _key: CacheKey, _ring: Vec<Coordinate>, _now: Instant) {}
}
