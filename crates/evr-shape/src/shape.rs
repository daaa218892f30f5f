//! The range boundary polygon and its provenance tag.

use evr_core::Coordinate;

use crate::error::{ShapeError, ShapeResult};

// ── Accuracy ──────────────────────────────────────────────────────────────────

/// Which strategy produced a shape.
///
/// Surfaced in the legend so users can tell a routed boundary from an
/// approximation at a glance.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Accuracy {
    /// Boundary computed by the external reachability service.
    ExactService,
    /// Road-aware heuristic polygon.
    Heuristic,
    /// Plain geodesic circle.
    CircularFallback,
}

impl Accuracy {
    /// Stable string form, useful for legend payloads and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Accuracy::ExactService => "exact-service",
            Accuracy::Heuristic => "heuristic",
            Accuracy::CircularFallback => "circular-fallback",
        }
    }
}

impl std::fmt::Display for Accuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RangeShape ────────────────────────────────────────────────────────────────

/// A closed boundary ring (first point == last point) plus its provenance.
///
/// Created fresh each update cycle and fully replaces the previous shape
/// for the same vehicle; nothing here is persisted.  The ring invariant is
/// enforced at construction — a `RangeShape` is always closed and always
/// has at least 4 stored points (3 distinct + closure).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeShape {
    ring: Vec<Coordinate>,
    accuracy: Accuracy,
}

impl RangeShape {
    /// Build a shape from a ring, closing it if the source left it open.
    ///
    /// # Errors
    ///
    /// [`ShapeError::DegenerateBoundary`] when fewer than 3 distinct points
    /// are supplied — too few to enclose any area.
    pub fn new(mut ring: Vec<Coordinate>, accuracy: Accuracy) -> ShapeResult<Self> {
        let already_closed = ring.len() >= 2 && ring.first() == ring.last();
        let distinct = if already_closed { ring.len() - 1 } else { ring.len() };
        if distinct < 3 {
            return Err(ShapeError::DegenerateBoundary { points: distinct });
        }
        if !already_closed {
            ring.push(ring[0]);
        }
        Ok(Self { ring, accuracy })
    }

    /// The closed ring, in `(lon, lat)` order.
    #[inline]
    pub fn ring(&self) -> &[Coordinate] {
        &self.ring
    }

    #[inline]
    pub fn accuracy(&self) -> Accuracy {
        self.accuracy
    }

    /// Number of stored points, including the closing point.
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Always `true` for a constructed shape; here for test assertions.
    pub fn is_closed(&self) -> bool {
        self.ring.first() == self.ring.last()
    }

    /// Consume the shape, yielding the ring.
    pub fn into_ring(self) -> Vec<Coordinate> {
        self.ring
    }
}
