//! Per-vehicle shape storage with last-write-wins commit semantics.

use rustc_hash::FxHashMap;

use evr_core::{Generation, VehicleId};
use evr_shape::RangeShape;

struct Slot {
    current: Generation,
    shape: Option<RangeShape>,
}

/// Holds the latest committed shape per selected vehicle.
///
/// Every update cycle calls [`begin`][Self::begin] to advance a vehicle's
/// generation before computing, then [`commit`][Self::commit] with the
/// captured generation when the computation lands.  A commit whose
/// generation is no longer current — a newer update started, or the
/// vehicle was deselected — is rejected, which is the entire stale-result
/// policy: no locking, no task tracking, just a counter compare.
#[derive(Default)]
pub struct ShapeStore {
    slots: FxHashMap<VehicleId, Slot>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new update for `vehicle`, invalidating any computation still
    /// in flight.  Returns the generation the new computation must present
    /// at commit time.  The previous shape stays visible until the new one
    /// replaces it.
    pub fn begin(&mut self, vehicle: VehicleId) -> Generation {
        let slot = self.slots.entry(vehicle).or_insert(Slot {
            current: Generation::ZERO,
            shape: None,
        });
        slot.current = slot.current.bump();
        slot.current
    }

    /// Commit a computed shape.  Returns `false` (dropping the shape) when
    /// `generation` is stale or the vehicle has been deselected.
    pub fn commit(&mut self, vehicle: VehicleId, generation: Generation, shape: RangeShape) -> bool {
        match self.slots.get_mut(&vehicle) {
            Some(slot) if slot.current == generation => {
                slot.shape = Some(shape);
                true
            }
            _ => false,
        }
    }

    /// Drop every vehicle not in `selected`.  In-flight computations for
    /// dropped vehicles will fail their commit.
    pub fn retain_selected(&mut self, selected: &[VehicleId]) {
        self.slots.retain(|vehicle, _| selected.contains(vehicle));
    }

    /// Remove one vehicle, returning its committed shape if it had one.
    pub fn remove(&mut self, vehicle: VehicleId) -> Option<RangeShape> {
        self.slots.remove(&vehicle).and_then(|slot| slot.shape)
    }

    /// The committed shape for `vehicle`, if any.
    pub fn shape(&self, vehicle: VehicleId) -> Option<&RangeShape> {
        self.slots.get(&vehicle).and_then(|slot| slot.shape.as_ref())
    }

    /// All committed shapes.
    pub fn shapes(&self) -> impl Iterator<Item = (VehicleId, &RangeShape)> {
        self.slots
            .iter()
            .filter_map(|(&vehicle, slot)| slot.shape.as_ref().map(|s| (vehicle, s)))
    }

    /// Number of tracked vehicles (with or without a committed shape).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
