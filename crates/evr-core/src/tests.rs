//! Unit tests for evr-core primitives.

#[cfg(test)]
mod coord {
    use crate::{Coordinate, CoreError};

    #[test]
    fn valid_lon_lat_passes_through_unchanged() {
        let c = Coordinate::normalize([-122.0, 45.0]).unwrap();
        assert_eq!(c, Coordinate::new(-122.0, 45.0));
    }

    #[test]
    fn lat_lon_order_is_swapped() {
        // (45, -122) can only be (lat, lon): |-122| > 90.
        let c = Coordinate::normalize([45.0, -122.0]).unwrap();
        assert_eq!(c, Coordinate::new(-122.0, 45.0));
    }

    #[test]
    fn swapped_pair_with_large_longitude() {
        let c = Coordinate::normalize([40.0, 170.0]).unwrap();
        assert_eq!(c, Coordinate::new(170.0, 40.0));
    }

    #[test]
    fn ambiguous_small_pair_is_taken_as_lon_lat() {
        // Both components ≤ 90: unresolvable, accepted as-is.
        let c = Coordinate::normalize([45.0, 45.0]).unwrap();
        assert_eq!(c, Coordinate::new(45.0, 45.0));
    }

    #[test]
    fn implausible_pair_is_rejected() {
        let err = Coordinate::normalize([200.0, 100.0]).unwrap_err();
        assert!(matches!(err, CoreError::OutOfRange { .. }));
    }

    #[test]
    fn non_finite_pair_is_rejected() {
        let err = Coordinate::normalize([f64::NAN, 45.0]).unwrap_err();
        assert!(matches!(err, CoreError::NonFinite { .. }));
    }

    #[test]
    fn validity() {
        assert!(Coordinate::new(-97.74, 30.27).is_valid());
        assert!(!Coordinate::new(-197.74, 30.27).is_valid());
        assert!(!Coordinate::new(f64::INFINITY, 0.0).is_valid());
    }
}

#[cfg(test)]
mod geo {
    use crate::Coordinate;
    use crate::geo::{destination, distance_mi, wrap_longitude};

    #[test]
    fn zero_distance() {
        let p = Coordinate::new(-97.743, 30.267);
        assert!(distance_mi(p, p) < 1e-6);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 69.1 miles
        let a = Coordinate::new(-97.0, 30.0);
        let b = Coordinate::new(-97.0, 31.0);
        let d = distance_mi(a, b);
        assert!((d - 69.09).abs() < 0.5, "got {d}");
    }

    #[test]
    fn destination_north_moves_latitude() {
        let origin = Coordinate::new(0.0, 30.0);
        let p = destination(origin, 69.09, 0.0);
        assert!((p.lat - 31.0).abs() < 0.01, "lat {}", p.lat);
        assert!(p.lon.abs() < 1e-9, "lon {}", p.lon);
    }

    #[test]
    fn destination_round_trips_through_distance() {
        let origin = Coordinate::new(-97.743, 30.267);
        for bearing in [0.0, 45.0, 137.0, 250.0] {
            let p = destination(origin, 120.0, bearing);
            let d = distance_mi(origin, p);
            assert!((d - 120.0).abs() < 0.01, "bearing {bearing}: {d}");
        }
    }

    #[test]
    fn longitude_wrap() {
        assert_eq!(wrap_longitude(0.0), 0.0);
        assert_eq!(wrap_longitude(190.0), -170.0);
        assert_eq!(wrap_longitude(-190.0), 170.0);
        assert_eq!(wrap_longitude(180.0), 180.0);
    }
}

#[cfg(test)]
mod ids {
    use crate::{Generation, VehicleId};

    #[test]
    fn index_roundtrip() {
        let id = VehicleId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VehicleId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(VehicleId::INVALID.0, u32::MAX);
        assert_eq!(VehicleId::default(), VehicleId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId(7).to_string(), "VehicleId(7)");
        assert_eq!(Generation(3).to_string(), "G3");
    }

    #[test]
    fn generation_bump_is_monotonic() {
        let g = Generation::ZERO;
        assert!(g.bump() > g);
        assert_eq!(g.bump().bump(), Generation(2));
    }
}

#[cfg(test)]
mod rng {
    use crate::{ShapeRng, VehicleId};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = ShapeRng::new(12345, VehicleId(0));
        let mut r2 = ShapeRng::new(12345, VehicleId(0));
        for _ in 0..100 {
            let a: f64 = r1.gen_range(0.0..1.0);
            let b: f64 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_vehicles_differ() {
        let mut r0 = ShapeRng::new(1, VehicleId(0));
        let mut r1 = ShapeRng::new(1, VehicleId(1));
        let a: f64 = r0.gen_range(0.0..1.0);
        let b: f64 = r1.gen_range(0.0..1.0);
        assert_ne!(a, b, "streams for adjacent vehicles should diverge");
    }

    #[test]
    fn jitter_is_bounded() {
        let mut rng = ShapeRng::new(0, VehicleId(0));
        for _ in 0..1000 {
            let j = rng.jitter(0.08);
            assert!((-0.04..0.04).contains(&j), "jitter {j} out of bounds");
        }
    }
}
