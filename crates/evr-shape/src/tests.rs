//! Unit tests for shape generation.

/// Austin, TX — inside the Texas region profile.
#[cfg(test)]
fn austin() -> evr_core::Coordinate {
    evr_core::Coordinate::new(-97.743, 30.267)
}

#[cfg(test)]
mod shape {
    use evr_core::Coordinate;

    use crate::{Accuracy, RangeShape, ShapeError};

    fn triangle() -> Vec<Coordinate> {
        vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(0.0, 1.0),
        ]
    }

    #[test]
    fn open_ring_is_closed_on_construction() {
        let shape = RangeShape::new(triangle(), Accuracy::Heuristic).unwrap();
        assert!(shape.is_closed());
        assert_eq!(shape.len(), 4);
    }

    #[test]
    fn already_closed_ring_is_left_alone() {
        let mut ring = triangle();
        ring.push(ring[0]);
        let shape = RangeShape::new(ring, Accuracy::Heuristic).unwrap();
        assert_eq!(shape.len(), 4);
        assert!(shape.is_closed());
    }

    #[test]
    fn too_few_points_is_degenerate() {
        let err = RangeShape::new(
            vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)],
            Accuracy::ExactService,
        )
        .unwrap_err();
        assert!(matches!(err, ShapeError::DegenerateBoundary { points: 2 }));
    }

    #[test]
    fn accuracy_tags() {
        assert_eq!(Accuracy::ExactService.as_str(), "exact-service");
        assert_eq!(Accuracy::Heuristic.as_str(), "heuristic");
        assert_eq!(Accuracy::CircularFallback.as_str(), "circular-fallback");
    }
}

#[cfg(test)]
mod circle {
    use evr_core::geo::distance_mi;

    use super::austin;
    use crate::{Accuracy, circle_shape, geodesic_circle};

    #[test]
    fn point_count_matches_steps_plus_closure() {
        let shape = circle_shape(austin(), 100.0, 64).unwrap();
        assert_eq!(shape.len(), 65);
        assert!(shape.is_closed());
        assert_eq!(shape.accuracy(), Accuracy::CircularFallback);
    }

    #[test]
    fn every_point_sits_at_the_radius() {
        let center = austin();
        for p in geodesic_circle(center, 187.0, 32) {
            let d = distance_mi(center, p);
            assert!((d - 187.0).abs() < 0.01, "distance {d}");
        }
    }

    #[test]
    fn degenerate_step_count_is_rejected() {
        assert!(circle_shape(austin(), 100.0, 2).is_err());
    }
}

#[cfg(test)]
mod region {
    use evr_core::Coordinate;

    use super::austin;
    use crate::region_for;

    #[test]
    fn known_cities_hit_their_regions() {
        assert_eq!(region_for(austin()).name, "texas");
        assert_eq!(region_for(Coordinate::new(-118.24, 34.05)).name, "california");
        assert_eq!(region_for(Coordinate::new(-80.19, 25.76)).name, "florida");
    }

    #[test]
    fn uncovered_position_gets_the_default() {
        // New York City is not in the table.
        assert_eq!(region_for(Coordinate::new(-74.006, 40.713)).name, "default");
    }
}

#[cfg(test)]
mod heuristic {
    use evr_core::geo::distance_mi;
    use evr_core::{ShapeRng, VehicleId};

    use super::austin;
    use crate::heuristic::alignment;
    use crate::{Accuracy, HeuristicParams, heuristic_ring, heuristic_shape};

    #[test]
    fn alignment_extremes() {
        assert_eq!(alignment(90.0, 90.0), 1.0);
        assert_eq!(alignment(0.0, 90.0), 0.0);
        assert_eq!(alignment(180.0, 0.0), 0.0);
        // Wraps cleanly across north.
        assert!((alignment(350.0, 10.0) - (1.0 - 20.0 / 90.0)).abs() < 1e-12);
    }

    #[test]
    fn ring_is_closed_with_expected_point_count() {
        let params = HeuristicParams::default();
        let mut rng = ShapeRng::new(7, VehicleId(0));
        let ring = heuristic_ring(austin(), 240.0, params, &mut rng);
        assert_eq!(ring.len(), params.sample_count + 1);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn same_seed_same_ring() {
        let params = HeuristicParams::default();
        let mut r1 = ShapeRng::new(42, VehicleId(3));
        let mut r2 = ShapeRng::new(42, VehicleId(3));
        assert_eq!(
            heuristic_ring(austin(), 240.0, params, &mut r1),
            heuristic_ring(austin(), 240.0, params, &mut r2)
        );
    }

    #[test]
    fn vertices_stay_within_the_multiplier_band() {
        let params = HeuristicParams::default();
        let mut rng = ShapeRng::new(1, VehicleId(9));
        let range = 200.0;
        let ring = heuristic_ring(austin(), range, params, &mut rng);
        for p in &ring {
            let d = distance_mi(austin(), *p);
            // Smoothing averages neighbors, so allow a little slack beyond
            // the raw clamp bounds.
            assert!(d >= range * 0.45 && d <= range * 1.45, "vertex at {d} mi");
        }
    }

    #[test]
    fn shape_is_tagged_heuristic() {
        let mut rng = ShapeRng::new(0, VehicleId(0));
        let shape = heuristic_shape(austin(), 120.0, HeuristicParams::default(), &mut rng).unwrap();
        assert_eq!(shape.accuracy(), Accuracy::Heuristic);
        assert!(shape.is_closed());
    }
}
