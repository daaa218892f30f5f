//! Unit tests for the pure parts of evr-reach.  HTTP-path tests live in
//! `tests/client.rs` against a wiremock server.

#[cfg(test)]
mod budget {
    use crate::budget::energy_budget_kwh;

    #[test]
    fn straight_conversion() {
        // 240 adjusted miles at 4 mi/kWh → 60 kWh.
        assert!((energy_budget_kwh(240.0, 100.0, 4.0) - 60.0).abs() < 1e-12);
    }

    #[test]
    fn budget_is_capped_at_twice_capacity() {
        // 1000 mi would need 250 kWh; a 50 kWh pack caps the request at 100.
        assert_eq!(energy_budget_kwh(1000.0, 50.0, 4.0), 100.0);
    }
}

#[cfg(test)]
mod cache {
    use std::time::{Duration, Instant};

    use evr_core::Coordinate;

    use crate::cache::{BoundaryCache, CacheKey, NoCache, TtlCache};

    fn ring() -> Vec<Coordinate> {
        vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(0.0, 1.0),
        ]
    }

    #[test]
    fn key_quantizes_float_noise() {
        let a = CacheKey::new(Coordinate::new(-97.74310, 30.26710), 240.02, 75.0);
        let b = CacheKey::new(Coordinate::new(-97.74312, 30.26708), 239.98, 75.0);
        assert_eq!(a, b);
    }

    #[test]
    fn key_separates_distinct_requests() {
        let a = CacheKey::new(Coordinate::new(-97.743, 30.267), 240.0, 75.0);
        let b = CacheKey::new(Coordinate::new(-97.743, 30.267), 190.0, 75.0);
        let c = CacheKey::new(Coordinate::new(-97.743, 30.267), 240.0, 100.0);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hit_within_ttl_miss_after() {
        let cache = TtlCache::new(Duration::from_secs(30 * 60));
        let key = CacheKey::new(Coordinate::new(-97.743, 30.267), 240.0, 75.0);
        let t0 = Instant::now();

        cache.insert(key, ring(), t0);
        assert_eq!(cache.get(&key, t0 + Duration::from_secs(29 * 60)), Some(ring()));
        assert_eq!(cache.get(&key, t0 + Duration::from_secs(31 * 60)), None);
        // Expired entry was evicted on read.
        assert!(cache.is_empty());
    }

    #[test]
    fn no_cache_never_hits() {
        let cache = NoCache;
        let key = CacheKey::new(Coordinate::new(0.0, 0.0), 100.0, 50.0);
        let now = Instant::now();
        cache.insert(key, ring(), now);
        assert_eq!(cache.get(&key, now), None);
    }
}

#[cfg(test)]
mod stations {
    use crate::stations::ChargerClass;

    fn cats(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn supercharger_name_is_fast() {
        assert_eq!(
            ChargerClass::classify("Tesla Supercharger - Austin", &[]),
            ChargerClass::Fast
        );
    }

    #[test]
    fn dc_category_is_fast() {
        assert_eq!(
            ChargerClass::classify("EVgo Station", &cats(&["DC Charging"])),
            ChargerClass::Fast
        );
    }

    #[test]
    fn destination_charging_is_level2() {
        assert_eq!(
            ChargerClass::classify("Hotel Destination Charging", &[]),
            ChargerClass::Level2
        );
    }

    #[test]
    fn fast_wins_over_level2() {
        assert_eq!(
            ChargerClass::classify("Public Rapid Hub", &cats(&["public"])),
            ChargerClass::Fast
        );
    }

    #[test]
    fn unmatched_is_level1() {
        assert_eq!(ChargerClass::classify("Motel 6", &[]), ChargerClass::Level1);
    }
}

#[cfg(test)]
mod types {
    use crate::types::{LatLon, ReachableRangeRequest, RouteType};

    #[test]
    fn route_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RouteType::Eco).unwrap(), "\"eco\"");
        assert_eq!(RouteType::Shortest.as_str(), "shortest");
    }

    #[test]
    fn request_uses_backend_field_names() {
        let req = ReachableRangeRequest {
            latitude: 30.267,
            longitude: -97.743,
            energy_budget_kwh: 60.0,
            route_type: RouteType::Eco,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["energyBudgetInkWh"], 60.0);
        assert_eq!(json["routeType"], "eco");
    }

    #[test]
    fn boundary_conversion_swaps_to_lon_lat() {
        let boundary = vec![
            LatLon { latitude: 30.0, longitude: -97.0 },
            LatLon { latitude: 31.0, longitude: -97.0 },
            LatLon { latitude: 30.5, longitude: -96.0 },
        ];
        let ring = crate::client::boundary_to_ring(&boundary).unwrap();
        assert_eq!(ring[0].lon, -97.0);
        assert_eq!(ring[0].lat, 30.0);
        // Conversion does not close the ring; the shape layer does.
        assert_ne!(ring.first(), ring.last());
    }

    #[test]
    fn short_boundary_is_malformed() {
        let boundary = vec![
            LatLon { latitude: 30.0, longitude: -97.0 },
            LatLon { latitude: 31.0, longitude: -97.0 },
        ];
        let err = crate::client::boundary_to_ring(&boundary).unwrap_err();
        assert!(matches!(
            err,
            crate::ReachError::MalformedBoundary { points: 2 }
        ));
    }
}
