//! Integration tests for `ReachClient` using wiremock HTTP mocks.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use evr_core::Coordinate;
use evr_reach::{
    ChargerTypeFilter, ReachClient, ReachError, ReachableRangeRequest, RouteType,
};

fn test_client(base_url: &str) -> ReachClient {
    ReachClient::new(base_url, 30).expect("client construction should not fail")
}

fn range_request() -> ReachableRangeRequest {
    ReachableRangeRequest {
        latitude: 30.267,
        longitude: -97.743,
        energy_budget_kwh: 60.0,
        route_type: RouteType::Eco,
    }
}

#[tokio::test]
async fn reachable_range_returns_lon_lat_ring() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "data": {
            "reachableRange": {
                "center": { "latitude": 30.267, "longitude": -97.743 },
                "boundary": [
                    { "latitude": 31.0, "longitude": -97.7 },
                    { "latitude": 30.2, "longitude": -96.9 },
                    { "latitude": 29.5, "longitude": -97.7 },
                    { "latitude": 30.2, "longitude": -98.5 }
                ]
            }
        },
        "source": "vendor"
    });

    Mock::given(method("POST"))
        .and(path("/reachable-range"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let ring = client
        .reachable_range(&range_request())
        .await
        .expect("should parse boundary");

    assert_eq!(ring.len(), 4);
    assert_eq!(ring[0], Coordinate::new(-97.7, 31.0));
    assert_eq!(ring[1], Coordinate::new(-96.9, 30.2));
}

#[tokio::test]
async fn envelope_failure_is_an_api_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "success": false,
        "data": null,
        "message": "energy budget out of range"
    });

    Mock::given(method("POST"))
        .and(path("/reachable-range"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.reachable_range(&range_request()).await.unwrap_err();

    assert!(matches!(err, ReachError::Api(_)));
    assert!(err.to_string().contains("energy budget out of range"));
}

#[tokio::test]
async fn http_failure_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reachable-range"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.reachable_range(&range_request()).await.unwrap_err();
    assert!(matches!(err, ReachError::Http(_)));
}

#[tokio::test]
async fn two_point_boundary_is_malformed() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "data": {
            "reachableRange": {
                "boundary": [
                    { "latitude": 31.0, "longitude": -97.7 },
                    { "latitude": 30.2, "longitude": -96.9 }
                ]
            }
        }
    });

    Mock::given(method("POST"))
        .and(path("/reachable-range"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.reachable_range(&range_request()).await.unwrap_err();
    assert!(matches!(err, ReachError::MalformedBoundary { points: 2 }));
}

#[tokio::test]
async fn stations_near_dedups_across_filters() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "data": {
            "stations": [
                {
                    "id": "st-1",
                    "name": "Tesla Supercharger - Austin",
                    "address": "500 E 4th St",
                    "latitude": 30.265,
                    "longitude": -97.739,
                    "distance": 420.0,
                    "categories": ["DC Charging"]
                },
                {
                    "id": "st-2",
                    "name": "Downtown Garage",
                    "address": "99 Brazos St",
                    "latitude": 30.268,
                    "longitude": -97.741,
                    "categories": []
                }
            ]
        }
    });

    // Same payload for every filter — the client must dedup by ID.
    Mock::given(method("POST"))
        .and(path("/charging-stations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let stations = client
        .stations_near(
            Coordinate::new(-97.743, 30.267),
            50.0,
            &[ChargerTypeFilter::Fast, ChargerTypeFilter::Level2],
        )
        .await;

    assert_eq!(stations.len(), 2);
    assert_eq!(stations[0].id, "st-1");
}

#[tokio::test]
async fn stations_near_skips_failing_filter() {
    let server = MockServer::start().await;

    // Every request fails; the sweep should come back empty, not error.
    Mock::given(method("POST"))
        .and(path("/charging-stations"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let stations = client
        .stations_near(Coordinate::new(-97.743, 30.267), 50.0, &[])
        .await;
    assert!(stations.is_empty());
}
