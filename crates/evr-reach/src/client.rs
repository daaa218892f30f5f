//! HTTP client for the reachability backend proxy.
//!
//! The backend is a thin proxy in front of the routing vendor's
//! reachable-range API — it holds the vendor credentials so they never
//! reach this client.  All endpoints are JSON-in/JSON-out POSTs wrapped in
//! a `{success, data, message}` envelope; envelope-level failures surface
//! as [`ReachError::Api`].

use std::time::Duration;

use reqwest::{Client, Url};

use evr_core::Coordinate;

use crate::error::{ReachError, ReachResult};
use crate::types::{ApiEnvelope, LatLon, ReachableRangeData, ReachableRangeRequest};

/// Client for the reachability backend.
///
/// Construct with [`ReachClient::new`]; point `base_url` at a mock server
/// in tests.
pub struct ReachClient {
    client: Client,
    base_url: Url,
}

impl ReachClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// [`ReachError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed, or [`ReachError::Api`] if `base_url` is not a valid URL.
    pub fn new(base_url: &str, timeout_secs: u64) -> ReachResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("rust_evr/0.1 (range-visualization)")
            .build()?;

        // Normalise: exactly one trailing slash so Url::join appends path
        // segments instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| ReachError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Fetches the reachable-range boundary for an energy budget.
    ///
    /// Returns the boundary as an **open** ring in internal `(lon, lat)`
    /// order; the shape layer closes it.
    ///
    /// # Errors
    ///
    /// - [`ReachError::Http`] on network failure or non-2xx status.
    /// - [`ReachError::Api`] when the envelope reports failure.
    /// - [`ReachError::Deserialize`] when the body doesn't match the
    ///   expected shape.
    /// - [`ReachError::MalformedBoundary`] when fewer than 3 boundary
    ///   points come back.
    pub async fn reachable_range(
        &self,
        request: &ReachableRangeRequest,
    ) -> ReachResult<Vec<Coordinate>> {
        let data: ReachableRangeData = self.post_json("reachable-range", request).await?;
        boundary_to_ring(&data.reachable_range.boundary)
    }

    /// Joins `path` onto the base URL.
    fn endpoint(&self, path: &str) -> ReachResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ReachError::Api(format!("invalid endpoint path '{path}': {e}")))
    }

    /// POSTs `body` as JSON, asserts a 2xx status, unwraps the response
    /// envelope, and deserializes the payload.
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> ReachResult<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "reachability backend request");

        let response = self.client.post(url.clone()).json(body).send().await?;
        let response = response.error_for_status()?;
        let text = response.text().await?;

        let envelope: ApiEnvelope<T> =
            serde_json::from_str(&text).map_err(|e| ReachError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        if !envelope.success {
            let msg = envelope
                .message
                .unwrap_or_else(|| "unknown backend error".to_owned());
            return Err(ReachError::Api(msg));
        }
        envelope.data.ok_or_else(|| ReachError::Api(
            "envelope reported success but carried no data".to_owned(),
        ))
    }
}

/// Convert backend boundary points to the internal `(lon, lat)` ring order.
///
/// # Errors
///
/// [`ReachError::MalformedBoundary`] for fewer than 3 points.
pub fn boundary_to_ring(boundary: &[LatLon]) -> ReachResult<Vec<Coordinate>> {
    if boundary.len() < 3 {
        return Err(ReachError::MalformedBoundary {
            points: boundary.len(),
        });
    }
    Ok(boundary
        .iter()
        .map(|p| Coordinate::new(p.longitude, p.latitude))
        .collect())
}
