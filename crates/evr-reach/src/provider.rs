//! The provider trait — the pipeline's seam to the external service.

use evr_core::Coordinate;

use crate::client::ReachClient;
use crate::error::{ReachError, ReachResult};
use crate::types::ReachableRangeRequest;

/// Pluggable source of reachability boundaries.
///
/// `evr-viz` is generic over this trait, so tests substitute a scripted
/// provider and hosts without backend access use [`NoopProvider`].  The
/// returned future is awaited in-task on a single-threaded event loop;
/// dropping it cancels the request.
#[allow(async_fn_in_trait)]
pub trait ReachabilityProvider: Send + Sync {
    /// Fetch the boundary as an open `(lon, lat)` ring.
    ///
    /// # Errors
    ///
    /// Any [`ReachError`]; callers treat every variant as "this strategy
    /// failed" and fall through the strategy chain.
    async fn reachable_boundary(
        &self,
        request: &ReachableRangeRequest,
    ) -> ReachResult<Vec<Coordinate>>;
}

impl ReachabilityProvider for ReachClient {
    async fn reachable_boundary(
        &self,
        request: &ReachableRangeRequest,
    ) -> ReachResult<Vec<Coordinate>> {
        self.reachable_range(request).await
    }
}

/// A provider for hosts with no reachability backend configured.
///
/// Always reports [`ReachError::Disabled`], which the pipeline converts
/// into an immediate fall-through to the heuristic strategy.
pub struct NoopProvider;

impl ReachabilityProvider for NoopProvider {
    async fn reachable_boundary(
        &self,
        _request: &ReachableRangeRequest,
    ) -> ReachResult<Vec<Coordinate>> {
        Err(ReachError::Disabled)
    }
}
