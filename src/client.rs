//! Orthodromy requests end to end: encode, fetch, decode.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{OrthodromyError, Result};
use crate::path::PathPoints;
use crate::request::SamplingRequest;
use crate::transport::{HttpTransport, OrthodromyConfig, Transport};
use crate::wkt::{decode_linestring, decode_linestring_strict};

/// Client for the remote orthodromy service.
///
/// Holds no per-request state; one client can serve any number of requests,
/// including concurrently when the transport is `Sync`.
#[derive(Debug, Clone)]
pub struct OrthodromyClient<T = HttpTransport> {
    transport: T,
}

impl OrthodromyClient<HttpTransport> {
    pub fn http(config: OrthodromyConfig) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> OrthodromyClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the sampled path for `request`.
    ///
    /// Fails only when the service cannot be reached or answers with a
    /// non-success status. A body without usable geometry yields an empty
    /// path, and unreadable coordinates come back as `NaN`.
    pub fn request_points(&self, request: &SamplingRequest) -> Result<PathPoints> {
        let body = self.fetch(request)?;
        let path = decode_linestring(&body);

        debug!(vertices = path.len(), "decoded orthodromy path");
        if path.is_empty() {
            warn!("orthodromy response held no LINESTRING vertices");
        } else if !path.is_finite() {
            warn!(vertices = path.len(), "orthodromy path has non-finite coordinates");
        }

        Ok(path)
    }

    /// Like [`request_points`](Self::request_points), but malformed geometry
    /// is an [`OrthodromyError::Decode`] error.
    pub fn request_points_strict(&self, request: &SamplingRequest) -> Result<PathPoints> {
        let body = self.fetch(request)?;
        let path = decode_linestring_strict(&body)?;
        debug!(vertices = path.len(), "decoded orthodromy path");
        Ok(path)
    }

    fn fetch(&self, request: &SamplingRequest) -> Result<String> {
        let locator = request.locator();
        debug!(%locator, "requesting orthodromy");

        let response = self.transport.get(&locator)?;
        if !response.is_success() {
            warn!(
                status = response.status,
                reason = %response.reason,
                "orthodromy service rejected request"
            );
            return Err(OrthodromyError::Status {
                status: response.status,
                reason: response.reason,
            });
        }

        Ok(response.body)
    }
}

impl<T: Transport + Sync> OrthodromyClient<T> {
    /// Issue independent requests in parallel. Results keep the input order.
    pub fn request_many(&self, requests: &[SamplingRequest]) -> Vec<Result<PathPoints>> {
        requests
            .par_iter()
            .map(|request| self.request_points(request))
            .collect()
    }
}
