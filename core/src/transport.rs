//! Blocking transport for control requests.
//!
//! # Design
//! `Transport` is the seam between request building and real I/O: the client
//! builds `HttpRequest` values and any implementation executes them, reporting
//! readiness-state transitions through an observer as the exchange progresses.
//! Unit tests substitute recording or failing implementations; `UreqTransport`
//! is the bundled real one.

use tracing::debug;

use crate::error::ClientError;
use crate::http::{HttpRequest, HttpResponse, RequestState};

/// Executes a control request, reporting each readiness-state transition to
/// `observer` in order: `Sent`, `HeadersReceived`, `Loading`, `Done`.
///
/// (`Opened` is emitted earlier, when the handle is created.)
pub trait Transport {
    fn execute(
        &self,
        request: &HttpRequest,
        observer: &mut dyn FnMut(RequestState),
    ) -> Result<HttpResponse, ClientError>;
}

/// Blocking transport backed by a `ureq::Agent`.
///
/// The agent is configured with `http_status_as_error(false)` so 4xx/5xx
/// responses come back as data rather than `Err` — status interpretation is
/// left to the caller. No timeouts, no retries.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(
        &self,
        request: &HttpRequest,
        observer: &mut dyn FnMut(RequestState),
    ) -> Result<HttpResponse, ClientError> {
        debug!(url = %request.url, "sending control request");
        observer(RequestState::Sent);

        let mut response = self
            .agent
            .get(&request.url)
            .call()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        observer(RequestState::HeadersReceived);

        let status = response.status().as_u16();
        observer(RequestState::Loading);
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ClientError::Body(e.to_string()))?;
        debug!(status, "control request completed");
        observer(RequestState::Done);

        Ok(HttpResponse { status, body })
    }
}
