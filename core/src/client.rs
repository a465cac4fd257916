//! The miner control client.
//!
//! # Design
//! `RestClient` holds a base URL and a transport; each operation builds a GET
//! request for one fixed control path. Start mining is deliberately asymmetric
//! to the other two: it returns an opened-but-unsent `PendingRequest` and the
//! caller decides when to transmit, while stop and shutdown transmit
//! immediately. The daemon's original web UI kept the latest request handle in
//! one shared mutable binding; here every call returns its own handle, so
//! concurrent calls cannot clobber each other.

use tracing::debug;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, RequestState};
use crate::origin::Origin;
use crate::transport::{Transport, UreqTransport};

/// Client for the three control operations of a miner daemon.
///
/// Holds no per-request state; all methods take `&self` and each call gets an
/// independent handle and callback.
#[derive(Debug)]
pub struct RestClient<T: Transport> {
    base_url: String,
    transport: T,
}

impl RestClient<UreqTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }

    pub fn from_origin(origin: &Origin) -> Self {
        Self::new(&origin.base_url())
    }
}

impl<T: Transport> RestClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn control_request(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{path}", self.base_url),
        }
    }

    /// Ask the daemon to shut down. Fire-and-forget: the request is sent
    /// immediately and every outcome, including transport failure, is
    /// discarded. The shutdown itself is a server-side effect this call cannot
    /// confirm.
    pub fn request_shutdown(&self) {
        let request = self.control_request("/rest/shutdown");
        if let Err(err) = self.transport.execute(&request, &mut |_| {}) {
            debug!(%err, "shutdown request failed, outcome dropped");
        }
    }

    /// Open a request to start mining without transmitting it.
    ///
    /// The returned `PendingRequest` owns `ready_callback`; nothing goes on
    /// the wire until the caller invokes `send` on it. `ready_callback` has
    /// already observed `Opened` by the time this returns.
    pub fn request_mining_start<F>(&self, ready_callback: F) -> PendingRequest<'_, T, F>
    where
        F: FnMut(RequestState),
    {
        PendingRequest::open(
            &self.transport,
            self.control_request("/rest/startMining"),
            ready_callback,
        )
    }

    /// Ask the daemon to stop mining. Transmits immediately, forwarding each
    /// readiness-state transition to `ready_callback`, and returns the raw
    /// response.
    pub fn request_mining_stop<F>(&self, ready_callback: F) -> Result<HttpResponse, ClientError>
    where
        F: FnMut(RequestState),
    {
        PendingRequest::open(
            &self.transport,
            self.control_request("/rest/stopMining"),
            ready_callback,
        )
        .send()
    }
}

/// An opened control request that has not been transmitted.
///
/// Owned by the caller that created it. Dropping it without calling `send`
/// means the request never goes on the wire.
pub struct PendingRequest<'a, T: Transport, F: FnMut(RequestState)> {
    transport: &'a T,
    request: HttpRequest,
    ready_callback: F,
}

impl<'a, T: Transport, F: FnMut(RequestState)> PendingRequest<'a, T, F> {
    fn open(transport: &'a T, request: HttpRequest, mut ready_callback: F) -> Self {
        ready_callback(RequestState::Opened);
        Self {
            transport,
            request,
            ready_callback,
        }
    }

    /// The request as it will go on the wire.
    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    /// Transmit and block until the exchange completes, forwarding each
    /// readiness-state transition to the callback attached at open time.
    pub fn send(mut self) -> Result<HttpResponse, ClientError> {
        self.transport.execute(&self.request, &mut self.ready_callback)
    }
}
