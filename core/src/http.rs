//! HTTP wire types for the miner control API.
//!
//! # Design
//! Requests and responses are plain data. The control API is GET-only, sets no
//! headers and carries no body, so a request is nothing but a method and a full
//! URL. Responses are kept raw — status and body exactly as the server sent
//! them — and are never parsed by this crate.

/// HTTP method for a control request. The control API is GET-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

/// A control request described as plain data.
///
/// Built by `RestClient` and executed by a `Transport`. The URL is absolute:
/// base URL plus one of the fixed control paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
}

/// A raw control response.
///
/// Status and body verbatim from the server. A non-2xx status is data, not an
/// error — the caller decides what it means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Readiness states of an in-flight control request.
///
/// Forwarded to the caller's callback one invocation per transition:
/// `Opened` when the handle is created, `Sent` when the request goes on the
/// wire, `HeadersReceived` once the status line and headers are in, `Loading`
/// while the body is read, `Done` when the exchange is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Opened,
    Sent,
    HeadersReceived,
    Loading,
    Done,
}
