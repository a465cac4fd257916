//! Client for the control REST API of a local miner daemon.
//!
//! # Overview
//! The miner daemon exposes three control operations — shutdown, start mining,
//! stop mining — each a plain HTTP GET against a fixed path under the daemon's
//! origin. This crate builds those requests, executes them over a pluggable
//! blocking transport, and forwards every readiness-state transition of the
//! exchange to a caller-supplied callback.
//!
//! # Design
//! - `RestClient` holds only a base URL and a `Transport`. The bundled
//!   `UreqTransport` does the real I/O; tests inject their own.
//! - `request_mining_start` returns an opened-but-unsent `PendingRequest` and
//!   the caller transmits it. `request_mining_stop` and `request_shutdown`
//!   transmit immediately. The asymmetry comes from the daemon's original web
//!   UI and is part of the contract, not an accident.
//! - Responses stay raw: status code and body exactly as the server produced
//!   them. Interpreting a non-2xx status is the caller's business.
//! - Every call returns its own handle; nothing is shared between calls.

pub mod client;
pub mod error;
pub mod http;
pub mod origin;
pub mod transport;

pub use client::{PendingRequest, RestClient};
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestState};
pub use origin::Origin;
pub use transport::{Transport, UreqTransport};
