//! Error types for the miner control client.
//!
//! # Design
//! Only transport-level failures are errors. A non-2xx status comes back as
//! data in `HttpResponse`; this crate never interprets status codes.

use thiserror::Error;

/// Errors surfaced by `PendingRequest::send` and `request_mining_stop`.
///
/// `request_shutdown` discards these by contract.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or no response arrived.
    #[error("transport failure: {0}")]
    Transport(String),

    /// A response arrived but its body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}
