//! Server origin for the control API.
//!
//! # Design
//! The daemon's original web UI derived the server origin from the page it was
//! loaded from. Here the origin is explicit data handed to the client, so
//! tests need no simulated browsing context and the client can target any
//! daemon instance.

/// Scheme, host and optional port of the miner daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    scheme: String,
    host: String,
    port: Option<u16>,
}

impl Origin {
    pub fn new(scheme: &str, host: &str, port: Option<u16>) -> Self {
        Self {
            scheme: scheme.to_string(),
            host: host.to_string(),
            port,
        }
    }

    /// Render the origin as a base URL: `scheme://host`, or
    /// `scheme://host:port` when a port is present. No trailing colon when the
    /// port is absent.
    pub fn base_url(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{port}", self.scheme, self.host),
            None => format!("{}://{}", self.scheme, self.host),
        }
    }
}
