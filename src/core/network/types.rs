// Core types for the health probe

use std::net::SocketAddr;

use crate::core::network::url_parser::UrlError;

/// Maximum accepted host length in bytes. Longer hosts are rejected, never
/// truncated.
pub const MAX_HOST_LEN: usize = 255;

/// Maximum accepted endpoint (path) length in bytes.
pub const MAX_ENDPOINT_LEN: usize = 255;

/// Hard cap on the accumulated response. Bytes past this are discarded while
/// the stream is drained to end-of-stream.
pub const MAX_RESPONSE_BYTES: usize = 4096;

/// Width of the status window checked for "200", counted from the first
/// `HTTP/` occurrence. 15 bytes covers exactly `HTTP/1.1 200 OK`.
pub const STATUS_WINDOW_LEN: usize = 15;

/// Parsed probe target: `scheme://host[:port][/endpoint]` decomposed.
///
/// `host` never contains `:` or `/`. A userinfo prefix (`user@host`) is not
/// special-cased and remains part of `host`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    /// Defaults to 80 when the URL carries no port. Malformed port text
    /// parses to 0; there is no upper-bound validation, an out-of-range
    /// port fails later at resolution.
    pub port: u32,
    /// Always begins with `/`; defaults to `/` when the URL has no path.
    pub endpoint: String,
}

/// Success-path outcome of a single probe.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    /// First response line, from the first `HTTP/` occurrence to end of line.
    pub status_line: String,
    /// Wall clock from just before connect through the end of receive.
    pub response_time_ms: u64,
    /// Accumulated response bytes, capped at [`MAX_RESPONSE_BYTES`].
    pub raw_response: Vec<u8>,
}

/// Probe failures. Every variant is terminal for the probe: no stage is
/// retried and no partial success is reported.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("invalid URL format: {0}")]
    InvalidUrl(#[from] UrlError),
    #[error("could not resolve host '{host}': {source}")]
    ResolutionFailure {
        host: String,
        source: std::io::Error,
    },
    #[error("connection to {addr} failed: {source}")]
    ConnectFailure {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("connection to {addr} timed out after {timeout_ms}ms")]
    ConnectTimeout { addr: SocketAddr, timeout_ms: u64 },
    #[error("failed to send request: {0}")]
    SendFailure(#[source] std::io::Error),
    #[error("failed to read response: {0}")]
    ReceiveFailure(#[source] std::io::Error),
    #[error("response timed out after {timeout_ms}ms ({received} bytes received)")]
    ReceiveTimeout { timeout_ms: u64, received: usize },
    #[error("response contains no HTTP status line")]
    MalformedResponse,
    #[error("HTTP status is not 200: {status_line}")]
    NonSuccessStatus { status_line: String },
}
