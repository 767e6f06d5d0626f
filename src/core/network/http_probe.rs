/*!
One-shot HTTP health probe execution.

[`HealthProbe`] drives a single linear pass over a parsed [`Target`]:
resolve → connect → send → receive → validate. Every stage failure is
terminal; nothing is retried and no state survives the call.

## Timeout budgets

Two explicit budgets are passed in rather than armed as socket options:

- `connect_timeout` bounds the connect call, and the send direction reuses
  the same budget (a deliberate asymmetry kept from the probe's established
  behavior).
- `recv_timeout` bounds each individual read while the response accumulates.

## Status validation

The pass check is a substring match, not a parsed status code: the 15-byte
window starting at the first `HTTP/` occurrence must contain `200`. This
false-positives on statuses like `1200` and is kept intentionally for
behavioral parity with the established probe.
*/

use std::time::{Duration, Instant};

use tokio::time::timeout;

use crate::core::network::transport::{TcpTransport, Transport};
use crate::core::network::types::{
    ProbeError, ProbeReport, Target, MAX_RESPONSE_BYTES, STATUS_WINDOW_LEN,
};

const RECV_CHUNK: usize = 1024;

/// Single-shot health probe over an injected [`Transport`].
pub struct HealthProbe {
    transport: Box<dyn Transport>,
    connect_timeout: Duration,
    recv_timeout: Duration,
}

impl HealthProbe {
    /// Probe over the production TCP transport.
    pub fn new(connect_timeout: Duration, recv_timeout: Duration) -> Self {
        Self::with_transport(Box::new(TcpTransport), connect_timeout, recv_timeout)
    }

    /// Probe over an injected transport, for tests.
    pub fn with_transport(
        transport: Box<dyn Transport>,
        connect_timeout: Duration,
        recv_timeout: Duration,
    ) -> Self {
        Self {
            transport,
            connect_timeout,
            recv_timeout,
        }
    }

    /// Execute one probe: resolve, connect, send a minimal GET, read until
    /// the peer closes, validate the status window.
    ///
    /// `response_time_ms` spans from just before connect through the end of
    /// receive; it is only reported on the success path. The connection is
    /// dropped (closed) on every return path.
    pub async fn probe(&self, target: &Target) -> Result<ProbeReport, ProbeError> {
        let addrs = self
            .transport
            .resolve(&target.host, target.port)
            .await
            .map_err(|source| ProbeError::ResolutionFailure {
                host: target.host.clone(),
                source,
            })?;
        let addr = addrs.first().copied().ok_or_else(|| {
            ProbeError::ResolutionFailure {
                host: target.host.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no IPv4 address found",
                ),
            }
        })?;

        let started = Instant::now();

        let mut conn = match timeout(self.connect_timeout, self.transport.connect(addr)).await {
            Ok(Ok(conn)) => conn,
            Ok(Err(source)) => return Err(ProbeError::ConnectFailure { addr, source }),
            Err(_) => {
                return Err(ProbeError::ConnectTimeout {
                    addr,
                    timeout_ms: self.connect_timeout.as_millis() as u64,
                })
            }
        };

        let request = compose_request(target);
        match timeout(self.connect_timeout, conn.send(request.as_bytes())).await {
            Ok(Ok(())) => {}
            Ok(Err(source)) => return Err(ProbeError::SendFailure(source)),
            Err(_) => {
                return Err(ProbeError::SendFailure(std::io::Error::new(
                    std::io::ErrorKind::TimedOut,
                    "send timed out",
                )))
            }
        }

        let mut response = Vec::with_capacity(MAX_RESPONSE_BYTES);
        let mut chunk = [0u8; RECV_CHUNK];
        loop {
            let n = match timeout(self.recv_timeout, conn.recv(&mut chunk)).await {
                Ok(Ok(0)) => break,
                Ok(Ok(n)) => n,
                Ok(Err(source)) => return Err(ProbeError::ReceiveFailure(source)),
                Err(_) => {
                    return Err(ProbeError::ReceiveTimeout {
                        timeout_ms: self.recv_timeout.as_millis() as u64,
                        received: response.len(),
                    })
                }
            };
            // Hard cap: keep draining to end-of-stream, discard the excess.
            let room = MAX_RESPONSE_BYTES - response.len();
            response.extend_from_slice(&chunk[..n.min(room)]);
        }

        let response_time_ms = started.elapsed().as_millis() as u64;

        let status_line = validate_response(&response)?;

        Ok(ProbeReport {
            status_line,
            response_time_ms,
            raw_response: response,
        })
    }
}

/// Minimal HTTP/1.1 GET for the target. The endpoint is sent verbatim, no
/// percent-encoding.
pub fn compose_request(target: &Target) -> String {
    format!(
        "GET {} HTTP/1.1\r\nHost: {}\r\nUser-Agent: upcheck/{}\r\nAccept: */*\r\nConnection: close\r\n\r\n",
        target.endpoint,
        target.host,
        env!("CARGO_PKG_VERSION"),
    )
}

/// Check the accumulated response and extract the status line.
///
/// The line starts at the first `HTTP/` occurrence and runs to CR/LF or end
/// of input; the 200 check only looks at the first [`STATUS_WINDOW_LEN`]
/// bytes from that same offset.
pub fn validate_response(raw: &[u8]) -> Result<String, ProbeError> {
    let start = find(raw, b"HTTP/").ok_or(ProbeError::MalformedResponse)?;
    let rest = &raw[start..];

    let line_end = rest
        .iter()
        .position(|&b| b == b'\r' || b == b'\n')
        .unwrap_or(rest.len());
    let status_line = String::from_utf8_lossy(&rest[..line_end]).into_owned();

    let window = &rest[..rest.len().min(STATUS_WINDOW_LEN)];
    if find(window, b"200").is_some() {
        Ok(status_line)
    } else {
        Err(ProbeError::NonSuccessStatus { status_line })
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
