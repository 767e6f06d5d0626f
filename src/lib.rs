//! One-shot HTTP liveness probe.
//!
//! Given a URL, `upcheck` resolves the host, opens a TCP connection within a
//! bounded time, issues a minimal HTTP/1.1 GET, reads the full response
//! within a second bound, and passes only when the response carries a 200
//! status indicator. Each probe is a pure function from (URL, timeouts,
//! network capability) to an outcome: no configuration files, no persisted
//! state, no retries.

pub mod cli;
pub mod core;
