//! URL decomposition for probe targets.
//!
//! Splits `scheme://host[:port][/endpoint]` into a [`Target`]. The rules are
//! deliberately simple and match the probe's established behavior:
//! - Only the `://` delimiter matters; any scheme name is accepted.
//! - A `:` counts as the port delimiter only when it appears before the
//!   first `/` of the authority-and-path text.
//! - Non-numeric port text parses to 0 instead of failing (quirk, kept).
//! - Userinfo (`user@host`) is not special-cased and stays inside `host`.
//! - Over-length host or endpoint text is rejected, never truncated.

use crate::core::network::types::{Target, MAX_ENDPOINT_LEN, MAX_HOST_LEN};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error("missing '://' scheme delimiter")]
    MissingSchemeDelimiter,
    #[error("host is empty")]
    EmptyHost,
    #[error("host exceeds {MAX_HOST_LEN} bytes")]
    HostTooLong,
    #[error("endpoint exceeds {MAX_ENDPOINT_LEN} bytes")]
    EndpointTooLong,
}

/// Decompose a raw URL into host, port, and endpoint.
///
/// Port defaults to 80 when absent; endpoint defaults to `/`.
///
/// # Examples
/// - `http://example.com` → (`example.com`, 80, `/`)
/// - `http://example.com:9090` → (`example.com`, 9090, `/`)
/// - `http://example.com/health` → (`example.com`, 80, `/health`)
/// - `http://example.com:abc/x` → port 0 (malformed port text parses to 0)
pub fn parse(url: &str) -> Result<Target, UrlError> {
    let scheme_end = url
        .find("://")
        .ok_or(UrlError::MissingSchemeDelimiter)?
        + "://".len();
    let rest = &url[scheme_end..];

    let colon = rest.find(':');
    let slash = rest.find('/');

    let (host, port) = match (colon, slash) {
        // ':' present and before any '/': explicit port.
        (Some(c), s) if s.map_or(true, |s| c < s) => {
            let host = &rest[..c];
            let port_text = match s {
                Some(s) => &rest[c + 1..s],
                None => &rest[c + 1..],
            };
            (host, port_text.parse::<u32>().unwrap_or(0))
        }
        // No port: host runs to the path start or end of string.
        (_, s) => (&rest[..s.unwrap_or(rest.len())], 80),
    };

    if host.is_empty() {
        return Err(UrlError::EmptyHost);
    }
    if host.len() > MAX_HOST_LEN {
        return Err(UrlError::HostTooLong);
    }

    let endpoint = match slash {
        Some(s) => &rest[s..],
        None => "/",
    };
    if endpoint.len() > MAX_ENDPOINT_LEN {
        return Err(UrlError::EndpointTooLong);
    }

    Ok(Target {
        host: host.to_string(),
        port,
        endpoint: endpoint.to_string(),
    })
}
