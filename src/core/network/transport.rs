//! Narrow network capability behind the probe.
//!
//! [`Transport`] and [`Connection`] are the only surface the probe touches,
//! so tests can swap in fakes without a live network or OS timers. The
//! production implementation is a thin layer over `tokio::net`.
//!
//! Deadlines are not applied here: the probe wraps each call in an explicit
//! timeout so the budgets stay visible in one place.

use std::io;
use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Address resolution and connection establishment.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Resolve `host:port` to concrete addresses, IPv4 stream sockets only.
    async fn resolve(&self, host: &str, port: u32) -> io::Result<Vec<SocketAddr>>;

    /// Open a connection to one resolved address.
    async fn connect(&self, addr: SocketAddr) -> io::Result<Box<dyn Connection>>;
}

/// One established connection, exclusively owned by a single probe. Dropping
/// it closes the socket, on every exit path.
#[async_trait::async_trait]
pub trait Connection: Send {
    /// Write the full byte sequence in one logical send.
    async fn send(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// One read into `buf`; returns 0 at end-of-stream.
    async fn recv(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// Production transport over the operating system's resolver and TCP stack.
#[derive(Default)]
pub struct TcpTransport;

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn resolve(&self, host: &str, port: u32) -> io::Result<Vec<SocketAddr>> {
        // Resolved through the string form so an out-of-range port fails
        // here, as the reference behavior does, instead of being clamped.
        let addrs = tokio::net::lookup_host(format!("{host}:{port}")).await?;
        Ok(addrs.filter(SocketAddr::is_ipv4).collect())
    }

    async fn connect(&self, addr: SocketAddr) -> io::Result<Box<dyn Connection>> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Box::new(stream))
    }
}

#[async_trait::async_trait]
impl Connection for TcpStream {
    async fn send(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.write_all(bytes).await?;
        self.flush().await
    }

    async fn recv(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read(buf).await
    }
}
