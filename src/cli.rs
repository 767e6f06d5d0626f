use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "upcheck")]
#[command(version = concat!("Ver:", env!("CARGO_PKG_VERSION")))]
#[command(about = "One-shot HTTP liveness probe with bounded deadlines")]
pub struct Cli {
    /// URL to probe, e.g. http://example.com:8080/health
    pub url: String,

    /// Connect deadline in milliseconds (the send path reuses this budget)
    #[arg(long = "connect-timeout-ms", default_value_t = 5000)]
    pub connect_timeout_ms: u64,

    /// Per-read receive deadline in milliseconds
    #[arg(long = "recv-timeout-ms", default_value_t = 5000)]
    pub recv_timeout_ms: u64,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
