use std::process::ExitCode;
use std::time::Duration;

use upcheck::cli::Cli;
use upcheck::core::network::{url_parser, HealthProbe, ProbeError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), ProbeError> {
    let target = url_parser::parse(&cli.url)?;

    println!("Host: {}", target.host);
    println!("Port: {}", target.port);
    println!("Endpoint: {}", target.endpoint);

    let probe = HealthProbe::new(
        Duration::from_millis(cli.connect_timeout_ms),
        Duration::from_millis(cli.recv_timeout_ms),
    );
    let report = probe.probe(&target).await?;

    println!("Status: {}", report.status_line);
    println!("Response time: {}ms", report.response_time_ms);

    Ok(())
}
