//! pixel-probe - print image dimensions read from file headers.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixel_probe::{
    batch::probe_paths,
    config::{Config, OutputFormat},
    report::{render_json, render_text},
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!(
        "Probing {} file(s), {} at a time, up to {} bytes each",
        config.paths.len(),
        config.jobs,
        config.max_bytes
    );

    let reports = probe_paths(&config.paths, config.max_bytes, config.jobs).await;

    match config.output {
        OutputFormat::Text => println!("{}", render_text(&reports)),
        OutputFormat::Json => match render_json(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize reports: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    if failed > 0 {
        info!("{} of {} file(s) could not be probed", failed, reports.len());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
///
/// Logs go to stderr so that stdout carries only the reports.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "pixel_probe=debug"
    } else {
        "pixel_probe=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
