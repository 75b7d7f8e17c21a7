use toolshelf::config::{Config, LogFormat};
use toolshelf::{Directory, DirectoryRequest};

use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing; logs go to stderr so stdout stays pure JSON
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "toolshelf=info".into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    // Set up Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {}", e))?;
    let metrics_dump = config.metrics_dump;

    // Request comes in as a JSON argument; no argument means the dashboard
    let request: DirectoryRequest = match std::env::args().nth(1) {
        Some(raw) => serde_json::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("Invalid request JSON: {}", e))?,
        None => DirectoryRequest::Dashboard,
    };

    let start = std::time::Instant::now();
    let directory = Directory::new(config)?;
    tracing::info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Directory loaded",
    );

    let response = directory.handle(&request)?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    if metrics_dump {
        eprintln!("{}", prometheus_handle.render());
    }

    Ok(())
}
