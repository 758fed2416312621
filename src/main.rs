use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tunestore::catalog_store::InMemoryCatalogStore;
use tunestore::config::{self, LogLevel};
use tunestore::server::{metrics, run_server, GuardedCatalogStore, RequestsLoggingLevel};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    if path_buf.is_absolute() {
        return Ok(path_buf);
    }
    let cwd = std::env::current_dir().with_context(|| format!("Error resolving path: {}", s))?;
    Ok(cwd.join(path_buf))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Its values override the command line.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The address to bind.
    #[clap(long, default_value = "0.0.0.0")]
    pub host: String,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping). Disabled when unset.
    #[clap(long)]
    pub metrics_port: Option<u16>,

    /// Verbosity of the process log. LOG_LEVEL, when set, takes precedence.
    #[clap(long, default_value = "info")]
    pub log_level: LogLevel,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Largest accepted request body, in bytes.
    #[clap(long, default_value_t = 1024)]
    pub max_body_bytes: usize,

    /// Largest accepted body for `/addArtist`, in bytes.
    #[clap(long, default_value_t = 1 << 20)]
    pub max_artist_body_bytes: usize,

    /// Requests taking longer than this many seconds are aborted.
    #[clap(long, default_value_t = 30)]
    pub request_timeout_sec: u64,
}

/// Convert CLI args to CliConfig for config resolution
impl From<&CliArgs> for config::CliConfig {
    fn from(args: &CliArgs) -> Self {
        config::CliConfig {
            host: args.host.clone(),
            port: args.port,
            metrics_port: args.metrics_port,
            log_level: args.log_level,
            logging_level: args.logging_level.clone(),
            max_body_bytes: args.max_body_bytes,
            max_artist_body_bytes: args.max_artist_body_bytes,
            request_timeout_sec: args.request_timeout_sec,
        }
    }
}

/// Resolves once the process is asked to stop.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Cannot listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Cannot listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown"),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    // Load TOML config if provided
    let file_config = match &cli_args.config {
        Some(path) => Some(config::FileConfig::load(path)?),
        None => None,
    };

    // Resolve final configuration (TOML overrides CLI)
    let cli_config: config::CliConfig = (&cli_args).into();
    let app_config = config::AppConfig::resolve(&cli_config, file_config)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(app_config.log_level.to_level_filter().into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    if let Some(path) = &cli_args.config {
        info!("Configuration loaded from {:?}", path);
    }
    info!("  host: {}", app_config.host);
    info!("  port: {}", app_config.port);
    info!("  log_level: {}", app_config.log_level);
    info!("  logging_level: {}", app_config.logging_level);
    info!("  max_body_bytes: {}", app_config.max_body_bytes);
    info!(
        "  max_artist_body_bytes: {}",
        app_config.max_artist_body_bytes
    );

    let catalog_store: GuardedCatalogStore = Arc::new(InMemoryCatalogStore::new());

    info!("Initializing metrics...");
    metrics::init_metrics();
    metrics::update_catalog_metrics(catalog_store.as_ref());

    let shutdown_token = CancellationToken::new();
    let signal_token = shutdown_token.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        signal_token.cancel();
    });

    run_server(
        catalog_store,
        app_config.server_config(),
        app_config.metrics_port,
        shutdown_token,
    )
    .await
}
