use anyhow::{Context, Result};
use std::time::Duration;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::timeout::TimeoutLayer;
use tracing::{error, info, warn};

use axum::{
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, Uri},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

#[cfg(feature = "slowdown")]
use super::slowdown_request;
use super::{
    catalog_routes::make_catalog_routes, log_requests, metrics::metrics_handler,
    metrics::record_error, state::*, ServerConfig,
};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    pub artists: usize,
    pub albums: usize,
    pub songs: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let catalog = &state.catalog_store;
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        artists: catalog.get_artists_count(),
        albums: catalog.get_albums_count(),
        songs: catalog.get_songs_count(),
    };
    Json(stats)
}

async fn not_found(uri: Uri) -> Response {
    warn!("No route for {}", uri.path());
    record_error("not_found", "unmatched");
    StatusCode::NOT_FOUND.into_response()
}

pub fn make_app(config: ServerConfig, catalog_store: GuardedCatalogStore) -> Router {
    let state = ServerState::new(config.clone(), catalog_store);

    let mut app: Router = Router::new()
        .route("/", get(home))
        .merge(make_catalog_routes(config.max_artist_body_bytes))
        .fallback(not_found)
        .with_state(state.clone());

    app = app.layer(DefaultBodyLimit::max(config.max_body_bytes));
    #[cfg(feature = "slowdown")]
    {
        app = app.layer(middleware::from_fn(slowdown_request));
    }
    app = app.layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        config.request_timeout,
    ));
    app = app.layer(middleware::from_fn_with_state(state.clone(), log_requests));

    app
}

async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    let address = format!("{}:{}", host, port);
    TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))
}

/// Serves the catalog until `shutdown` is cancelled. When `metrics_port` is
/// set, Prometheus metrics are exposed on a second listener at `/metrics`.
pub async fn run_server(
    catalog_store: GuardedCatalogStore,
    config: ServerConfig,
    metrics_port: Option<u16>,
    shutdown: CancellationToken,
) -> Result<()> {
    let listener = bind(&config.host, config.port).await?;
    let app = make_app(config.clone(), catalog_store);

    if let Some(metrics_port) = metrics_port {
        let metrics_listener = bind(&config.host, metrics_port).await?;
        let metrics_app = Router::new().route("/metrics", get(metrics_handler));
        let metrics_shutdown = shutdown.clone();
        tokio::spawn(async move {
            if let Err(err) = axum::serve(metrics_listener, metrics_app)
                .with_graceful_shutdown(metrics_shutdown.cancelled_owned())
                .await
            {
                error!("Metrics server failed: {}", err);
            }
        });
        info!("Metrics available at port {}!", metrics_port);
    }

    info!("Ready to serve at {}:{}!", config.host, config.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;
    info!("Server stopped");
    Ok(())
}
