//! Serve mode: the stats endpoint.
//!
//! Exposes `GET /get_system_stats` returning the JSON snapshot the
//! dashboard polls, produced from local probes on each request.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{extract::State, routing::get, Json, Router};
use tokio::task::JoinHandle;

use crate::collector::StatsCollector;
use crate::models::StatsSnapshot;
use crate::startup::STATS_PATH;

/// Shared collector state: one probe set, refreshed per request.
type SharedCollector = Arc<Mutex<StatsCollector>>;

/// Build the router serving the stats endpoint.
pub fn router(collector: SharedCollector) -> Router {
    Router::new()
        .route(STATS_PATH, get(get_system_stats))
        .with_state(collector)
}

/// Start the stats server on the given address.
///
/// Returns a JoinHandle for the server task and the address actually
/// bound, so tests can bind to port 0.
pub async fn start_server(addr: SocketAddr) -> std::io::Result<(JoinHandle<()>, SocketAddr)> {
    let collector: SharedCollector = Arc::new(Mutex::new(StatsCollector::new()));
    let app = router(collector);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    tracing::info!("stats endpoint listening on http://{}", actual_addr);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("stats server error: {}", e);
        }
    });

    Ok((handle, actual_addr))
}

/// Handler for the stats endpoint.
async fn get_system_stats(State(collector): State<SharedCollector>) -> Json<StatsSnapshot> {
    let snapshot = collector.lock().unwrap().collect();
    Json(snapshot)
}
