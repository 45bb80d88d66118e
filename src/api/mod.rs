//! REST API for the annotated site collection.
//!
//! Provides two GET endpoints:
//! - `/sites` — annotated records with optional year-range filtering
//! - `/summary` — aggregate dataset figures

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::data::record::SiteRecord;
use crate::data::summary::SiteSummary;

/// Immutable application state shared across all request handlers.
///
/// Constructed once after the dataset is loaded and annotated, then wrapped
/// in `Arc` — no locks needed since all data is read-only.
pub struct AppState {
    /// Annotated site records.
    pub sites: Vec<SiteRecord>,
    /// Aggregate summary over the collection.
    pub summary: SiteSummary,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/sites", get(handlers::get_sites))
        .route("/summary", get(handlers::get_summary))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
