//! Static host for the storefront pages, the wasm bundle and the catalog.
//!
//! Serves files only. Session gating, the cart and everything else run in
//! the browser against `localStorage`.

mod config;

use anyhow::Context;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use sf_api_types::Product;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::StorefrontConfig;

const CATALOG_PATH: &str = "data/products.json";

#[derive(Debug, Serialize)]
struct HealthResponse {
    service: &'static str,
    status: &'static str,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = StorefrontConfig::from_env()?;
    if !config.site_dir.is_dir() {
        warn!(
            "site directory {} does not exist; every page will be 404",
            config.site_dir.display()
        );
    }
    check_catalog(&config.site_dir);

    let app = app(&config.site_dir);

    info!(
        "storefront-service serving {} on {}",
        config.site_dir.display(),
        config.addr
    );

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn app(site_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health))
        .fallback_service(ServeDir::new(site_dir))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "storefront-service",
        status: "ok",
    })
}

/// Parse the catalog once at startup so a broken file shows up in the log.
/// The file is still served as-is; the browser logs its own failure.
fn check_catalog(site_dir: &Path) -> Option<usize> {
    let path = site_dir.join(CATALOG_PATH);
    let body = match std::fs::read_to_string(&path) {
        Ok(body) => body,
        Err(err) => {
            warn!("catalog {} not readable: {}", path.display(), err);
            return None;
        }
    };
    match serde_json::from_str::<Vec<Product>>(&body) {
        Ok(products) => {
            info!("catalog {} lists {} products", path.display(), products.len());
            Some(products.len())
        }
        Err(err) => {
            warn!("catalog {} is not a product list: {}", path.display(), err);
            None
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
