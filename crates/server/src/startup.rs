use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use service::{organizations::OrganizationStore, runtime};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(3000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Resolve the document path from configs or env, with a sensible default
fn load_data_path() -> String {
    match configs::load_default() {
        Ok(cfg) => cfg.storage.data_path,
        Err(_) => env::var("DATA_PATH").unwrap_or_else(|_| "data/organizations.json".to_string()),
    }
}

fn log_endpoints() {
    info!("available endpoints:");
    info!("- GET /api/organizations (orphanages)");
    info!("- GET /api/organizations1 (old age homes)");
    info!("- GET /api/organization/:type/:id");
    info!("- POST /api/organization/:type");
    info!("- PUT /api/organization/:type/:id/funding");
    info!("- DELETE /api/organization/:type/:id");
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    runtime::ensure_env("frontend", "data").await?;

    // Organization document store (file persistence)
    let data_path = load_data_path();
    let store = OrganizationStore::new(&data_path).await?;
    info!(%data_path, "organization store ready");

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(Arc::clone(&store), cors);

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, "starting server crate");
    log_endpoints();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
