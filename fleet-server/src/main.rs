use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use fleet_server::config::ServerConfig;
use fleet_server::swapi::{SwapiClient, SwapiConfig};
use fleet_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env();

    // Create SWAPI client
    let swapi_config = SwapiConfig::new().with_base_url(&config.swapi_url);
    let swapi = SwapiClient::new(swapi_config).expect("Failed to create SWAPI client");

    // Build app state
    let state = AppState::new(swapi, config.fetch_timeout());

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    println!("Fleet server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health                     - Health check");
    println!("  GET /calculate-stops/{{distance}} - Resupply stops per starship");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

/// Resolve once ctrl-c is received, letting in-flight requests drain.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    println!("Shutting down...");
}
