use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flood_server::cache::{CacheConfig, CachedFloodClient};
use flood_server::floodapi::{FloodClient, FloodConfig};
use flood_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flood_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Optional overrides for local development
    let mut flood_config = FloodConfig::new();
    if let Ok(base_url) = std::env::var("FLOOD_API_BASE_URL") {
        flood_config = flood_config.with_base_url(base_url);
    }

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    // Create flood API client
    let flood_client = FloodClient::new(flood_config).expect("Failed to create flood API client");

    // Create cached client (15-minute TTL, matching the upstream update rate)
    let cache_config = CacheConfig::default();
    let cached_flood = CachedFloodClient::new(flood_client, &cache_config);

    // Build app state
    let state = AppState::new(cached_flood);

    // Create router
    let app = create_router(state, "static");

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("Flood-monitoring station server listening on http://{addr}");
    info!("Routes:");
    info!("  GET /                    - Station list view");
    info!("  GET /station/:id         - Station detail view");
    info!("  GET /health              - Health check");
    info!("  GET /api/stations        - Station list (JSON)");
    info!("  GET /api/station/:id     - Station detail (JSON)");
    info!("  GET /api/readings/:id    - Station readings (JSON)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
