use sqlbridge_api::config;
use sqlbridge_api::database::pools::AppState;
use sqlbridge_api::handlers;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up WAREHOUSE_DB_*, TRACKER_DB_*, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting sqlbridge-api in {:?} mode", config.environment);

    let state = AppState::from_config(config);

    // Startup connectivity probe against the warehouse. A failure is logged
    // and the server keeps running; pools connect lazily on first use.
    match state.probe_warehouse().await {
        Ok(()) => tracing::info!("Warehouse connectivity probe ok"),
        Err(e) => tracing::error!("Warehouse connectivity probe failed: {}", e),
    }

    let app = handlers::app(state);

    // Allow tests or deployments to override port via env
    let port = std::env::var("SQLBRIDGE_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3001);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 sqlbridge-api listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
