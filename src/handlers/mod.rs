use axum::routing::{get, post};
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::database::AppState;

pub mod activity;
pub mod auth;
pub mod health;
pub mod query;
pub mod schema;

pub fn app(state: AppState) -> Router {
    Router::new()
        // Liveness and store probes
        .route("/api/test", get(health::api_test))
        .route("/api/test-supabase", get(health::tracker_probe))
        // Warehouse surface
        .route("/api/tables", get(schema::list_tables))
        .route("/api/schema/:table_name", get(schema::describe_table))
        .route("/api/query", post(query::run_query))
        // Tracker surface
        .route("/api/signup", post(auth::signup))
        .route("/api/login", post(auth::login))
        .route("/api/log-activity", post(activity::log_activity))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
