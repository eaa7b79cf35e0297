use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::database::AppState;
use crate::error::ApiError;

/// GET /api/test - liveness check, touches no store
pub async fn api_test() -> Json<Value> {
    Json(json!({ "message": "sqlbridge-api is running" }))
}

/// GET /api/test-supabase - tracker-store connectivity probe
///
/// Round-trips `SELECT NOW()` so the response carries the store's own clock.
pub async fn tracker_probe(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let time: DateTime<Utc> = sqlx::query_scalar("SELECT NOW()")
        .fetch_one(&state.tracker)
        .await?;

    Ok(Json(json!({
        "success": true,
        "message": "Tracker store connection is working",
        "time": time,
    })))
}
