use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::AppState;
use crate::error::ApiError;
use crate::services::query_service::QueryService;

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub sql: Option<String>,
}

/// POST /api/query - forward SELECT text to the warehouse
pub async fn run_query(
    State(state): State<AppState>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<Value>, ApiError> {
    // A missing field behaves like empty text and fails the guard.
    let sql = payload.sql.unwrap_or_default();

    let service = QueryService::new(state.warehouse.clone());
    let output = service.run_query(&sql).await?;

    Ok(Json(json!({
        "success": true,
        "data": output.rows,
        "rowCount": output.row_count,
    })))
}
