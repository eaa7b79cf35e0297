use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::database::AppState;
use crate::error::ApiError;
use crate::services::schema_service::SchemaService;

/// GET /api/tables - enumerate warehouse tables
pub async fn list_tables(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let service = SchemaService::new(state.warehouse.clone());
    let names = service.list_tables().await?;

    let tables: Vec<Value> = names.into_iter().map(|name| json!({ "name": name })).collect();
    Ok(Json(json!({ "tables": tables })))
}

/// GET /api/schema/:table_name - describe one table's columns
///
/// An unknown table name returns a successful response with an empty column
/// list rather than a 404.
pub async fn describe_table(
    Path(table_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let service = SchemaService::new(state.warehouse.clone());
    let columns = service.describe_table(&table_name).await?;

    Ok(Json(json!({
        "success": true,
        "tableName": table_name,
        "columns": columns,
    })))
}
