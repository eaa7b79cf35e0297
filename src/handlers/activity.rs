use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::AppState;
use crate::error::ApiError;
use crate::services::activity_service::ActivityService;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogActivityRequest {
    pub login_id: Option<String>,
    pub sql_query: Option<String>,
    pub execution_result: Option<Value>,
    pub success: Option<bool>,
}

/// POST /api/log-activity - append one execution-attempt record
///
/// `loginId` is stored as supplied; it is not validated against the user
/// table.
pub async fn log_activity(
    State(state): State<AppState>,
    Json(payload): Json<LogActivityRequest>,
) -> Result<Json<Value>, ApiError> {
    let service = ActivityService::new(state.tracker.clone());

    let record = service
        .log_activity(
            payload.login_id.as_deref().unwrap_or_default(),
            payload.sql_query.as_deref().unwrap_or_default(),
            payload.execution_result.as_ref().unwrap_or(&Value::Null),
            payload.success.unwrap_or(false),
        )
        .await?;

    Ok(Json(json!({
        "success": true,
        "message": "Activity logged successfully",
        "activity": record,
    })))
}
