use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Persisted `learner_activity` row. `login_id` is opaque text: the store
/// does not enforce that it names a known user, and neither does this layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub id: i64,
    pub login_id: String,
    pub sql_query: String,
    pub execution_result: String,
    pub success: bool,
    pub created_at: DateTime<Utc>,
}
